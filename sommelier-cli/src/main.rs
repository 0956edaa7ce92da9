//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

#[expect(clippy::print_stderr, reason = "fatal errors are reported on stderr")]
fn main() {
    if let Err(err) = sommelier_cli::run() {
        eprintln!("sommelier: {err}");
        std::process::exit(1);
    }
}
