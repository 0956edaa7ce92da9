//! Command-line interface for the chocolate sommelier.
//!
//! Three subcommands are exposed: `recommend` scores a catalog against a
//! preferences file, `consult` asks the questionnaire interactively, and
//! `generate` writes a seeded synthetic catalog. Every option can also come
//! from a configuration file or a `SOMMELIER_CMDS_<SUBCOMMAND>_<FIELD>`
//! environment variable.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use clap::{Parser, Subcommand};

mod consult;
mod error;
mod generate;
mod logging;
mod recommend;

pub use error::CliError;

use consult::{ConsultArgs, run_consult};
use generate::{GenerateArgs, run_generate};
use recommend::{RecommendArgs, run_recommend};

pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_PREFERENCES: &str = "preferences";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ARG_MIN_SCORE: &str = "min-score";
pub(crate) const ARG_NO_DIVERSITY: &str = "no-diversity";
pub(crate) const ARG_KNOWN: &str = "known";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ARG_SEED: &str = "seed";
pub(crate) const ARG_COUNT: &str = "count";
pub(crate) const ARG_CREATED_DATE: &str = "created-date";
pub(crate) const ENV_RECOMMEND_CATALOG: &str = "SOMMELIER_CMDS_RECOMMEND_CATALOG";
pub(crate) const ENV_RECOMMEND_PREFERENCES: &str = "SOMMELIER_CMDS_RECOMMEND_PREFERENCES";
pub(crate) const ENV_CONSULT_CATALOG: &str = "SOMMELIER_CMDS_CONSULT_CATALOG";
pub(crate) const ENV_GENERATE_OUTPUT: &str = "SOMMELIER_CMDS_GENERATE_OUTPUT";

/// Run the sommelier CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration merging or the
/// selected command fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    logging::init(cli.verbose)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Consult(args) => run_consult(args),
        Command::Generate(args) => run_generate(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "sommelier",
    about = "Personalised chocolate recommendations from a static catalog",
    version
)]
struct Cli {
    /// Log at debug level unless `SOMMELIER_LOG` says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a catalog against a JSON preferences file.
    Recommend(RecommendArgs),
    /// Ask the questionnaire interactively and print a shortlist.
    Consult(ConsultArgs),
    /// Write a seeded synthetic catalog.
    Generate(GenerateArgs),
}

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match sommelier_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests;
