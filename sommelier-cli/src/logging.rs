//! Log subscriber set-up for the binary.
//!
//! Library crates log through the `log` facade; the subscriber installed here
//! bridges those records and writes them to stderr so stdout stays reserved
//! for command output.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::CliError;

/// Environment variable holding an `EnvFilter` directive.
pub(crate) const LOG_ENV: &str = "SOMMELIER_LOG";

pub(crate) const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

pub(crate) fn init(verbose: bool) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .map_err(CliError::Logging)
}
