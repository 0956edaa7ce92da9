//! Error types emitted by the sommelier CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use sommelier_core::ConsultationError;
use sommelier_data::{CatalogError, GenerateError};
use thiserror::Error;

/// Errors emitted by the sommelier CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// Installing the log subscriber failed.
    #[error("failed to initialise logging: {0}")]
    Logging(#[source] tracing_subscriber::util::TryInitError),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A numeric option is outside its accepted range.
    #[error("{field} must be {expected}, got {value}")]
    OutOfRange {
        /// Flag name.
        field: &'static str,
        /// Human-readable accepted range.
        expected: &'static str,
        /// Value supplied.
        value: usize,
    },
    /// A date option is not written as `YYYY-MM-DD`.
    #[error("{field} must be a YYYY-MM-DD date, got {value:?}")]
    InvalidDate {
        /// Flag name.
        field: &'static str,
        /// Value supplied.
        value: String,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag name.
        field: &'static str,
        /// Path supplied.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag name.
        field: &'static str,
        /// Path supplied.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag name.
        field: &'static str,
        /// Path supplied.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Loading the catalog failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Generating a synthetic catalog failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),
    /// Opening the preferences file failed.
    #[error("failed to open preferences at {path:?}: {source}")]
    OpenPreferences {
        /// Preferences path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The preferences file is not a JSON object.
    #[error("failed to parse preferences JSON at {path:?}: {source}")]
    ParsePreferences {
        /// Preferences path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Serialising the recommendation response failed.
    #[error("failed to serialise recommendations: {0}")]
    SerialiseResponse(#[source] serde_json::Error),
    /// Reading answers from the terminal failed.
    #[error("failed to read answer: {0}")]
    ReadInput(#[source] std::io::Error),
    /// The consultation rejected an answer.
    #[error(transparent)]
    Consultation(#[from] ConsultationError),
    /// Input ended before the consultation was complete.
    #[error("input closed before every question was answered")]
    InputClosed,
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
