//! Error types for catalog I/O and synthetic generation.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised when a catalog document cannot be decoded at all.
///
/// Individual malformed entries are not errors; the loader skips them.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The text is not valid JSON.
    #[error("catalog is not valid JSON")]
    Json(#[from] serde_json::Error),
    /// The JSON is not an object holding a `chocolates` array.
    #[error("expected an object with a `chocolates` array")]
    NotACatalog,
}

/// Errors raised while reading or writing catalog files.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Opening the catalog file failed.
    #[error("failed to open catalog at {path}")]
    Open {
        /// Requested catalog path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The file could not be decoded as a catalog.
    #[error("failed to decode catalog at {path}")]
    Decode {
        /// Catalog path.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: DecodeError,
    },
    /// Creating or flushing the output file failed.
    #[error("failed to write catalog to {path}")]
    Write {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Serialising the catalog failed.
    #[error("failed to serialise catalog into {path}")]
    Encode {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised by the synthetic catalog generator.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A catalog must contain at least one item.
    #[error("requested catalog size must be at least 1")]
    EmptyCatalog,
    /// Persisting the generated catalog failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
