//! Catalog persistence for the chocolate sommelier.
//!
//! [`load_catalog`] reads a JSON catalog file, skipping entries that fail to
//! decode or validate, and [`write_catalog`] writes one back. The
//! [`generate`] module builds seeded synthetic catalogs for demos and load
//! testing.

#![forbid(unsafe_code)]

pub mod catalog;
mod error;
pub mod generate;

pub use catalog::{CatalogLoad, SkippedEntry, load_catalog, parse_catalog, write_catalog};
pub use error::{CatalogError, DecodeError, GenerateError};
pub use generate::{
    DEFAULT_COUNT, DEFAULT_CREATED_DATE, DEFAULT_SEED, GeneratorConfig, generate_catalog, write_generated_catalog,
};
