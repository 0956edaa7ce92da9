//! Reading and writing catalog JSON files.
//!
//! A catalog document is an object with an optional `metadata` header and a
//! `chocolates` array. Entries that fail to decode or validate are skipped
//! with a warning so one bad record never hides the rest of the catalog;
//! later entries reusing an earlier identifier are skipped the same way.

use std::collections::BTreeSet;
use std::io::{BufReader, BufWriter, Read, Write};

use camino::Utf8Path;
use log::{info, warn};
use serde_json::{Map, Value};
use sommelier_core::{Catalog, CatalogMetadata, ChocolateItem};
use sommelier_fs::{create_utf8_file, open_utf8_file};

use crate::{CatalogError, DecodeError};

/// A catalog entry that was left out during loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Zero-based position in the `chocolates` array.
    pub index: usize,
    /// Why the entry was rejected.
    pub reason: String,
}

/// The outcome of loading a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogLoad {
    /// Valid items in file order.
    pub catalog: Catalog,
    /// Entries that were skipped.
    pub skipped: Vec<SkippedEntry>,
}

/// Decode a catalog from JSON text.
///
/// # Errors
/// Returns [`DecodeError`] when the text is not JSON or lacks a
/// `chocolates` array.
///
/// # Examples
/// ```
/// use sommelier_data::parse_catalog;
///
/// let load = parse_catalog(r#"{"chocolates": [
///     {"id": "a", "name": "Ghana 68%", "brand": "Divine", "type": "dark"},
///     {"id": "b", "name": "Mystery", "brand": "Nobody", "type": "carob"}
/// ]}"#)
/// .expect("document is a catalog");
/// assert_eq!(load.catalog.len(), 1);
/// assert_eq!(load.skipped.len(), 1);
/// ```
pub fn parse_catalog(text: &str) -> Result<CatalogLoad, DecodeError> {
    read_catalog(text.as_bytes())
}

/// Load a catalog file from disk.
///
/// # Errors
/// Returns [`CatalogError::Open`] when the file cannot be opened and
/// [`CatalogError::Decode`] when it is not a catalog document.
pub fn load_catalog(path: &Utf8Path) -> Result<CatalogLoad, CatalogError> {
    let file = open_utf8_file(path).map_err(|source| CatalogError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let load = read_catalog(BufReader::new(file)).map_err(|source| CatalogError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "loaded {} chocolates from {path} ({} skipped)",
        load.catalog.len(),
        load.skipped.len()
    );
    Ok(load)
}

/// Write a catalog as pretty-printed JSON, creating parent directories.
///
/// # Errors
/// Returns [`CatalogError::Write`] for filesystem failures and
/// [`CatalogError::Encode`] when serialisation fails.
pub fn write_catalog(path: &Utf8Path, catalog: &Catalog) -> Result<(), CatalogError> {
    let write_error = |source| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = create_utf8_file(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, catalog).map_err(|source| {
        CatalogError::Encode {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.write_all(b"\n").map_err(write_error)?;
    writer.flush().map_err(write_error)?;
    info!("wrote {} chocolates to {path}", catalog.len());
    Ok(())
}

fn read_catalog(reader: impl Read) -> Result<CatalogLoad, DecodeError> {
    let document: Value = serde_json::from_reader(reader)?;
    let Value::Object(mut fields) = document else {
        return Err(DecodeError::NotACatalog);
    };
    let Some(Value::Array(entries)) = fields.remove("chocolates") else {
        return Err(DecodeError::NotACatalog);
    };
    let metadata = decode_metadata(&mut fields);

    let mut seen = BTreeSet::new();
    let mut items = Vec::with_capacity(entries.len());
    let mut skipped = Vec::new();
    for (index, entry) in entries.into_iter().enumerate() {
        match decode_entry(entry) {
            Ok(item) if !seen.insert(item.id.clone()) => {
                skip(&mut skipped, index, format!("duplicate id '{}'", item.id));
            }
            Ok(item) => items.push(item),
            Err(reason) => skip(&mut skipped, index, reason),
        }
    }
    Ok(CatalogLoad {
        catalog: Catalog::new(metadata, items),
        skipped,
    })
}

fn decode_metadata(fields: &mut Map<String, Value>) -> CatalogMetadata {
    match fields.remove("metadata") {
        None => CatalogMetadata::default(),
        Some(raw) => serde_json::from_value(raw).unwrap_or_else(|err| {
            warn!("ignoring malformed catalog metadata: {err}");
            CatalogMetadata::default()
        }),
    }
}

fn decode_entry(entry: Value) -> Result<ChocolateItem, String> {
    let item: ChocolateItem = serde_json::from_value(entry).map_err(|err| err.to_string())?;
    item.validate().map_err(|err| err.to_string())?;
    Ok(item)
}

fn skip(skipped: &mut Vec<SkippedEntry>, index: usize, reason: String) {
    warn!("skipping catalog entry {index}: {reason}");
    skipped.push(SkippedEntry { index, reason });
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};
    use sommelier_core::test_support::sample_catalog;
    use tempfile::TempDir;

    #[fixture]
    fn temp() -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().expect("create tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 tempdir");
        (dir, root)
    }

    #[rstest]
    fn round_trip_reproduces_records(temp: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = temp;
        let path = root.join("out/catalog.json");
        let catalog = sample_catalog();
        write_catalog(&path, &catalog).expect("write catalog");
        let load = load_catalog(&path).expect("load catalog");
        assert!(load.skipped.is_empty());
        assert_eq!(load.catalog, catalog);
    }

    #[rstest]
    #[case(r#"[1, 2]"#)]
    #[case(r#"{"metadata": {}}"#)]
    #[case(r#"{"chocolates": {"id": "a"}}"#)]
    fn rejects_non_catalog_documents(#[case] text: &str) {
        let err = parse_catalog(text).expect_err("not a catalog");
        assert!(matches!(err, DecodeError::NotACatalog));
    }

    #[rstest]
    fn rejects_invalid_json() {
        let err = parse_catalog("{chocolates").expect_err("not JSON");
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[rstest]
    fn skips_invalid_and_duplicate_entries() {
        let load = parse_catalog(
            r#"{"chocolates": [
                {"id": "a", "name": "A", "brand": "X", "type": "dark", "rating": 4.1},
                {"id": "b", "name": "B", "brand": "X", "type": "dark", "rating": 7.5},
                {"id": "a", "name": "A again", "brand": "Y", "type": "milk"},
                "not an object",
                {"id": 9, "name": "Numeric id", "brand": "Z", "type": "white"}
            ]}"#,
        )
        .expect("document is a catalog");
        let ids: Vec<&str> = load.catalog.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "9"]);
        let skipped: Vec<usize> = load.skipped.iter().map(|s| s.index).collect();
        assert_eq!(skipped, vec![1, 2, 3]);
    }

    #[rstest]
    fn malformed_metadata_falls_back_to_default() {
        let load = parse_catalog(r#"{"metadata": "oops", "chocolates": []}"#)
            .expect("document is a catalog");
        assert_eq!(load.catalog.metadata(), &CatalogMetadata::default());
        assert!(load.catalog.is_empty());
    }

    #[rstest]
    fn missing_file_reports_open_error(temp: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = temp;
        let err = load_catalog(&root.join("absent.json")).expect_err("file is missing");
        assert!(matches!(err, CatalogError::Open { .. }));
    }
}
