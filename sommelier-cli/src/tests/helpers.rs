//! Test helpers for laying out catalog and preference files.

use camino::{Utf8Path, Utf8PathBuf};
use sommelier_core::test_support::sample_catalog;
use sommelier_data::write_catalog;
use std::fs;
use tempfile::TempDir;

/// Write `contents` to `path`, creating the file.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// A temporary directory holding the curated sample catalog.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        write_catalog(&root.join("catalog.json"), &sample_catalog()).expect("write catalog");
        Self { _dir: dir, root }
    }

    pub(super) fn catalog(&self) -> Utf8PathBuf {
        self.root.join("catalog.json")
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write a preferences file and return its path.
    pub(super) fn preferences(&self, json: &str) -> Utf8PathBuf {
        let path = self.path("preferences.json");
        write_utf8(&path, json.as_bytes());
        path
    }
}
