use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::output;
use crate::translation::TranslationRecord;

/// Translation cache persisted as a JSON array of records in a single file.
///
/// Records are never deduplicated or evicted. Lookups return the first
/// matching record in file order. The file is not locked, so concurrent
/// invocations may lose each other's appends.
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the cache file empty if it does not exist yet.
    pub fn ensure_exists(&self) -> Result<()> {
        crate::fs::ensure_file(&self.path).context("Failed to create local cache file")
    }

    /// Reads every record in the cache. An empty file holds no records.
    pub fn records(&self) -> Result<Vec<TranslationRecord>> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read cache file: {}", self.path.display()))?;

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse cache file: {}", self.path.display()))
    }

    /// Returns the first record holding an entry translated from exactly
    /// `source_text`.
    pub fn lookup(&self, source_text: &str) -> Option<TranslationRecord> {
        self.records_or_empty()
            .into_iter()
            .find(|record| record.contains_source(source_text))
    }

    /// Appends `record` and rewrites the whole file.
    ///
    /// An unreadable or corrupt cache is replaced by one holding only
    /// `record`.
    pub fn append(&self, record: TranslationRecord) -> Result<()> {
        let mut records = self.records_or_empty();
        records.push(record);

        let contents = serde_json::to_string(&records).context("Failed to serialize cache")?;
        crate::fs::atomic_write(&self.path, &contents)
            .with_context(|| format!("Failed to write cache file: {}", self.path.display()))
    }

    fn records_or_empty(&self) -> Vec<TranslationRecord> {
        self.records().unwrap_or_else(|err| {
            output::report_error(&err);
            Vec::new()
        })
    }
}
