//! Saved-creation store backing `GET /api/creations`.
//!
//! DESIGN
//! ======
//! Records are read once at startup from a JSON array on disk and served
//! read-only. A missing file is a fresh install and yields an empty store;
//! an unreadable or malformed file is a startup error.

#[cfg(test)]
#[path = "creations_test.rs"]
mod creations_test;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use origami_client::net::types::CollectionRecord;

#[derive(Debug, thiserror::Error)]
pub enum CreationStoreError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to parse {path}: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
}

#[derive(Debug, Default, Clone)]
pub struct CreationStore {
    records: Vec<CollectionRecord>,
}

impl CreationStore {
    #[must_use]
    pub fn from_records(records: Vec<CollectionRecord>) -> Self {
        Self { records }
    }

    /// Load records from `path`.
    ///
    /// # Errors
    ///
    /// Returns `CreationStoreError` if the file exists but cannot be read or
    /// is not a JSON array of records.
    pub fn load(path: &Path) -> Result<Self, CreationStoreError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no creations file; starting empty");
                return Ok(Self::default());
            }
            Err(source) => return Err(CreationStoreError::Read { path: path.to_path_buf(), source }),
        };

        let records = serde_json::from_str::<Vec<CollectionRecord>>(&raw)
            .map_err(|source| CreationStoreError::Parse { path: path.to_path_buf(), source })?;
        tracing::info!(path = %path.display(), count = records.len(), "creations loaded");
        Ok(Self::from_records(records))
    }

    #[must_use]
    pub fn list(&self) -> &[CollectionRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
