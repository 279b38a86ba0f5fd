//! Loading the documentation corpus into an immutable in-memory store.

use crate::model::DocEntry;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read docs corpus at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse docs corpus at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Immutable set of documentation entries, loaded once at startup.
#[derive(Debug, Clone)]
pub struct DocStore {
    entries: Vec<DocEntry>,
}

impl DocStore {
    /// Loads the corpus from a docs.json file: a JSON object mapping page paths to entries.
    /// Page path keys are only used for ordering; each entry carries its own doc_url.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let map: BTreeMap<String, DocEntry> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let store = Self::from_entries(map.into_values().collect());
        info!(entries = store.len(), path = %path.display(), "Documentation corpus loaded");
        Ok(store)
    }

    /// Builds a store from already-parsed entries (used by tests).
    pub fn from_entries(entries: Vec<DocEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[DocEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
