//! Vocabulary entries and corpus loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// A single word tagged with the grade it is taught in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    #[serde(rename = "Word", alias = "word")]
    pub word: String,

    #[serde(rename = "Grade", alias = "grade")]
    pub grade: u32,
}

impl VocabEntry {
    pub fn new(word: impl Into<String>, grade: u32) -> Self {
        Self {
            word: word.into(),
            grade,
        }
    }
}

#[derive(Debug, Error)]
pub enum VocabError {
    #[error("failed to read vocabulary file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse vocabulary file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read the vocabulary corpus (a JSON array of entries) from disk.
pub async fn load_vocabulary(path: &Path) -> Result<Vec<VocabEntry>, VocabError> {
    let data = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| VocabError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let entries: Vec<VocabEntry> =
        serde_json::from_str(&data).map_err(|source| VocabError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), entries = entries.len(), "Vocabulary loaded");
    Ok(entries)
}
