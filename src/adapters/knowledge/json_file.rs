//! JSON file knowledge source.
//!
//! Reads the catalog from a JSON array of entry objects.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::knowledge::KnowledgeEntry;
use crate::ports::{KnowledgeSource, LoadError};

/// Loads the catalog from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileKnowledgeSource {
    path: PathBuf,
}

impl JsonFileKnowledgeSource {
    /// Creates a source reading from the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl KnowledgeSource for JsonFileKnowledgeSource {
    async fn load(&self) -> Result<Vec<KnowledgeEntry>, LoadError> {
        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|e| LoadError::io(format!("{}: {e}", self.path.display())))?;

        serde_json::from_str(&raw)
            .map_err(|e| LoadError::parse(format!("{}: {e}", self.path.display())))
    }
}
