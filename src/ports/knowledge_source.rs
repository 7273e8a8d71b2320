//! Knowledge Source Port - loading the static catalog.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::knowledge::KnowledgeEntry;

/// Port for loading catalog entries from an external source.
///
/// Loading happens once at startup. A failure carries a human-readable
/// message; the caller degrades to an empty catalog rather than
/// crashing.
#[async_trait]
pub trait KnowledgeSource: Send + Sync {
    /// Loads all entries, in declaration order.
    async fn load(&self) -> Result<Vec<KnowledgeEntry>, LoadError>;
}

/// Catalog loading errors.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// The source could not be read.
    #[error("knowledge source not readable: {0}")]
    Io(String),

    /// The source was read but is not valid catalog data.
    #[error("knowledge source malformed: {0}")]
    Parse(String),
}

impl LoadError {
    /// Creates an I/O load error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a parse load error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_errors_display_with_context() {
        assert_eq!(
            LoadError::io("no such file").to_string(),
            "knowledge source not readable: no such file"
        );
        assert_eq!(
            LoadError::parse("expected array").to_string(),
            "knowledge source malformed: expected array"
        );
    }
}
