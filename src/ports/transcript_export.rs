//! Transcript Export Port.

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::domain::TranscriptEntry;

/// Port for serializing a transcript to an external destination.
///
/// The wire format is one line per entry: `"{speaker}: {message}"`.
#[async_trait]
pub trait TranscriptExporter: Send + Sync {
    /// Writes the entries to the destination.
    async fn export(
        &self,
        entries: &[TranscriptEntry],
        destination: &Path,
    ) -> Result<(), ExportError>;
}

/// Export errors, surfaced to the user; state is never touched.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// The destination could not be written.
    #[error("could not write transcript: {0}")]
    Write(String),
}

impl ExportError {
    /// Creates a write error.
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write(message.into())
    }
}
