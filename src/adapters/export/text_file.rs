//! Plain-text transcript exporter.

use async_trait::async_trait;
use std::fmt::Write as _;
use std::path::Path;
use tokio::fs;

use crate::domain::TranscriptEntry;
use crate::ports::{ExportError, TranscriptExporter};

/// Writes the transcript as one `"{speaker}: {message}"` line per entry.
#[derive(Debug, Clone, Default)]
pub struct TextFileExporter;

impl TextFileExporter {
    pub fn new() -> Self {
        Self
    }

    fn render(entries: &[TranscriptEntry]) -> String {
        let mut out = String::new();
        for entry in entries {
            // String formatting never fails; the unwrap-free form keeps
            // the error surface on the actual file write.
            let _ = writeln!(out, "{}: {}", entry.speaker(), entry.message());
        }
        out
    }
}

#[async_trait]
impl TranscriptExporter for TextFileExporter {
    async fn export(
        &self,
        entries: &[TranscriptEntry],
        destination: &Path,
    ) -> Result<(), ExportError> {
        let body = Self::render(entries);

        fs::write(destination, body)
            .await
            .map_err(|e| ExportError::write(format!("{}: {e}", destination.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Speaker;
    use tempfile::TempDir;

    fn sample() -> Vec<TranscriptEntry> {
        vec![
            TranscriptEntry::new(Speaker::User, "hi"),
            TranscriptEntry::new(Speaker::Bot, "hello"),
        ]
    }

    #[tokio::test]
    async fn exports_one_line_per_entry() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transcript.txt");

        TextFileExporter::new().export(&sample(), &path).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "User: hi\nBot: hello\n");
    }

    #[tokio::test]
    async fn export_of_empty_transcript_writes_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");

        TextFileExporter::new().export(&[], &path).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[tokio::test]
    async fn unwritable_destination_is_a_write_error() {
        let result = TextFileExporter::new()
            .export(&sample(), Path::new("/nonexistent/dir/out.txt"))
            .await;

        assert!(matches!(result, Err(ExportError::Write(_))));
    }
}
