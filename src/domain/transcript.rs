//! Display transcript of the conversation.
//!
//! Human-readable record, distinct from the API-formatted chat history
//! kept by the session. Appended in User-then-Bot pairs per send.

use serde::{Deserialize, Serialize};

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Bot,
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Speaker::User => write!(f, "User"),
            Speaker::Bot => write!(f, "Bot"),
        }
    }
}

/// One transcript line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    speaker: Speaker,
    message: String,
}

impl TranscriptEntry {
    pub fn new(speaker: Speaker, message: impl Into<String>) -> Self {
        Self {
            speaker,
            message: message.into(),
        }
    }

    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Ordered transcript, cleared wholesale on reset.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, speaker: Speaker, message: impl Into<String>) {
        self.entries.push(TranscriptEntry::new(speaker, message));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries in display order.
    pub fn all(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// The most recent message from a speaker, scanning from the end.
    pub fn last_from(&self, speaker: Speaker) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.speaker == speaker)
            .map(|e| e.message.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
