//! Speech Ports - recognition and synthesis engines.
//!
//! Both engines are opaque external services. Recognition distinguishes
//! soft outcomes (silence, unintelligible speech) from hard errors so
//! the caller can prompt the user instead of reporting a failure.

use async_trait::async_trait;
use thiserror::Error;

/// Result of one listening attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionOutcome {
    /// Speech was captured and transcribed.
    Recognized(String),
    /// Nothing was heard within the listen timeout.
    NoSpeech,
    /// Audio was captured but could not be transcribed.
    Unintelligible,
}

/// Port for speech-to-text capture.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Listens once and transcribes, with the given language code.
    async fn listen(&self, language: &str) -> Result<RecognitionOutcome, AudioError>;
}

/// Port for text-to-speech playback.
///
/// `speak` resolves when playback finishes or is stopped; `stop`
/// cancels any in-flight playback.
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Speaks the text aloud in the given language.
    async fn speak(&self, text: &str, language: &str) -> Result<(), AudioError>;

    /// Stops any in-flight playback.
    async fn stop(&self) -> Result<(), AudioError>;
}

/// Audio engine errors.
#[derive(Debug, Clone, Error)]
pub enum AudioError {
    /// The engine could not be started at all.
    #[error("audio engine unavailable: {0}")]
    EngineUnavailable(String),

    /// Microphone or capture failure.
    #[error("microphone error: {0}")]
    Microphone(String),

    /// The engine ran but reported a failure.
    #[error("speech service error: {0}")]
    Service(String),

    /// A playback is already in progress.
    #[error("playback already in progress")]
    Busy,
}

impl AudioError {
    /// Creates an engine-unavailable error.
    pub fn engine_unavailable(message: impl Into<String>) -> Self {
        Self::EngineUnavailable(message.into())
    }

    /// Creates a microphone error.
    pub fn microphone(message: impl Into<String>) -> Self {
        Self::Microphone(message.into())
    }

    /// Creates a service error.
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service(message.into())
    }
}
