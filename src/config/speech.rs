//! Speech engine configuration
//!
//! Recognition and synthesis run as external engine commands. Both are
//! optional: with no command configured the corresponding feature is
//! simply unavailable.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Speech recognition and synthesis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    /// Text-to-speech engine command
    pub synthesizer_command: Option<String>,

    /// Speech-to-text engine command
    pub recognizer_command: Option<String>,

    /// How long to wait for speech before giving up, in seconds
    #[serde(default = "default_listen_timeout")]
    pub listen_timeout_secs: u64,

    /// Maximum length of a single captured phrase, in seconds
    #[serde(default = "default_phrase_limit")]
    pub phrase_time_limit_secs: u64,
}

impl SpeechConfig {
    /// Listen timeout as Duration
    pub fn listen_timeout(&self) -> Duration {
        Duration::from_secs(self.listen_timeout_secs)
    }

    /// Phrase time limit as Duration
    pub fn phrase_time_limit(&self) -> Duration {
        Duration::from_secs(self.phrase_time_limit_secs)
    }

    /// Validate speech configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.listen_timeout_secs == 0 || self.phrase_time_limit_secs == 0 {
            return Err(ValidationError::InvalidListenTimeout);
        }
        Ok(())
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            synthesizer_command: None,
            recognizer_command: None,
            listen_timeout_secs: default_listen_timeout(),
            phrase_time_limit_secs: default_phrase_limit(),
        }
    }
}

fn default_listen_timeout() -> u64 {
    5
}

fn default_phrase_limit() -> u64 {
    10
}
