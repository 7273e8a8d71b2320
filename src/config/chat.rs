//! Chat session configuration: preamble and disclaimer text

use serde::Deserialize;

use super::error::ValidationError;

/// Fixed texts that frame every conversation
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Preamble priming the conversation. Sent as the first history
    /// entry with role `user` (the API has no separate system role
    /// when priming a chat).
    #[serde(default = "default_preamble")]
    pub system_preamble: String,

    /// Suffix appended to every displayed assistant reply
    #[serde(default = "default_disclaimer")]
    pub disclaimer: String,
}

impl ChatConfig {
    /// Validate chat configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.system_preamble.trim().is_empty() {
            return Err(ValidationError::EmptyPreamble);
        }
        Ok(())
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            system_preamble: default_preamble(),
            disclaimer: default_disclaimer(),
        }
    }
}

fn default_preamble() -> String {
    "You are a helpful health assistant. Give general advice, but always \
     recommend consulting a doctor for serious issues."
        .to_string()
}

fn default_disclaimer() -> String {
    "\n\nThis is general advice. Consult a doctor.".to_string()
}
