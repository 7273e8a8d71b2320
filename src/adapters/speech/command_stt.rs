//! Command-driven speech recognizer.
//!
//! Runs a configured recognizer command per capture, invoked as
//! `<command> <language> <listen_timeout_secs> <phrase_limit_secs>`,
//! and reads the transcription from stdout. An empty transcription is
//! the "unintelligible" outcome; exceeding the overall deadline is the
//! "no speech" outcome.

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

use crate::ports::{AudioError, RecognitionOutcome, SpeechRecognizer};

/// Speech-to-text over an external recognizer command.
#[derive(Debug, Clone)]
pub struct CommandSpeechRecognizer {
    command: String,
    listen_timeout: Duration,
    phrase_time_limit: Duration,
}

impl CommandSpeechRecognizer {
    /// Creates a recognizer running the given command.
    pub fn new(
        command: impl Into<String>,
        listen_timeout: Duration,
        phrase_time_limit: Duration,
    ) -> Self {
        Self {
            command: command.into(),
            listen_timeout,
            phrase_time_limit,
        }
    }
}

#[async_trait]
impl SpeechRecognizer for CommandSpeechRecognizer {
    async fn listen(&self, language: &str) -> Result<RecognitionOutcome, AudioError> {
        let deadline = self.listen_timeout + self.phrase_time_limit;

        let capture = Command::new(&self.command)
            .arg(language)
            .arg(self.listen_timeout.as_secs().to_string())
            .arg(self.phrase_time_limit.as_secs().to_string())
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = match timeout(deadline, capture).await {
            Err(_) => return Ok(RecognitionOutcome::NoSpeech),
            Ok(Err(e)) => {
                return Err(AudioError::engine_unavailable(format!(
                    "{}: {e}",
                    self.command
                )))
            }
            Ok(Ok(output)) => output,
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AudioError::microphone(stderr));
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if text.is_empty() {
            Ok(RecognitionOutcome::Unintelligible)
        } else {
            Ok(RecognitionOutcome::Recognized(text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognizer(command: &str) -> CommandSpeechRecognizer {
        CommandSpeechRecognizer::new(command, Duration::from_secs(5), Duration::from_secs(10))
    }

    #[tokio::test]
    async fn stdout_becomes_recognized_text() {
        // echo prints its arguments: "en 5 10"
        let result = recognizer("echo").listen("en").await.unwrap();
        assert_eq!(
            result,
            RecognitionOutcome::Recognized("en 5 10".to_string())
        );
    }

    #[tokio::test]
    async fn empty_stdout_is_unintelligible() {
        let result = recognizer("true").listen("en").await.unwrap();
        assert_eq!(result, RecognitionOutcome::Unintelligible);
    }

    #[tokio::test]
    async fn failing_command_is_a_microphone_error() {
        let result = recognizer("false").listen("en").await;
        assert!(matches!(result, Err(AudioError::Microphone(_))));
    }

    #[tokio::test]
    async fn missing_command_is_engine_unavailable() {
        let result = recognizer("/nonexistent/recognizer").listen("en").await;
        assert!(matches!(result, Err(AudioError::EngineUnavailable(_))));
    }
}
