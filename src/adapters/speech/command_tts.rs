//! Command-driven text-to-speech engine.
//!
//! Runs a configured synthesizer command per utterance, invoked as
//! `<command> <language> <text>`. Cancellation kills the child process.

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::{Child, Command};
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::ports::{AudioError, TextToSpeech};

/// Text-to-speech over an external synthesizer command.
///
/// At most one utterance is in flight at a time; `SpeechPlayback`
/// enforces this above us.
pub struct CommandTextToSpeech {
    command: String,
    current: Mutex<Option<Child>>,
}

impl CommandTextToSpeech {
    /// Creates an engine running the given command.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            current: Mutex::new(None),
        }
    }
}

#[async_trait]
impl TextToSpeech for CommandTextToSpeech {
    async fn speak(&self, text: &str, language: &str) -> Result<(), AudioError> {
        let child = Command::new(&self.command)
            .arg(language)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| AudioError::engine_unavailable(format!("{}: {e}", self.command)))?;

        *self.current.lock().await = Some(child);

        loop {
            let mut guard = self.current.lock().await;
            // Slot emptied by stop(): playback was cancelled.
            let Some(mut child) = guard.take() else {
                return Ok(());
            };
            match child.try_wait() {
                Ok(Some(status)) => {
                    if status.success() {
                        return Ok(());
                    }
                    return Err(AudioError::service(format!(
                        "synthesizer exited with {status}"
                    )));
                }
                Ok(None) => *guard = Some(child),
                Err(e) => return Err(AudioError::service(e.to_string())),
            }
            drop(guard);
            sleep(Duration::from_millis(50)).await;
        }
    }

    async fn stop(&self) -> Result<(), AudioError> {
        if let Some(mut child) = self.current.lock().await.take() {
            // An already-exited child is not an error here.
            child.start_kill().ok();
        }
        Ok(())
    }
}
