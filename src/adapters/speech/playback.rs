//! Cancellable speech playback task.
//!
//! Wraps a `TextToSpeech` engine in an explicit background task with
//! start/stop and a completion signal, decoupled from any particular
//! engine. The playing flag resets on every exit path, including
//! engine failure, and playback holds no references to conversation
//! state, so cancellation can never corrupt it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::ports::{AudioError, TextToSpeech};

/// One-at-a-time background playback over a speech engine.
pub struct SpeechPlayback {
    engine: Arc<dyn TextToSpeech>,
    playing: Arc<AtomicBool>,
    finished: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl SpeechPlayback {
    /// Creates an idle playback controller over the given engine.
    pub fn new(engine: Arc<dyn TextToSpeech>) -> Self {
        let (finished, _) = watch::channel(true);
        Self {
            engine,
            playing: Arc::new(AtomicBool::new(false)),
            finished,
            task: None,
        }
    }

    /// True while an utterance is being spoken.
    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    /// Completion signal: `true` when idle, `false` while speaking.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.finished.subscribe()
    }

    /// Starts speaking in the background.
    ///
    /// # Errors
    ///
    /// - `Busy` if an utterance is already playing
    pub fn start(
        &mut self,
        text: impl Into<String>,
        language: impl Into<String>,
    ) -> Result<(), AudioError> {
        if self.playing.swap(true, Ordering::SeqCst) {
            return Err(AudioError::Busy);
        }
        let _ = self.finished.send(false);

        let text = text.into();
        let language = language.into();
        let engine = self.engine.clone();
        let playing = self.playing.clone();
        let finished = self.finished.clone();

        self.task = Some(tokio::spawn(async move {
            if let Err(e) = engine.speak(&text, &language).await {
                tracing::warn!(error = %e, "speech playback failed");
            }
            playing.store(false, Ordering::SeqCst);
            let _ = finished.send(true);
        }));

        Ok(())
    }

    /// Cancels any in-flight playback.
    ///
    /// The playing flag and completion signal are reset even when the
    /// engine's own stop fails; that failure is still reported.
    pub async fn stop(&mut self) -> Result<(), AudioError> {
        let engine_result = self.engine.stop().await;

        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.playing.store(false, Ordering::SeqCst);
        let _ = self.finished.send(true);

        engine_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::time::Duration;

    /// Engine that "plays" until stopped.
    struct BlockingEngine {
        stopped: Arc<AtomicBool>,
    }

    #[async_trait]
    impl TextToSpeech for BlockingEngine {
        async fn speak(&self, _text: &str, _language: &str) -> Result<(), AudioError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        }

        async fn stop(&self) -> Result<(), AudioError> {
            self.stopped.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Engine that fails immediately.
    struct FailingEngine;

    #[async_trait]
    impl TextToSpeech for FailingEngine {
        async fn speak(&self, _text: &str, _language: &str) -> Result<(), AudioError> {
            Err(AudioError::engine_unavailable("no device"))
        }

        async fn stop(&self) -> Result<(), AudioError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn start_sets_playing_and_stop_clears_it() {
        let stopped = Arc::new(AtomicBool::new(false));
        let mut playback = SpeechPlayback::new(Arc::new(BlockingEngine {
            stopped: stopped.clone(),
        }));

        playback.start("hello", "en").unwrap();
        assert!(playback.is_playing());

        playback.stop().await.unwrap();
        assert!(!playback.is_playing());
        assert!(stopped.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn second_start_while_playing_is_busy() {
        let mut playback = SpeechPlayback::new(Arc::new(BlockingEngine {
            stopped: Arc::new(AtomicBool::new(false)),
        }));

        playback.start("hello", "en").unwrap();
        let result = playback.start("again", "en");
        assert!(matches!(result, Err(AudioError::Busy)));

        playback.stop().await.unwrap();
    }

    #[tokio::test]
    async fn engine_failure_still_resets_playing_flag() {
        let mut playback = SpeechPlayback::new(Arc::new(FailingEngine));
        let mut done = playback.subscribe();

        playback.start("hello", "en").unwrap();
        done.wait_for(|idle| *idle).await.unwrap();

        assert!(!playback.is_playing());
        // A new playback can start after the failure.
        playback.start("retry", "en").unwrap();
        playback.stop().await.unwrap();
    }

    #[tokio::test]
    async fn completion_signal_tracks_playback() {
        let mut playback = SpeechPlayback::new(Arc::new(BlockingEngine {
            stopped: Arc::new(AtomicBool::new(false)),
        }));
        let rx = playback.subscribe();
        assert!(*rx.borrow());

        playback.start("hello", "en").unwrap();
        assert!(!*rx.borrow());

        playback.stop().await.unwrap();
        assert!(*rx.borrow());
    }
}
