//! Advisor controller - orchestrates the send action.
//!
//! Owns the profile and drives the lifecycle of the catalog, symptom
//! log, transcript, and chat session. The presentation layer only ever
//! talks to this type; a send action is processed to completion before
//! the next (`&mut self` makes overlapping sends structurally
//! impossible).

use std::path::Path;

use thiserror::Error;

use crate::application::ChatSession;
use crate::config::LanguageConfig;
use crate::domain::knowledge::KnowledgeCatalog;
use crate::domain::{Profile, Speaker, SymptomLog, Transcript};
use crate::ports::{ChatMessage, ExportError, TranscriptExporter};

/// Validation failures that block a send.
///
/// No state is mutated when these are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SendError {
    /// No tag has been selected yet.
    #[error("no tag selected")]
    NoTagSelected,

    /// The input text is empty or whitespace-only.
    #[error("empty input")]
    EmptyInput,
}

/// Result of a successful send.
#[derive(Debug, Clone)]
pub struct SendOutcome {
    /// The text that was sent (typed input or chosen pattern).
    pub user_text: String,
    /// The displayed reply, disclaimer included.
    pub reply: String,
}

/// Catalog data for a newly selected tag, for display.
#[derive(Debug, Clone)]
pub struct TagSelection {
    pub patterns: Vec<String>,
    pub tips: Vec<String>,
    pub severity_levels: Vec<String>,
}

/// Transient input state between sends.
#[derive(Debug, Clone, Default)]
struct Draft {
    tag: String,
    text: String,
    pattern: String,
    severity: String,
}

/// The application controller.
pub struct Advisor {
    catalog: KnowledgeCatalog,
    catalog_notice: Option<String>,
    languages: LanguageConfig,
    disclaimer: String,
    profile: Profile,
    log: SymptomLog,
    transcript: Transcript,
    session: ChatSession,
    draft: Draft,
}

impl Advisor {
    /// Creates a controller over a loaded (possibly empty) catalog.
    ///
    /// `catalog_notice` carries the degraded-load message when the
    /// knowledge source failed; the controller stays fully usable.
    pub fn new(
        catalog: KnowledgeCatalog,
        catalog_notice: Option<String>,
        session: ChatSession,
        languages: LanguageConfig,
        disclaimer: impl Into<String>,
    ) -> Self {
        let profile = Profile::with_language(languages.default_language.clone());
        Self {
            catalog,
            catalog_notice,
            languages,
            disclaimer: disclaimer.into(),
            profile,
            log: SymptomLog::new(),
            transcript: Transcript::new(),
            session,
            draft: Draft::default(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Catalog surface
    // ─────────────────────────────────────────────────────────────────────

    /// Tag names for display, in catalog order.
    pub fn tags(&self) -> Vec<&str> {
        self.catalog.tags()
    }

    /// Degraded-load notice, if the knowledge source failed.
    pub fn catalog_notice(&self) -> Option<&str> {
        self.catalog_notice.as_deref()
    }

    /// Advice for an explicit (tag, level) pair; `""` when unknown.
    pub fn severity_advice(&self, tag: &str, level: &str) -> &str {
        self.catalog.severity_advice(tag, level)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Draft input
    // ─────────────────────────────────────────────────────────────────────

    /// Selects a tag and returns its catalog data for display.
    ///
    /// Clears the text, pattern, and severity drafts for the new topic.
    pub fn select_tag(&mut self, tag: impl Into<String>) -> TagSelection {
        self.draft.tag = tag.into();
        self.draft.text.clear();
        self.draft.pattern.clear();
        self.draft.severity.clear();

        let tag = self.draft.tag.as_str();
        TagSelection {
            patterns: self.catalog.patterns_for(tag).to_vec(),
            tips: self.catalog.tips_for(tag).to_vec(),
            severity_levels: self
                .catalog
                .severity_levels(tag)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Currently selected tag, if any.
    pub fn selected_tag(&self) -> Option<&str> {
        if self.draft.tag.is_empty() {
            None
        } else {
            Some(&self.draft.tag)
        }
    }

    /// Copies a canned pattern into the draft.
    pub fn select_pattern(&mut self, pattern: impl Into<String>) {
        self.draft.pattern = pattern.into();
    }

    /// Sets the typed question text.
    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.draft.text = text.into();
    }

    /// Selects a severity level and returns its advice for display,
    /// when the catalog has any.
    pub fn select_severity(&mut self, level: impl Into<String>) -> Option<String> {
        self.draft.severity = level.into();
        let advice = self
            .catalog
            .severity_advice(&self.draft.tag, &self.draft.severity);
        if advice.is_empty() {
            None
        } else {
            Some(advice.to_string())
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Profile
    // ─────────────────────────────────────────────────────────────────────

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn set_age(&mut self, age: impl Into<String>) {
        self.profile.set_age(age);
    }

    pub fn set_gender(&mut self, gender: impl Into<String>) {
        self.profile.set_gender(gender);
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.profile.set_language(language);
    }

    /// Service code for the profile's current language.
    pub fn language_code(&self) -> &str {
        self.languages.code_for(self.profile.language())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Send action
    // ─────────────────────────────────────────────────────────────────────

    /// Runs the send action end to end.
    ///
    /// Validates the draft, appends the user line to the transcript,
    /// embeds the profile into the prompt, obtains a reply through the
    /// session, appends the disclaimed reply, logs the symptom, and
    /// clears the transient drafts (the tag selection persists).
    ///
    /// # Errors
    ///
    /// - `NoTagSelected` / `EmptyInput`; no state is mutated on failure.
    pub async fn send(&mut self) -> Result<SendOutcome, SendError> {
        // Typed text wins over the chosen pattern; an untouched text
        // field falls back to the pattern.
        let text = if self.draft.text.is_empty() {
            self.draft.pattern.clone()
        } else {
            self.draft.text.clone()
        };

        if self.draft.tag.is_empty() {
            return Err(SendError::NoTagSelected);
        }
        if text.trim().is_empty() {
            return Err(SendError::EmptyInput);
        }

        self.transcript.append(Speaker::User, text.clone());

        let prompt = format!("{text}\n\nUser Profile: {}", self.profile.summary());
        let language = self.languages.code_for(self.profile.language()).to_string();
        let reply = self.session.send(&prompt, &language).await;

        let reply = format!("{reply}{}", self.disclaimer);
        self.transcript.append(Speaker::Bot, reply.clone());

        self.log.append(
            self.draft.tag.clone(),
            text.clone(),
            self.draft.severity.clone(),
            &self.profile,
        );

        tracing::info!(
            tag = %self.draft.tag,
            severity = %self.draft.severity,
            "send action completed"
        );

        self.draft.text.clear();
        self.draft.pattern.clear();
        self.draft.severity.clear();

        Ok(SendOutcome {
            user_text: text,
            reply,
        })
    }

    /// Clears the transcript, symptom log, session history, and draft.
    /// The profile is left untouched.
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.log.clear();
        self.session.reset();
        self.draft = Draft::default();
    }

    // ─────────────────────────────────────────────────────────────────────
    // Read surface
    // ─────────────────────────────────────────────────────────────────────

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The most recent bot line, for read-aloud.
    pub fn last_bot_message(&self) -> Option<&str> {
        self.transcript.last_from(Speaker::Bot)
    }

    pub fn symptom_log(&self) -> &SymptomLog {
        &self.log
    }

    /// Report counts per tag, for summary/chart rendering.
    pub fn symptom_counts(&self) -> std::collections::HashMap<String, usize> {
        self.log.counts_by_tag()
    }

    /// The API-formatted chat history.
    pub fn chat_history(&self) -> &[ChatMessage] {
        self.session.history()
    }

    /// Exports the transcript through the given exporter.
    pub async fn export(
        &self,
        exporter: &dyn TranscriptExporter,
        destination: &Path,
    ) -> Result<(), ExportError> {
        exporter.export(self.transcript.all(), destination).await
    }
}
