//! Append-only log of user-reported symptoms.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::Timestamp;
use crate::domain::Profile;

/// Unique identifier for a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogEntryId(Uuid);

impl LogEntryId {
    /// Creates a new random LogEntryId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for LogEntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LogEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One logged symptom report.
///
/// Created only by a successful send action; never mutated afterwards.
/// Holds an owned copy of the profile taken at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomLogEntry {
    id: LogEntryId,
    timestamp: Timestamp,
    tag: String,
    pattern: String,
    severity: String,
    profile: Profile,
}

impl SymptomLogEntry {
    pub fn id(&self) -> &LogEntryId {
        &self.id
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn severity(&self) -> &str {
        &self.severity
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }
}

/// Ordered, append-only sequence of symptom reports.
#[derive(Debug, Clone, Default)]
pub struct SymptomLog {
    entries: Vec<SymptomLogEntry>,
}

impl SymptomLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry with a fresh timestamp and an owned clone of
    /// the profile.
    pub fn append(
        &mut self,
        tag: impl Into<String>,
        pattern: impl Into<String>,
        severity: impl Into<String>,
        profile: &Profile,
    ) {
        self.entries.push(SymptomLogEntry {
            id: LogEntryId::new(),
            timestamp: Timestamp::now(),
            tag: tag.into(),
            pattern: pattern.into(),
            severity: severity.into(),
            profile: profile.clone(),
        });
    }

    /// Empties the log.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Read-only view of all entries, oldest first.
    pub fn entries(&self) -> &[SymptomLogEntry] {
        &self.entries
    }

    /// Number of reports per tag, for summary/chart rendering.
    pub fn counts_by_tag(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for entry in &self.entries {
            *counts.entry(entry.tag.clone()).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_then_clear_leaves_log_empty() {
        let mut log = SymptomLog::new();
        log.append("fever", "I have a fever", "mild", &Profile::default());
        assert_eq!(log.len(), 1);

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn entries_keep_insertion_order() {
        let mut log = SymptomLog::new();
        let profile = Profile::default();
        log.append("fever", "a", "", &profile);
        log.append("cough", "b", "", &profile);

        let tags: Vec<&str> = log.entries().iter().map(|e| e.tag()).collect();
        assert_eq!(tags, vec!["fever", "cough"]);
    }

    #[test]
    fn profile_snapshot_is_independent_of_later_edits() {
        let mut log = SymptomLog::new();
        let mut profile = Profile::with_language("English");
        profile.set_age("30");

        log.append("fever", "I have a fever", "mild", &profile);

        profile.set_age("99");
        profile.set_language("Urdu");

        let logged = &log.entries()[0];
        assert_eq!(logged.profile().age(), "30");
        assert_eq!(logged.profile().language(), "English");
    }

    #[test]
    fn counts_by_tag_aggregates() {
        let mut log = SymptomLog::new();
        let profile = Profile::default();
        log.append("fever", "a", "", &profile);
        log.append("fever", "b", "mild", &profile);
        log.append("cough", "c", "", &profile);

        let counts = log.counts_by_tag();
        assert_eq!(counts.get("fever"), Some(&2));
        assert_eq!(counts.get("cough"), Some(&1));
        assert_eq!(counts.get("headache"), None);
    }

    #[test]
    fn entry_ids_are_unique() {
        let mut log = SymptomLog::new();
        let profile = Profile::default();
        log.append("fever", "a", "", &profile);
        log.append("fever", "b", "", &profile);

        assert_ne!(log.entries()[0].id(), log.entries()[1].id());
    }
}
