//! Read-only lookup surface over the loaded catalog.

use super::KnowledgeEntry;

/// The loaded symptom catalog.
///
/// Purely a lookup surface: no side effects after construction. Every
/// lookup degrades to an empty result for unknown tags or levels,
/// never an error. Entries keep their declaration order; if a tag is
/// declared twice the first declaration wins.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeCatalog {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeCatalog {
    /// Wraps loaded entries.
    pub fn new(entries: Vec<KnowledgeEntry>) -> Self {
        Self { entries }
    }

    /// A catalog with no entries, used when the source failed to load.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Tag names in declaration order.
    pub fn tags(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.tag.as_str()).collect()
    }

    /// True if the tag exists in the catalog.
    pub fn contains(&self, tag: &str) -> bool {
        self.find(tag).is_some()
    }

    /// Example questions for a tag; empty if the tag is unknown.
    pub fn patterns_for(&self, tag: &str) -> &[String] {
        self.find(tag).map(|e| e.patterns.as_slice()).unwrap_or(&[])
    }

    /// Health tips for a tag; empty if the tag is unknown.
    pub fn tips_for(&self, tag: &str) -> &[String] {
        self.find(tag).map(|e| e.tips.as_slice()).unwrap_or(&[])
    }

    /// Severity tier names for a tag, in declaration order; empty if
    /// the tag is unknown.
    pub fn severity_levels(&self, tag: &str) -> Vec<&str> {
        self.find(tag)
            .map(|e| e.severity.level_names())
            .unwrap_or_default()
    }

    /// Advice for a (tag, level) pair; `""` if either is unknown.
    pub fn severity_advice(&self, tag: &str, level: &str) -> &str {
        self.find(tag)
            .and_then(|e| e.severity.advice_for(level))
            .unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn find(&self, tag: &str) -> Option<&KnowledgeEntry> {
        self.entries.iter().find(|e| e.tag == tag)
    }
}
