//! A single catalog entry: one symptom tag with its patterns, tips,
//! and severity scale.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One named severity tier with its advice text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityLevel {
    /// Tier name (e.g. "mild", "severe")
    pub name: String,
    /// Advice shown when this tier is selected
    pub advice: String,
}

/// Ordered severity tiers for a tag.
///
/// Serialized as a JSON object; declaration order in the source
/// document is significant and preserved, which is why this is a
/// vector of pairs rather than a map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeverityScale(Vec<SeverityLevel>);

impl SeverityScale {
    /// Builds a scale from (name, advice) pairs, keeping their order.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(name, advice)| SeverityLevel {
                    name: name.into(),
                    advice: advice.into(),
                })
                .collect(),
        )
    }

    /// Tier names in declaration order.
    pub fn level_names(&self) -> Vec<&str> {
        self.0.iter().map(|level| level.name.as_str()).collect()
    }

    /// Advice for a tier, if the tier exists.
    pub fn advice_for(&self, level: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|l| l.name == level)
            .map(|l| l.advice.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeverityLevel> {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for SeverityScale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScaleVisitor;

        impl<'de> Visitor<'de> for ScaleVisitor {
            type Value = SeverityScale;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of severity level names to advice strings")
            }

            // MapAccess yields entries in document order, independent
            // of the map type serde_json would otherwise collect into.
            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut levels = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, advice)) = map.next_entry::<String, String>()? {
                    levels.push(SeverityLevel { name, advice });
                }
                Ok(SeverityScale(levels))
            }
        }

        deserializer.deserialize_map(ScaleVisitor)
    }
}

impl Serialize for SeverityScale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for level in &self.0 {
            map.serialize_entry(&level.name, &level.advice)?;
        }
        map.end()
    }
}

/// A catalog entry for one symptom tag.
///
/// `tag` is the unique key; all other fields are optional in the
/// source document and default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Unique symptom/topic name
    pub tag: String,

    /// Canned example questions for this tag
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Short health tips shown alongside the tag
    #[serde(default)]
    pub tips: Vec<String>,

    /// Severity tiers with advice, in declaration order
    #[serde(default)]
    pub severity: SeverityScale,
}
