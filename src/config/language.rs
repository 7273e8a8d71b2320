//! Language table configuration
//!
//! Maps user-facing language names to the codes handed to the chat and
//! speech services. Injected into the controller at startup; there is no
//! process-wide mutable language table.

use once_cell::sync::Lazy;
use serde::Deserialize;

use super::error::ValidationError;

/// A single selectable language
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageOption {
    /// Display name shown to the user (e.g. "English")
    pub name: String,
    /// Service language code (e.g. "en")
    pub code: String,
}

/// Languages shipped by default
static DEFAULT_LANGUAGES: Lazy<Vec<LanguageOption>> = Lazy::new(|| {
    vec![
        LanguageOption {
            name: "English".to_string(),
            code: "en".to_string(),
        },
        LanguageOption {
            name: "Urdu".to_string(),
            code: "ur".to_string(),
        },
    ]
});

/// Language table configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageConfig {
    /// Selectable languages, in display order
    #[serde(default = "default_options")]
    pub options: Vec<LanguageOption>,

    /// Display name of the language selected at startup
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl LanguageConfig {
    /// Resolve a display name to a service code.
    ///
    /// Unknown names fall back to "en", mirroring the speech and chat
    /// services' own default.
    pub fn code_for(&self, name: &str) -> &str {
        self.options
            .iter()
            .find(|opt| opt.name == name)
            .map(|opt| opt.code.as_str())
            .unwrap_or("en")
    }

    /// Display names in table order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|opt| opt.name.as_str())
    }

    /// Validate the language table
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.options.is_empty() {
            return Err(ValidationError::EmptyLanguageTable);
        }
        Ok(())
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            options: default_options(),
            default_language: default_language(),
        }
    }
}

fn default_options() -> Vec<LanguageOption> {
    DEFAULT_LANGUAGES.clone()
}

fn default_language() -> String {
    "English".to_string()
}
