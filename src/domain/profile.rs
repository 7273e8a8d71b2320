//! User profile snapshot.
//!
//! Mutated in place by the controller whenever the user edits a field;
//! read at message-send time. Last-write-wins, no history retained.
//! Logged symptom entries clone the profile so later edits never
//! retroactively change them.

use serde::{Deserialize, Serialize};

/// Current user profile: free-text fields, all optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    age: String,
    gender: String,
    language: String,
}

impl Profile {
    /// Creates an empty profile with the given starting language.
    pub fn with_language(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Self::default()
        }
    }

    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn set_age(&mut self, age: impl Into<String>) {
        self.age = age.into();
    }

    pub fn set_gender(&mut self, gender: impl Into<String>) {
        self.gender = gender.into();
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Renders the profile for embedding into a chat prompt.
    pub fn summary(&self) -> String {
        format!(
            "Age: {}, Gender: {}, Language: {}",
            self.age, self.gender, self.language
        )
    }
}
