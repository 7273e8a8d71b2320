//! Knowledge catalog source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the static symptom catalog is loaded from
#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgeConfig {
    /// Path to the JSON catalog file
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl KnowledgeConfig {
    /// Validate knowledge configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyKnowledgePath);
        }
        Ok(())
    }
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("data/health_data.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let config = KnowledgeConfig::default();
        assert_eq!(config.path, PathBuf::from("data/health_data.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_path_rejected() {
        let config = KnowledgeConfig {
            path: PathBuf::new(),
        };
        assert!(config.validate().is_err());
    }
}
