//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `HEALTH_COMPASS` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use health_compass::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod chat;
mod error;
mod knowledge;
mod language;
mod speech;

pub use ai::AiConfig;
pub use chat::ChatConfig;
pub use error::{ConfigError, ValidationError};
pub use knowledge::KnowledgeConfig;
pub use language::{LanguageConfig, LanguageOption};
pub use speech::SpeechConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for Health Compass. Load using
/// [`AppConfig::load()`] which reads from environment variables. Every
/// section has working defaults; a bare environment yields a usable
/// (credential-less, degraded) configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Chat completion provider (Gemini)
    #[serde(default)]
    pub ai: AiConfig,

    /// Conversation framing texts (preamble, disclaimer)
    #[serde(default)]
    pub chat: ChatConfig,

    /// Knowledge catalog source
    #[serde(default)]
    pub knowledge: KnowledgeConfig,

    /// Language table
    #[serde(default)]
    pub language: LanguageConfig,

    /// Speech engines
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `HEALTH_COMPASS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `HEALTH_COMPASS__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key`
    /// - `HEALTH_COMPASS__KNOWLEDGE__PATH=...` -> `knowledge.path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("HEALTH_COMPASS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    /// A missing chat credential is not an error; the session degrades
    /// to a fixed notice instead.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.chat.validate()?;
        self.knowledge.validate()?;
        self.language.validate()?;
        self.speech.validate()?;
        Ok(())
    }
}
