//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::article::render::DEFAULT_MASTHEAD;
use crate::{NewsdeskError, APP_NAME};

/// Environment variables checked, in order, when no API key is configured.
const API_KEY_ENV_VARS: &[&str] = &["NEWSDESK_GEMINI_API_KEY", "GEMINI_API_KEY"];

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// LLM settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// Newspaper layout settings
    #[serde(default)]
    pub newspaper: NewspaperSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// LLM provider (gemini)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// API key (for cloud providers)
    #[serde(default)]
    pub api_key: String,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API endpoint (empty = provider default)
    #[serde(default)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewspaperSettings {
    /// Name printed at the top of every article
    #[serde(default = "default_masthead")]
    pub masthead: String,

    /// Reporter name used when none is given
    #[serde(default)]
    pub default_author: String,
}

// Default value functions

fn default_llm_provider() -> String {
    "gemini".to_string()
}

fn default_llm_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_timeout_secs() -> u64 {
    45
}

fn default_masthead() -> String {
    DEFAULT_MASTHEAD.to_string()
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_key: String::new(),
            model: default_llm_model(),
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for NewspaperSettings {
    fn default() -> Self {
        Self {
            masthead: default_masthead(),
            default_author: String::new(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides(|name| std::env::var(name).ok());
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides(|name| std::env::var(name).ok());

        Ok(settings)
    }

    /// Parse settings from TOML text and check them.
    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> std::result::Result<(), NewsdeskError> {
        if self.newspaper.masthead.trim().is_empty() {
            return Err(NewsdeskError::Config(
                "newspaper.masthead must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if !self.llm.api_key.trim().is_empty() {
            return;
        }

        if let Some(key) = API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|key| !key.trim().is_empty())
        {
            self.llm.api_key = key;
        }
    }

    /// Whether an API key is available after overrides.
    pub fn has_api_key(&self) -> bool {
        !self.llm.api_key.trim().is_empty()
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", APP_NAME, APP_NAME)
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Directory for log files written while the TUI owns the terminal
    pub fn log_dir() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", APP_NAME, APP_NAME)
            .context("Could not determine data directory")?;

        Ok(dirs.data_local_dir().join("logs"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_gemini_15_flash() {
        let settings = Settings::default();
        assert_eq!(settings.llm.provider, "gemini");
        assert_eq!(settings.llm.model, "gemini-1.5-flash");
        assert_eq!(settings.newspaper.masthead, "THE SCHOOL TIMES");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings = Settings::from_toml(
            r#"
            [newspaper]
            default_author = "김민수"
            "#,
        )
        .unwrap();

        assert_eq!(settings.newspaper.default_author, "김민수");
        assert_eq!(settings.newspaper.masthead, "THE SCHOOL TIMES");
        assert_eq!(settings.llm.timeout_secs, 45);
    }

    #[test]
    fn blank_masthead_is_rejected() {
        let err = Settings::from_toml("[newspaper]\nmasthead = \" \"\n").unwrap_err();
        assert!(err.to_string().contains("newspaper.masthead"));
    }

    #[test]
    fn env_key_fills_missing_api_key() {
        let mut settings = Settings::default();
        settings.apply_env_overrides(|name| match name {
            "NEWSDESK_GEMINI_API_KEY" => Some(" ".to_string()),
            "GEMINI_API_KEY" => Some("from-env".to_string()),
            _ => None,
        });
        assert_eq!(settings.llm.api_key, "from-env");
        assert!(settings.has_api_key());
    }

    #[test]
    fn configured_api_key_wins_over_env() {
        let mut settings = Settings::default();
        settings.llm.api_key = "from-file".to_string();
        settings.apply_env_overrides(|_| Some("from-env".to_string()));
        assert_eq!(settings.llm.api_key, "from-file");
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        Settings::write_default(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[llm]"));
        let settings = Settings::from_toml(&content).unwrap();
        assert_eq!(settings.llm.model, "gemini-1.5-flash");
    }
}
