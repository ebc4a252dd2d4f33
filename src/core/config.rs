//! Application configuration
//!
//! All tunable values are collected here with explanations of their purpose.
//! The config is constructed once in `main` and passed down; nothing in the
//! library reads it through a global.

use crate::core::error::{Result, RoadmapError};
use serde::Deserialize;
use std::path::Path;

/// Default Gemini endpoint, matching the API the commit-message helper
/// was originally built against.
pub const DEFAULT_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

/// Default model for commit-message generation. Small and fast; the helper
/// produces a single line of output, so a larger model buys nothing.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Configuration for the text-generation client
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LlmConfig {
    /// API key. Without one, the roadmap still works; only the
    /// commit-message tool is unavailable.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Endpoint URL. Gemini and OpenAI-compatible endpoints are supported;
    /// the format is detected from the URL.
    #[serde(default)]
    pub api_url: Option<String>,
    /// Model name, passed through to the API.
    #[serde(default)]
    pub model: Option<String>,
}

impl LlmConfig {
    /// Effective endpoint URL
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Effective model name
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Step to open on startup. Out-of-range values redirect to step 1
    /// at the routing boundary, not here.
    #[serde(default)]
    pub start_step: Option<u32>,
    #[serde(default)]
    pub llm: LlmConfig,
}

impl AppConfig {
    /// Load configuration from the environment, with an optional
    /// `roadmap.toml` taking precedence for values it sets.
    ///
    /// Environment: `LLM_API_KEY`, `LLM_API_URL`, `LLM_MODEL`.
    pub fn load(config_path: &Path) -> Result<Self> {
        let mut config = if config_path.exists() {
            let raw = std::fs::read_to_string(config_path)?;
            toml::from_str::<AppConfig>(&raw)
                .map_err(|e| RoadmapError::Config(format!("{}: {e}", config_path.display())))?
        } else {
            AppConfig::default()
        };

        if config.llm.api_key.is_none() {
            config.llm.api_key = std::env::var("LLM_API_KEY").ok();
        }
        if config.llm.api_url.is_none() {
            config.llm.api_url = std::env::var("LLM_API_URL").ok();
        }
        if config.llm.model.is_none() {
            config.llm.model = std::env::var("LLM_MODEL").ok();
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.llm.api_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(RoadmapError::Config(format!(
                    "llm.api_url must be an http(s) URL, got '{url}'"
                )));
            }
        }
        if let Some(0) = self.start_step {
            return Err(RoadmapError::Config("start_step must be >= 1".into()));
        }
        Ok(())
    }

    /// Effective endpoint URL
    pub fn api_url(&self) -> &str {
        self.llm.api_url()
    }

    /// Effective model name
    pub fn model(&self) -> &str {
        self.llm.model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api_url(), DEFAULT_API_URL);
        assert_eq!(config.model(), DEFAULT_MODEL);
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = AppConfig {
            llm: LlmConfig {
                api_url: Some("ftp://example.com".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_step_zero() {
        let config = AppConfig {
            start_step: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parses_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            start_step = 3

            [llm]
            model = "gemini-2.5-pro"
            "#,
        )
        .unwrap();
        assert_eq!(config.start_step, Some(3));
        assert_eq!(config.model(), "gemini-2.5-pro");
        assert!(config.llm.api_key.is_none());
    }
}
