//! Async HTTP client for text-generation APIs
//!
//! Model-agnostic: supports the Gemini generateContent API and
//! OpenAI-compatible chat APIs, detected from the endpoint URL.

use crate::core::config::LlmConfig;
use crate::core::error::{Result, RoadmapError};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Anything that can turn a prompt into generated text. The TUI depends
/// on this rather than on the concrete client so tests can substitute a
/// canned generator.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// API format type
#[derive(Debug, Clone, PartialEq)]
pub enum ApiFormat {
    Gemini,
    OpenAI,
}

/// Async client for making generation API calls
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
    api_format: ApiFormat,
}

impl LlmClient {
    /// Create a new client with explicit configuration
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        let api_format = Self::detect_api_format(&api_url);
        Self {
            client: Client::new(),
            api_key,
            api_url,
            model,
            api_format,
        }
    }

    /// Detect API format from URL
    fn detect_api_format(url: &str) -> ApiFormat {
        if url.contains("generativelanguage.googleapis.com") {
            ApiFormat::Gemini
        } else {
            // OpenAI and compatible APIs use the chat-completions format
            ApiFormat::OpenAI
        }
    }

    /// Create a client from the resolved configuration.
    ///
    /// Fails when no API key is configured, which callers treat as
    /// "generation disabled" rather than a startup error.
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| RoadmapError::Config("no API key configured".into()))?;
        Ok(Self::new(
            api_key,
            config.api_url().to_string(),
            config.model().to_string(),
        ))
    }

    async fn generate_gemini(&self, prompt: &str) -> Result<String> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.into(),
                }],
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| RoadmapError::Generation(e.to_string()))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RoadmapError::Generation(format!("API error: {}", error_text)));
        }

        let completion: GeminiResponse = response
            .json()
            .await
            .map_err(|e| RoadmapError::Generation(e.to_string()))?;

        completion
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| RoadmapError::Generation("Empty response".into()))
    }

    async fn generate_openai(&self, prompt: &str) -> Result<String> {
        let request = OpenAIRequest {
            model: self.model.clone(),
            max_tokens: 1024,
            messages: vec![OpenAIMessage {
                role: "user".into(),
                content: prompt.into(),
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| RoadmapError::Generation(e.to_string()))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RoadmapError::Generation(format!("API error: {}", error_text)));
        }

        let completion: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| RoadmapError::Generation(e.to_string()))?;

        completion
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| RoadmapError::Generation("Empty response".into()))
    }
}

impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        match self.api_format {
            ApiFormat::Gemini => self.generate_gemini(prompt).await,
            ApiFormat::OpenAI => self.generate_openai(prompt).await,
        }
    }
}

// Gemini generateContent format
#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Deserialize)]
struct GeminiCandidateContent {
    parts: Vec<GeminiPart>,
}

// OpenAI-compatible chat format
#[derive(Serialize)]
struct OpenAIRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<OpenAIMessage>,
}

#[derive(Serialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Deserialize)]
struct OpenAIChoice {
    message: OpenAIChoiceMessage,
}

#[derive(Deserialize)]
struct OpenAIChoiceMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = LlmClient::new(
            "test-key".into(),
            "https://api.example.com/v1/chat/completions".into(),
            "test-model".into(),
        );
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.model, "test-model");
        assert_eq!(client.api_format, ApiFormat::OpenAI);
    }

    #[test]
    fn test_gemini_format_detected_from_url() {
        let client = LlmClient::new(
            "k".into(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent".into(),
            "gemini-2.5-flash".into(),
        );
        assert_eq!(client.api_format, ApiFormat::Gemini);
    }

    #[test]
    fn test_from_config_without_key_fails() {
        let config = LlmConfig::default();
        assert!(LlmClient::from_config(&config).is_err());
    }
}
