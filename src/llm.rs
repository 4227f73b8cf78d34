use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::chat::prompts;

pub const MISSING_CONFIG_REPLY: &str = "I'm sorry, I couldn't find an answer in my database, and I cannot connect to my external brain (API key missing).";
pub const CONNECTION_ERROR_REPLY: &str =
    "I'm sorry, I'm currently unable to generate a response due to a connection issue.";
pub const EMPTY_REPLY: &str = "I'm having trouble thinking of an answer right now.";

/// Produces an answer when the knowledge base has none.
///
/// Implementations never fail: errors degrade to a user-presentable string.
#[async_trait]
pub trait FallbackGenerator: Send + Sync {
    async fn generate(&self, query: &str) -> String;

    /// Rephrase a matched answer for the user's wording. Defaults to the answer as-is.
    async fn enhance(&self, answer: &str, _query: &str) -> String {
        answer.to_string()
    }
}

/// Stand-in used when no LLM endpoint is configured.
pub struct Unconfigured;

#[async_trait]
impl FallbackGenerator for Unconfigured {
    async fn generate(&self, _query: &str) -> String {
        MISSING_CONFIG_REPLY.to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

pub struct LlmClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn new(base_url: String, model: String, api_key: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url,
            model,
            api_key,
        })
    }

    /// Build a client from `LLM_BASE_URL`, `LLM_MODEL` and `LLM_API_KEY`.
    /// Returns `None` when neither an endpoint nor a key is set.
    pub fn from_env() -> Result<Option<Self>> {
        let base_url = dotenv::var("LLM_BASE_URL").ok().filter(|u| !u.is_empty());
        let api_key = dotenv::var("LLM_API_KEY").ok().filter(|k| !k.is_empty());
        if base_url.is_none() && api_key.is_none() {
            return Ok(None);
        }

        let base_url = base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string());
        let model = dotenv::var("LLM_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        Self::new(base_url, model, api_key).map(Some)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Resolve the chat completions endpoint from the base URL.
    fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if base.ends_with("/chat/completions") {
            base.to_string()
        } else if base.ends_with("/v1") {
            format!("{}/chat/completions", base)
        } else {
            format!("{}/v1/chat/completions", base)
        }
    }

    /// Non-streaming chat completion. Returns an empty string when the model sent no content.
    pub async fn chat(&self, messages: &[Message]) -> Result<String> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "temperature": 0.3,
            "max_tokens": 512,
        });

        let mut req = self.client.post(self.endpoint()).json(&body);
        if let Some(key) = &self.api_key {
            req = req.header("Authorization", format!("Bearer {}", key));
        }

        let resp = req
            .send()
            .await
            .context("LLM request failed")?
            .error_for_status()
            .context("LLM returned an error status")?;
        let text = resp.text().await.context("Failed to read LLM response")?;
        let json: serde_json::Value =
            serde_json::from_str(&text).context("Failed to parse LLM JSON")?;

        Ok(extract_content(&json))
    }
}

/// Pull `choices[0].message.content`, treating null or missing as empty.
fn extract_content(json: &serde_json::Value) -> String {
    json["choices"]
        .get(0)
        .and_then(|c| c["message"]["content"].as_str())
        .unwrap_or("")
        .trim()
        .to_string()
}

#[async_trait]
impl FallbackGenerator for LlmClient {
    async fn generate(&self, query: &str) -> String {
        let messages = [Message::user(prompts::fallback_prompt(query))];
        match self.chat(&messages).await {
            Ok(content) if content.is_empty() => EMPTY_REPLY.to_string(),
            Ok(content) => content,
            Err(e) => {
                error!("Fallback generation failed: {:#}", e);
                CONNECTION_ERROR_REPLY.to_string()
            }
        }
    }

    async fn enhance(&self, answer: &str, query: &str) -> String {
        let messages = [Message::user(prompts::enhance_prompt(answer, query))];
        match self.chat(&messages).await {
            Ok(content) if !content.is_empty() => content,
            Ok(_) => answer.to_string(),
            Err(e) => {
                warn!("Answer enhancement failed, using original: {:#}", e);
                answer.to_string()
            }
        }
    }
}

/// Pick the fallback generator from the environment.
pub fn generator_from_env() -> Result<Arc<dyn FallbackGenerator>> {
    match LlmClient::from_env()? {
        Some(client) => {
            info!(model = client.model(), endpoint = %client.endpoint(), "LLM fallback enabled");
            Ok(Arc::new(client))
        }
        None => {
            warn!("LLM_BASE_URL / LLM_API_KEY not set, fallback answers are disabled");
            Ok(Arc::new(Unconfigured))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> LlmClient {
        LlmClient::new(base.to_string(), "test-model".to_string(), None).unwrap()
    }

    #[test]
    fn test_endpoint_resolution() {
        assert_eq!(
            client("http://localhost:1234/v1").endpoint(),
            "http://localhost:1234/v1/chat/completions"
        );
        assert_eq!(
            client("http://localhost:1234/").endpoint(),
            "http://localhost:1234/v1/chat/completions"
        );
        assert_eq!(
            client("https://host/api/chat/completions").endpoint(),
            "https://host/api/chat/completions"
        );
    }

    #[test]
    fn test_extract_content() {
        let json = serde_json::json!({"choices": [{"message": {"content": " Hi there \n"}}]});
        assert_eq!(extract_content(&json), "Hi there");

        let null = serde_json::json!({"choices": [{"message": {"content": null}}]});
        assert_eq!(extract_content(&null), "");
        assert_eq!(extract_content(&serde_json::json!({})), "");
    }

    #[tokio::test]
    async fn test_unconfigured_degrades() {
        let gen = Unconfigured;
        assert_eq!(gen.generate("anything").await, MISSING_CONFIG_REPLY);
        assert_eq!(gen.enhance("the answer", "q").await, "the answer");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_degrades() {
        // Port 9 (discard) on loopback refuses connections.
        let gen = client("http://127.0.0.1:9/v1");
        assert_eq!(gen.generate("hello").await, CONNECTION_ERROR_REPLY);
        assert_eq!(gen.enhance("kept", "hello").await, "kept");
    }
}
