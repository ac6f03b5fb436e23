// src/services/llm_client.rs
// DOCUMENTATION: Chat-completions API client
// PURPOSE: Send analysis prompts to an OpenAI-compatible model endpoint

use crate::errors::CmsError;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Chat-completions client
/// DOCUMENTATION: Handles authentication and request/response shapes
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiClient {
    /// Create new model client
    pub fn new(
        api_key: String,
        base_url: &str,
        model: String,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<Self, CmsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| CmsError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            temperature,
            max_tokens,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run one chat completion and return the text of the first choice
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CmsError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        log::debug!("Model request: model={}, messages={}", self.model, messages.len());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                log::error!("Model API request failed: {}", e);
                CmsError::ExternalApiError(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            log::error!("Model API quota exceeded");
            return Err(CmsError::RateLimitExceeded);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Model API error {}: {}", status, body);
            return Err(CmsError::ExternalApiError(format!(
                "API error {}: {}",
                status, body
            )));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse model response: {}", e);
            CmsError::ExternalApiError(format!("Parse error: {}", e))
        })?;

        Self::first_content(parsed)
    }

    fn first_content(response: ChatCompletionResponse) -> Result<String, CmsError> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| CmsError::ExternalApiError("Model returned no content".to_string()))
    }
}
