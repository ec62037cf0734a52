use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::{config::Config, constants::prompts::STOP_SEQUENCES, errors::GenerationError};

/// The external text-completion collaborator.
///
/// Implementations return the raw response body; unwrapping a completion
/// envelope is the text extractor's job.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
    stop: &'a [&'a str],
}

/// Completion endpoint reached over HTTP (OpenAI-compatible `/v1/completions`).
pub struct HttpModelClient {
    client: reqwest::Client,
    url: String,
    model: String,
    max_tokens: u32,
    api_key: Option<SecretString>,
}

impl HttpModelClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.llm_url.clone(),
            model: config.llm_model.clone(),
            max_tokens: config.llm_max_tokens,
            api_key: config.llm_api_key.clone(),
        }
    }
}

#[async_trait]
impl ModelClient for HttpModelClient {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = CompletionRequest {
            model: &self.model,
            prompt,
            max_tokens: self.max_tokens,
            temperature: 0.0,
            stop: &STOP_SEQUENCES,
        };

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        log::debug!("Sending completion request ({} prompt chars)", prompt.len());
        let response = request.send().await.map_err(|e| {
            log::error!("Failed to reach model endpoint {}: {}", self.url, e);
            GenerationError::UpstreamError(format!("Failed to reach model endpoint: {}", e))
        })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let head: String = text.chars().take(200).collect();
            log::error!("Model endpoint returned {}: {}", status, head);
            return Err(GenerationError::UpstreamError(format!(
                "Model endpoint returned {}: {}",
                status, head
            )));
        }

        Ok(text)
    }
}
