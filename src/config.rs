use std::env;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub app_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub llm_url: String,
    pub llm_model: String,
    pub llm_max_tokens: u32,
    pub llm_api_key: Option<SecretString>,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            app_name: env::var("APP_NAME").unwrap_or_else(|_| "QUIZZR".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            llm_url: env::var("LLM_URL")
                .unwrap_or_else(|_| "http://localhost:8005/v1/completions".to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| "local".to_string()),
            llm_max_tokens: env::var("LLM_MAX_TOKENS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(2400),
            llm_api_key: env::var("LLM_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty())
                .map(SecretString::from),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|o| !o.trim().is_empty()),
        }
    }

    /// Rejects settings the server cannot start with.
    pub fn validate(&self) -> AppResult<()> {
        let url = reqwest::Url::parse(&self.llm_url).map_err(|e| {
            AppError::ValidationError(format!("LLM_URL '{}' is not a valid URL: {}", self.llm_url, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(AppError::ValidationError(format!(
                "LLM_URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.llm_max_tokens == 0 {
            return Err(AppError::ValidationError(
                "LLM_MAX_TOKENS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn test_config() -> Self {
        Self {
            app_name: "QUIZZR".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            llm_url: "http://127.0.0.1:8005/v1/completions".to_string(),
            llm_model: "local".to_string(),
            llm_max_tokens: 2400,
            llm_api_key: None,
            cors_allowed_origin: None,
        }
    }
}
