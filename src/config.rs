use std::env;

use reqwest::Url;
use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub model_api_base: String,
    pub model_api_key: SecretString,
    pub model_name: String,
    pub max_new_tokens: u32,
    pub relay_endpoint_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5001,
            model_api_base: "http://localhost:8000/v1".to_string(),
            model_api_key: SecretString::from("EMPTY".to_string()),
            model_name: "google/flan-t5-base".to_string(),
            max_new_tokens: 512,
            relay_endpoint_url: "http://localhost:5001/generate".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            web_server_host: env::var("WEB_SERVER_HOST").unwrap_or(defaults.web_server_host),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.web_server_port),
            model_api_base: env::var("MODEL_API_BASE").unwrap_or(defaults.model_api_base),
            model_api_key: env::var("MODEL_API_KEY")
                .map(SecretString::from)
                .unwrap_or(defaults.model_api_key),
            model_name: env::var("MODEL_NAME").unwrap_or(defaults.model_name),
            max_new_tokens: env::var("MODEL_MAX_TOKENS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.max_new_tokens),
            relay_endpoint_url: env::var("RELAY_ENDPOINT_URL")
                .unwrap_or(defaults.relay_endpoint_url),
        }
    }

    /// Rejects settings the service cannot start with.
    pub fn validate(&self) -> AppResult<()> {
        if self.model_name.trim().is_empty() {
            return Err(AppError::ConfigError("MODEL_NAME must not be empty".to_string()));
        }

        if self.max_new_tokens == 0 {
            return Err(AppError::ConfigError(
                "MODEL_MAX_TOKENS must be greater than zero".to_string(),
            ));
        }

        Url::parse(&self.model_api_base).map_err(|e| {
            AppError::ConfigError(format!(
                "MODEL_API_BASE '{}' is not a valid URL: {}",
                self.model_api_base, e
            ))
        })?;

        Url::parse(&self.relay_endpoint_url).map_err(|e| {
            AppError::ConfigError(format!(
                "RELAY_ENDPOINT_URL '{}' is not a valid URL: {}",
                self.relay_endpoint_url, e
            ))
        })?;

        Ok(())
    }
}
