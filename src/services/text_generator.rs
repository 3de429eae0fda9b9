use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Handle to a loaded text-generation model.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the first generated candidate for `prompt`, unmodified.
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

/// Generator backed by an OpenAI-compatible inference server.
pub struct OpenAiGenerator {
    client: Client<OpenAIConfig>,
    model: String,
    max_tokens: u32,
}

impl OpenAiGenerator {
    pub fn from_config(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(config.model_api_base.clone())
            .with_api_key(config.model_api_key.expose_secret().to_string());

        log::info!(
            "Using model '{}' at {} (max_tokens = {})",
            config.model_name,
            config.model_api_base,
            config.max_new_tokens
        );

        Self {
            client: Client::with_config(openai_config),
            model: config.model_name.clone(),
            max_tokens: config.max_new_tokens,
        }
    }

    // Completions endpoint, not chat: the prompt must reach the model verbatim.
    fn completion_request(&self, prompt: &str) -> serde_json::Value {
        json!({
            "model": self.model,
            "prompt": prompt,
            "max_tokens": self.max_tokens,
            "n": 1,
            "stream": false,
        })
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let request = self.completion_request(prompt);
        let response: CompletionBody = self.client.completions().create_byot(request).await?;
        first_candidate(response)
    }
}

#[derive(Debug, Deserialize)]
struct CompletionBody {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    text: Option<String>,
}

fn first_candidate(body: CompletionBody) -> AppResult<String> {
    body.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.text)
        .ok_or_else(|| AppError::GenerationError("model returned no candidates".to_string()))
}
