use std::sync::Arc;

use reqwest::StatusCode;

use crate::{
    constants::prompts::build_mcq_prompt, errors::AppResult, models::domain::Mcq,
    services::mcq_parser::McqExtractor,
};

/// Calls a generation relay over HTTP and parses its output into questions.
pub struct McqClient {
    http: reqwest::Client,
    endpoint_url: String,
    extractor: Arc<dyn McqExtractor>,
}

impl McqClient {
    pub fn new(endpoint_url: impl Into<String>, extractor: Arc<dyn McqExtractor>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint_url: endpoint_url.into(),
            extractor,
        }
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Never fails: any upstream problem yields an empty list.
    pub async fn generate_mcqs_from_text(&self, text: &str) -> Vec<Mcq> {
        let prompt = build_mcq_prompt(text);

        match self.request_raw_text(&prompt).await {
            Ok(Some(raw)) => self.extractor.extract(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Relay call to {} failed: {}", self.endpoint_url, e);
                Vec::new()
            }
        }
    }

    async fn request_raw_text(&self, prompt: &str) -> AppResult<Option<String>> {
        let response = self
            .http
            .post(&self.endpoint_url)
            .form(&[("prompt", prompt)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            log::warn!(
                "Relay at {} answered with status {}",
                self.endpoint_url,
                status
            );
            return Ok(None);
        }

        Ok(Some(response.text().await?))
    }
}
