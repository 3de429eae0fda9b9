use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{GenerationService, McqClient, OpenAiGenerator, RegexMcqExtractor, TextGenerator},
};

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub mcq_client: Arc<McqClient>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates the model handle once; every worker shares it.
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate()?;
        let generator = Arc::new(OpenAiGenerator::from_config(&config));
        Ok(Self::with_generator(config, generator))
    }

    pub fn with_generator(config: Config, generator: Arc<dyn TextGenerator>) -> Self {
        let generation_service = Arc::new(GenerationService::new(generator));
        let mcq_client = Arc::new(McqClient::new(
            config.relay_endpoint_url.clone(),
            Arc::new(RegexMcqExtractor),
        ));

        Self {
            generation_service,
            mcq_client,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::AppError, services::text_generator::MockTextGenerator};

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_with_generator_uses_configured_relay_url() {
        let config = Config {
            relay_endpoint_url: "http://relay.test/generate".to_string(),
            ..Config::default()
        };
        let state = AppState::with_generator(config, Arc::new(MockTextGenerator::new()));

        assert_eq!(state.mcq_client.endpoint_url(), "http://relay.test/generate");
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = Config {
            model_api_base: "::".to_string(),
            ..Config::default()
        };

        assert!(matches!(AppState::new(config), Err(AppError::ConfigError(_))));
    }
}
