use std::sync::Arc;

use crate::{
    constants::prompts::generation_instruction, errors::AppResult,
    services::text_generator::TextGenerator,
};

pub struct GenerationService {
    generator: Arc<dyn TextGenerator>,
}

impl GenerationService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Wraps `prompt` in the question-generation instruction and returns the raw model text.
    pub async fn generate(&self, prompt: &str) -> AppResult<String> {
        let instruction = generation_instruction(prompt);
        log::debug!("Relaying prompt of {} bytes to model", instruction.len());

        self.generator.generate(&instruction).await
    }
}
