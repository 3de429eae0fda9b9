pub mod generation_service;
pub mod mcq_client;
pub mod mcq_parser;
pub mod text_generator;

pub use generation_service::GenerationService;
pub use mcq_client::McqClient;
pub use mcq_parser::{extract_mcqs, McqExtractor, RegexMcqExtractor};
pub use text_generator::{OpenAiGenerator, TextGenerator};
