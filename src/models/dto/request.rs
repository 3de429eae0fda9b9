use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Body of `POST /generate`, accepted form-encoded or as JSON.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct McqRequest {
    #[validate(custom(function = "not_blank", message = "Text must not be empty"))]
    pub text: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
