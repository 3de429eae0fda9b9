use serde::Serialize;

use crate::models::domain::Mcq;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}

pub type McqListResponse = ApiResponse<Vec<Mcq>>;

impl From<Vec<Mcq>> for McqListResponse {
    fn from(mcqs: Vec<Mcq>) -> Self {
        let message = format!("Generated {} questions", mcqs.len());
        ApiResponse {
            data: mcqs,
            message,
        }
    }
}
