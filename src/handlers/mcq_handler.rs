use actix_web::{error::JsonPayloadError, web, Error, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::McqRequest, response::McqListResponse},
};

/// `POST /api/mcqs`: runs the relay consumer and returns the parsed records.
pub async fn create_mcqs(
    state: web::Data<AppState>,
    request: web::Json<McqRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let mcqs = state
        .mcq_client
        .generate_mcqs_from_text(&request.text)
        .await;
    log::info!("Extracted {} questions from relay output", mcqs.len());

    Ok(HttpResponse::Ok().json(McqListResponse::from(mcqs)))
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    AppError::ValidationError(err.to_string()).into()
}

pub fn mcq_resource() -> actix_web::Resource {
    web::resource("/api/mcqs")
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route(web::post().to(create_mcqs))
}
