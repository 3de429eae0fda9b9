use actix_web::{
    error::{JsonPayloadError, UrlencodedError},
    http::header::ContentType,
    web, Either, Error, HttpRequest, HttpResponse,
};

use crate::{
    app_state::AppState, errors::AppError, middleware::get_request_id,
    models::dto::request::GenerateRequest,
};

type GenerateBody = Either<web::Form<GenerateRequest>, web::Json<GenerateRequest>>;

// Prompts are relayed without truncation, so the extractor defaults are raised.
const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

/// `POST /generate`: relays the prompt to the model and returns its text as-is.
pub async fn generate(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: GenerateBody,
) -> Result<HttpResponse, AppError> {
    let request = match body {
        Either::Left(form) => form.into_inner(),
        Either::Right(json) => json.into_inner(),
    };
    let prompt = request.prompt.ok_or(AppError::MissingPrompt)?;

    let request_id = get_request_id(&req).unwrap_or_default();
    let text = state.generation_service.generate(&prompt).await?;
    log::info!("[{}] relayed {} bytes of generated text", request_id, text.len());

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(text))
}

// An unreadable body is reported the same way as a body without a prompt.
pub fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> Error {
    log::debug!("Rejected form body: {}", err);
    AppError::MissingPrompt.into()
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    log::debug!("Rejected JSON body: {}", err);
    AppError::MissingPrompt.into()
}

pub fn generate_resource() -> actix_web::Resource {
    web::resource("/generate")
        .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
        .app_data(
            web::FormConfig::default()
                .limit(MAX_BODY_BYTES)
                .error_handler(form_error_handler),
        )
        .app_data(
            web::JsonConfig::default()
                .limit(MAX_BODY_BYTES)
                .error_handler(json_error_handler),
        )
        .route(web::post().to(generate))
}
