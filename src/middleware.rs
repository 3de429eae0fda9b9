use std::{future::Ready, rc::Rc};

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    Error, HttpMessage,
};
use futures::future::LocalBoxFuture;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Access log line for `actix_web::middleware::Logger`, ending with the request id.
pub const ACCESS_LOG_FORMAT: &str = "%a \"%r\" %s %b %T %{x-request-id}o";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

/// Tags every request with a UUID, kept in the request extensions and echoed as `x-request-id`.
pub struct RequestIdMiddleware;

impl<S, B> Transform<S, ServiceRequest> for RequestIdMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestIdMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        std::future::ready(Ok(RequestIdMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct RequestIdMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestIdMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request_id = Uuid::new_v4().to_string();
        log::debug!("{} {} [{}]", req.method(), req.path(), request_id);
        req.extensions_mut().insert(RequestId(request_id.clone()));

        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let mut res = service.call(req).await?;
            if let Ok(value) = HeaderValue::from_str(&request_id) {
                res.headers_mut()
                    .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
            }
            Ok(res)
        })
    }
}

pub fn get_request_id(req: &actix_web::HttpRequest) -> Option<String> {
    req.extensions().get::<RequestId>().map(|id| id.0.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, test, App, HttpRequest, HttpResponse};

    #[get("/echo-id")]
    async fn echo_id(req: HttpRequest) -> HttpResponse {
        HttpResponse::Ok().body(get_request_id(&req).unwrap_or_default())
    }

    #[actix_web::test]
    async fn test_request_id_header_matches_extension() {
        let app =
            test::init_service(App::new().wrap(RequestIdMiddleware).service(echo_id)).await;

        let req = test::TestRequest::get().uri("/echo-id").to_request();
        let resp = test::call_service(&app, req).await;

        let header = resp
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .expect("response should carry a request id");
        let body = test::read_body(resp).await;

        assert_eq!(body, header.as_bytes());
        assert!(Uuid::parse_str(&header).is_ok());
    }

    #[::core::prelude::v1::test]
    fn test_access_log_format_includes_request_id() {
        assert!(ACCESS_LOG_FORMAT.ends_with(&format!("%{{{}}}o", REQUEST_ID_HEADER)));
    }

    #[actix_web::test]
    async fn test_logger_sees_request_id_header() {
        let app = test::init_service(
            App::new()
                .service(echo_id)
                .wrap(RequestIdMiddleware)
                .wrap(actix_web::middleware::Logger::new(ACCESS_LOG_FORMAT)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/echo-id").to_request()).await;

        assert!(resp.status().is_success());
        assert!(resp.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[actix_web::test]
    async fn test_request_ids_are_unique() {
        let app =
            test::init_service(App::new().wrap(RequestIdMiddleware).service(echo_id)).await;

        let first = test::call_service(&app, test::TestRequest::get().uri("/echo-id").to_request()).await;
        let second = test::call_service(&app, test::TestRequest::get().uri("/echo-id").to_request()).await;

        assert_ne!(
            first.headers().get(REQUEST_ID_HEADER),
            second.headers().get(REQUEST_ID_HEADER)
        );
    }
}
