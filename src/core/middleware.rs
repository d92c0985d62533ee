use crate::core::error::AppError;
use crate::features::auth::{ADMIN_COOKIE_NAME, ADMIN_COOKIE_VALUE};
use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use base64::prelude::*;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    // If origins list contains "*", allow any origin
    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        // Parse origins into HeaderValue
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

pub fn basic_auth_middleware(
    valid_credentials: Arc<String>,
) -> impl Fn(
    Request,
    Next,
)
    -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, Response>> + Send>>
       + Clone {
    move |req: Request, next: Next| {
        let credentials = valid_credentials.clone();
        Box::pin(async move {
            let auth_header = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|header| header.to_str().ok());

            if let Some(auth_header) = auth_header {
                if let Some(encoded) = auth_header.strip_prefix("Basic ") {
                    if let Ok(decoded) = BASE64_STANDARD.decode(encoded) {
                        if let Ok(creds) = String::from_utf8(decoded) {
                            if creds == *credentials {
                                return Ok(next.run(req).await);
                            }
                        }
                    }
                }
            }

            let response = Response::builder()
                .status(StatusCode::UNAUTHORIZED)
                .header(header::WWW_AUTHENTICATE, "Basic realm=\"Swagger UI\"")
                .body(Body::from("Unauthorized"))
                .unwrap();

            Err(response)
        })
    }
}

/// Gate for the admin API: the login endpoint sets a marker cookie and this
/// middleware only checks for its presence. Expiry is handled by the cookie
/// Max-Age, not server-side.
pub async fn admin_auth_middleware(req: Request, next: Next) -> Result<Response, AppError> {
    let has_admin_cookie = req
        .headers()
        .get(header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .map(|cookies| {
            cookies.split(';').any(|pair| {
                let mut parts = pair.trim().splitn(2, '=');
                parts.next() == Some(ADMIN_COOKIE_NAME)
                    && parts.next() == Some(ADMIN_COOKIE_VALUE)
            })
        })
        .unwrap_or(false);

    if !has_admin_cookie {
        return Err(AppError::Unauthorized(
            "Admin authentication required".to_string(),
        ));
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use crate::shared::test_helpers::{admin_cookie, with_admin_gate};
    use axum::{http::StatusCode, routing::get, Router};
    use axum_test::TestServer;

    async fn protected() -> &'static str {
        "ok"
    }

    fn app() -> Router {
        with_admin_gate(Router::new().route("/api/admin/ping", get(protected)))
    }

    #[tokio::test]
    async fn test_admin_gate_rejects_without_cookie() {
        let server = TestServer::new(app()).unwrap();
        let response = server.get("/api/admin/ping").await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_gate_rejects_wrong_cookie_value() {
        let server = TestServer::new(app()).unwrap();
        let response = server
            .get("/api/admin/ping")
            .add_header("cookie", "admin_auth=0; theme=dark")
            .await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_gate_allows_with_cookie() {
        let server = TestServer::new(app()).unwrap();
        let response = server
            .get("/api/admin/ping")
            .add_header("cookie", admin_cookie())
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }
}
