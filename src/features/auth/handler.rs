use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::Response,
    Form,
};

use crate::features::auth::dto::LoginRequestDto;
use crate::features::auth::service::AuthService;

/// Default admin path used when the form carries no `from` target
const DEFAULT_ADMIN_PATH: &str = "/admin";

/// Log in to the admin area
///
/// Compares the submitted credentials with the configured secrets. On match,
/// redirects to the originally requested admin path and sets the session
/// marker cookie; on mismatch, redirects back to the login page with an
/// error flag and sets no cookie.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body(content = LoginRequestDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the requested admin path (success) or /login?error=invalid (mismatch)"),
    ),
    tag = "auth"
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    Form(dto): Form<LoginRequestDto>,
) -> Response {
    if service.verify(&dto.username, &dto.password) {
        let target = dto
            .from
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| DEFAULT_ADMIN_PATH.to_string());

        tracing::info!("Admin login succeeded, redirecting to {}", target);

        return redirect(&target, Some(service.session_cookie()));
    }

    tracing::warn!("Admin login failed for username '{}'", dto.username);

    let mut target = "/login?error=invalid".to_string();
    if let Some(from) = dto.from.filter(|f| !f.is_empty()) {
        target.push_str(&format!("&from={}", urlencoding::encode(&from)));
    }

    redirect(&target, None)
}

/// Log out of the admin area
///
/// Clears the session marker cookie and redirects to the login page.
#[utoipa::path(
    post,
    path = "/api/logout",
    responses(
        (status = 303, description = "Redirect to the login page with the session cookie cleared"),
    ),
    tag = "auth"
)]
pub async fn logout(State(service): State<Arc<AuthService>>) -> Response {
    redirect("/login", Some(service.clear_cookie()))
}

fn redirect(location: &str, cookie: Option<String>) -> Response {
    let mut builder = Response::builder()
        .status(StatusCode::SEE_OTHER)
        .header(header::LOCATION, location);

    if let Some(cookie) = cookie {
        builder = builder.header(header::SET_COOKIE, cookie);
    }

    builder.body(Body::empty()).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AdminConfig;
    use crate::features::auth::routes;
    use axum_test::TestServer;

    fn server() -> TestServer {
        let service = Arc::new(AuthService::new(AdminConfig {
            username: "admin".to_string(),
            password: "rahasia123".to_string(),
        }));
        TestServer::new(routes::routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_login_success_redirects_to_requested_path_and_sets_cookie() {
        let server = server();
        let response = server
            .post("/api/login")
            .form(&[
                ("username", "admin"),
                ("password", "rahasia123"),
                ("from", "/admin/locations/create"),
            ])
            .await;

        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/admin/locations/create"
        );

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("session cookie must be set")
            .to_str()
            .unwrap();
        assert!(cookie.contains("admin_auth=1"));
        assert!(cookie.contains("Max-Age=28800"));
        assert!(cookie.contains("Path=/"));
    }

    #[tokio::test]
    async fn test_login_success_defaults_to_admin_index() {
        let server = server();
        let response = server
            .post("/api/login")
            .form(&[("username", "admin"), ("password", "rahasia123")])
            .await;

        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/admin");
    }

    #[tokio::test]
    async fn test_login_mismatch_redirects_with_error_flag_and_no_cookie() {
        let server = server();
        let response = server
            .post("/api/login")
            .form(&[("username", "admin"), ("password", "salah")])
            .await;

        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        let location = response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(location.starts_with("/login?error=invalid"));
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_login_mismatch_preserves_from_target() {
        let server = server();
        let response = server
            .post("/api/login")
            .form(&[
                ("username", "tamu"),
                ("password", "salah"),
                ("from", "/admin/categories"),
            ])
            .await;

        let location = response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(location, "/login?error=invalid&from=%2Fadmin%2Fcategories");
    }

    #[tokio::test]
    async fn test_logout_clears_cookie() {
        let server = server();
        let response = server.post("/api/logout").await;

        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(cookie.starts_with("admin_auth="));
        assert!(cookie.contains("Max-Age=0"));
    }
}
