#[cfg(test)]
use axum::Router;

/// Cookie header value carrying a valid admin session marker.
#[cfg(test)]
pub fn admin_cookie() -> String {
    use crate::features::auth::{ADMIN_COOKIE_NAME, ADMIN_COOKIE_VALUE};
    format!("{}={}", ADMIN_COOKIE_NAME, ADMIN_COOKIE_VALUE)
}

/// Wrap a router with the admin cookie gate, as `main` does for admin routes.
#[cfg(test)]
pub fn with_admin_gate(router: Router) -> Router {
    router.route_layer(axum::middleware::from_fn(
        crate::core::middleware::admin_auth_middleware,
    ))
}
