use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::auth::handler;
use crate::features::auth::service::AuthService;

/// Public routes for the admin gate
pub fn routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/login", post(handler::login))
        .route("/api/logout", post(handler::logout))
        .with_state(service)
}
