use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::locations::handlers;
use crate::features::locations::services::LocationService;

/// Public routes for the locations feature (no authentication required)
pub fn routes(service: Arc<LocationService>) -> Router {
    Router::new()
        .route("/api/locations", get(handlers::list_locations))
        .route("/api/locations/{id}", get(handlers::get_location))
        .with_state(service)
}

/// Admin routes; gated by the admin cookie middleware in `main`
pub fn admin_routes(service: Arc<LocationService>) -> Router {
    Router::new()
        .route("/api/admin/locations", post(handlers::create_location))
        .route(
            "/api/admin/locations/{id}",
            axum::routing::put(handlers::update_location).delete(handlers::delete_location),
        )
        .with_state(service)
}
