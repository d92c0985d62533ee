use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::map::handlers;
use crate::features::map::services::{BoundaryService, MapService};

/// Public routes for the map view (no authentication required)
pub fn routes(map_service: Arc<MapService>, boundary_service: Arc<BoundaryService>) -> Router {
    Router::new()
        .route("/api/map/config", get(handlers::get_map_config))
        .route("/api/map/markers", get(handlers::get_map_markers))
        .route("/api/map/layers", get(handlers::get_map_layers))
        .with_state(map_service)
        .merge(
            Router::new()
                .route("/api/map/boundary", get(handlers::get_map_boundary))
                .with_state(boundary_service),
        )
}
