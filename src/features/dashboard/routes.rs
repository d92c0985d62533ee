use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

/// Admin routes; gated by the admin cookie middleware in `main`
pub fn admin_routes(service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/admin/dashboard", get(handlers::get_dashboard))
        .with_state(service)
}
