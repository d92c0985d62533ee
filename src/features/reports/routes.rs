use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;

/// Public routes for report submission (no authentication required)
pub fn routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/api/reports", post(handlers::create_report))
        .with_state(service)
}

/// Admin routes; gated by the admin cookie middleware in `main`
pub fn admin_routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/api/admin/reports", get(handlers::list_reports))
        .route(
            "/api/admin/reports/{id}/status",
            put(handlers::update_report_status),
        )
        .with_state(service)
}
