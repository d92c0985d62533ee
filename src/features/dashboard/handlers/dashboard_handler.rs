use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::dashboard::dtos::DashboardDto;
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::ApiResponse;

/// Admin dashboard: headline stats and the location table
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    responses(
        (status = 200, description = "Dashboard stats and locations", body = ApiResponse<DashboardDto>),
        (status = 401, description = "Admin authentication required")
    ),
    tag = "dashboard"
)]
pub async fn get_dashboard(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<DashboardDto>>> {
    let dashboard = service.get().await?;
    Ok(Json(ApiResponse::success(Some(dashboard), None, None)))
}
