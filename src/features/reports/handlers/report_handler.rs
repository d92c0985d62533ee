use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::reports::dtos::{
    CreateLocationReportDto, LocationReportResponseDto, ReportListQuery, UpdateReportStatusDto,
};
use crate::features::reports::services::ReportService;
use crate::shared::types::{ApiResponse, Meta};

/// Submit a location report
///
/// Public endpoint for visitors to flag a problem with a mapped location.
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = CreateLocationReportDto,
    responses(
        (status = 200, description = "Report submitted", body = ApiResponse<LocationReportResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "reports"
)]
pub async fn create_report(
    State(service): State<Arc<ReportService>>,
    AppJson(dto): AppJson<CreateLocationReportDto>,
) -> Result<Json<ApiResponse<LocationReportResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let report = service.create(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(report),
        Some("Terima kasih! Laporan Anda sudah kami terima.".to_string()),
        None,
    )))
}

/// List location reports (admin)
#[utoipa::path(
    get,
    path = "/api/admin/reports",
    params(ReportListQuery),
    responses(
        (status = 200, description = "List of reports", body = ApiResponse<Vec<LocationReportResponseDto>>),
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(service): State<Arc<ReportService>>,
    Query(query): Query<ReportListQuery>,
) -> Result<Json<ApiResponse<Vec<LocationReportResponseDto>>>> {
    let reports = service.list(&query).await?;
    let total = reports.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(reports),
        None,
        Some(Meta { total }),
    )))
}

/// Update a report status (admin)
#[utoipa::path(
    put,
    path = "/api/admin/reports/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    request_body = UpdateReportStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<LocationReportResponseDto>),
        (status = 400, description = "Unknown status"),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn update_report_status(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateReportStatusDto>,
) -> Result<Json<ApiResponse<LocationReportResponseDto>>> {
    let report = service.update_status(id, &dto.status).await?;
    Ok(Json(ApiResponse::success(Some(report), None, None)))
}
