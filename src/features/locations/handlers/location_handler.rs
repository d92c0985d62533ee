use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::locations::dtos::{
    CreateLocationDto, LocationResponseDto, UpdateLocationDto,
};
use crate::features::locations::services::LocationService;
use crate::shared::types::{ApiResponse, Meta};

/// List all locations
///
/// Returns the full catalogue ordered by last update; filtering for the map
/// view happens against this in-memory list, not server-side search.
#[utoipa::path(
    get,
    path = "/api/locations",
    responses(
        (status = 200, description = "List of locations", body = ApiResponse<Vec<LocationResponseDto>>),
    ),
    tag = "locations"
)]
pub async fn list_locations(
    State(service): State<Arc<LocationService>>,
) -> Result<Json<ApiResponse<Vec<LocationResponseDto>>>> {
    let locations = service.list().await?;
    let total = locations.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(locations),
        None,
        Some(Meta { total }),
    )))
}

/// Get a location by id
#[utoipa::path(
    get,
    path = "/api/locations/{id}",
    params(
        ("id" = Uuid, Path, description = "Location ID")
    ),
    responses(
        (status = 200, description = "Location found", body = ApiResponse<LocationResponseDto>),
        (status = 404, description = "Location not found")
    ),
    tag = "locations"
)]
pub async fn get_location(
    State(service): State<Arc<LocationService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<LocationResponseDto>>> {
    let location = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(location), None, None)))
}

/// Create a location (admin)
#[utoipa::path(
    post,
    path = "/api/admin/locations",
    request_body = CreateLocationDto,
    responses(
        (status = 200, description = "Location created", body = ApiResponse<LocationResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "locations"
)]
pub async fn create_location(
    State(service): State<Arc<LocationService>>,
    AppJson(dto): AppJson<CreateLocationDto>,
) -> Result<Json<ApiResponse<LocationResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let location = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(location), None, None)))
}

/// Update a location and replace its image list (admin)
#[utoipa::path(
    put,
    path = "/api/admin/locations/{id}",
    params(
        ("id" = Uuid, Path, description = "Location ID")
    ),
    request_body = UpdateLocationDto,
    responses(
        (status = 200, description = "Location updated", body = ApiResponse<LocationResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Location not found")
    ),
    tag = "locations"
)]
pub async fn update_location(
    State(service): State<Arc<LocationService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateLocationDto>,
) -> Result<Json<ApiResponse<LocationResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let location = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(location), None, None)))
}

/// Delete a location (admin)
#[utoipa::path(
    delete,
    path = "/api/admin/locations/{id}",
    params(
        ("id" = Uuid, Path, description = "Location ID")
    ),
    responses(
        (status = 200, description = "Location deleted"),
        (status = 404, description = "Location not found")
    ),
    tag = "locations"
)]
pub async fn delete_location(
    State(service): State<Arc<LocationService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}
