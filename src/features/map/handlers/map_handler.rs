use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::map::dtos::{
    LayersDto, LayersQuery, MapConfigDto, MapConfigQuery, MapMarkersDto, MarkersQuery,
};
use crate::features::map::services::{BoundaryService, MapService};
use crate::shared::types::ApiResponse;

/// Map bootstrap configuration
///
/// Center, zoom levels and the style catalogue. Style URLs are present when a
/// provider API key is configured; otherwise the client uses the fallback
/// tile source.
#[utoipa::path(
    get,
    path = "/api/map/config",
    params(MapConfigQuery),
    responses(
        (status = 200, description = "Map configuration", body = ApiResponse<MapConfigDto>),
    ),
    tag = "map"
)]
pub async fn get_map_config(
    State(service): State<Arc<MapService>>,
    Query(query): Query<MapConfigQuery>,
) -> Result<Json<ApiResponse<MapConfigDto>>> {
    let config = service.config(&query);
    Ok(Json(ApiResponse::success(Some(config), None, None)))
}

/// Markers for the current map view
///
/// One marker per location passing the selection/condition/search filters.
/// Locations with unplottable coordinates are skipped, never an error.
#[utoipa::path(
    get,
    path = "/api/map/markers",
    params(MarkersQuery),
    responses(
        (status = 200, description = "Filtered marker set", body = ApiResponse<MapMarkersDto>),
    ),
    tag = "map"
)]
pub async fn get_map_markers(
    State(service): State<Arc<MapService>>,
    Query(query): Query<MarkersQuery>,
) -> Result<Json<ApiResponse<MapMarkersDto>>> {
    let markers = service.markers(&query).await?;
    Ok(Json(ApiResponse::success(Some(markers), None, None)))
}

/// Layers panel with derived tri-state checkboxes
///
/// Returns each category with its checkbox state over the submitted
/// selection. Passing `toggle_category` applies the all-or-nothing bulk
/// toggle first; `toggle` flips a single id.
#[utoipa::path(
    get,
    path = "/api/map/layers",
    params(LayersQuery),
    responses(
        (status = 200, description = "Layers panel state", body = ApiResponse<LayersDto>),
    ),
    tag = "map"
)]
pub async fn get_map_layers(
    State(service): State<Arc<MapService>>,
    Query(query): Query<LayersQuery>,
) -> Result<Json<ApiResponse<LayersDto>>> {
    let layers = service.layers(&query).await?;
    Ok(Json(ApiResponse::success(Some(layers), None, None)))
}

/// Village boundary overlay
///
/// Returns the raw GeoJSON document rather than the response envelope so the
/// client can hand it straight to the map widget.
#[utoipa::path(
    get,
    path = "/api/map/boundary",
    responses(
        (status = 200, description = "Boundary GeoJSON", body = serde_json::Value),
        (status = 404, description = "Boundary asset not configured"),
        (status = 502, description = "Upstream asset fetch failed")
    ),
    tag = "map"
)]
pub async fn get_map_boundary(
    State(service): State<Arc<BoundaryService>>,
) -> Result<Json<serde_json::Value>> {
    let boundary = service.get().await?;
    Ok(Json(boundary))
}
