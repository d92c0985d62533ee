use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::categories::dtos::SubcategoryResponseDto;
use crate::features::map::selection::SelectionState;

/// One entry of the style catalogue
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MapStyleDto {
    pub id: String,
    pub name: String,
    /// Provider style URL; absent when running on the fallback tile source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Map bootstrap configuration for the frontend
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MapConfigDto {
    /// [latitude, longitude]
    pub center: [f64; 2],
    pub default_zoom: u8,
    /// Zoom level used for the fly-to-location animation
    pub focus_zoom: u8,
    /// Validated active style id; unknown requests fall back to "streets"
    pub active_style: String,
    pub styles: Vec<MapStyleDto>,
    /// Raster tile source used when no provider API key is configured
    pub fallback_tile_url: String,
    /// Path of the boundary GeoJSON endpoint, when configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary_path: Option<String>,
}

/// One map marker for a plottable location
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MapMarkerDto {
    pub id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Marker fill color from the category palette
    pub color: String,
    pub category_id: Option<Uuid>,
    pub subcategory_id: Option<Uuid>,
    pub condition: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}

/// Filtered marker set for the current map view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MapMarkersDto {
    pub markers: Vec<MapMarkerDto>,
    pub total: i64,
    /// Marker diameter in pixels for the requested zoom level
    pub marker_size: u32,
}

/// Query parameters for the map config endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct MapConfigQuery {
    /// Requested style id; unknown values fall back to "streets"
    pub style: Option<String>,
}

/// Query parameters for the marker endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct MarkersQuery {
    /// Comma-separated selection of subcategory/category ids
    pub subcategories: Option<String>,
    /// Comma-separated condition labels, e.g. "Baik,Rusak Berat"
    pub conditions: Option<String>,
    /// Free-text search over name, description and address
    pub q: Option<String>,
    /// Current zoom level, drives the marker size
    pub zoom: Option<f64>,
}

/// Category entry of the layers panel with its derived checkbox state
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LayerCategoryDto {
    pub id: Uuid,
    pub name: String,
    pub icon: Option<String>,
    /// Tri-state over the current selection
    pub state: SelectionState,
    pub subcategories: Vec<SubcategoryResponseDto>,
}

/// Layers panel payload: categories with tri-states, the (possibly toggled)
/// selection, and the available condition filters
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LayersDto {
    pub categories: Vec<LayerCategoryDto>,
    pub selected: Vec<Uuid>,
    pub condition_filters: Vec<String>,
}

/// Query parameters for the layers panel endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct LayersQuery {
    /// Comma-separated current selection of subcategory/category ids
    pub selected: Option<String>,
    /// Category checkbox to toggle (all-or-nothing bulk toggle)
    pub toggle_category: Option<Uuid>,
    /// Single subcategory/category id to toggle
    pub toggle: Option<Uuid>,
}
