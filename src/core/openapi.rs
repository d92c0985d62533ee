use utoipa::{Modify, OpenApi};

use crate::features::auth::{dto as auth_dto, handler as auth_handler};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::locations::{dtos as locations_dtos, handlers as locations_handlers};
use crate::features::map::{dtos as map_dtos, handlers as map_handlers};
use crate::features::reports::{dtos as reports_dtos, handlers as reports_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handler::login,
        auth_handler::logout,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Locations
        locations_handlers::list_locations,
        locations_handlers::get_location,
        locations_handlers::create_location,
        locations_handlers::update_location,
        locations_handlers::delete_location,
        // Map (public)
        map_handlers::get_map_config,
        map_handlers::get_map_markers,
        map_handlers::get_map_layers,
        map_handlers::get_map_boundary,
        // Reports
        reports_handlers::create_report,
        reports_handlers::list_reports,
        reports_handlers::update_report_status,
        // Dashboard (admin)
        dashboard_handlers::get_dashboard,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth_dto::LoginRequestDto,
            // Categories
            categories_dtos::SubcategoryResponseDto,
            categories_dtos::CategoryResponseDto,
            categories_dtos::SubcategoryInputDto,
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            // Locations
            locations_dtos::LocationResponseDto,
            locations_dtos::CreateLocationDto,
            locations_dtos::UpdateLocationDto,
            ApiResponse<Vec<locations_dtos::LocationResponseDto>>,
            ApiResponse<locations_dtos::LocationResponseDto>,
            // Map
            map_dtos::MapStyleDto,
            map_dtos::MapConfigDto,
            map_dtos::MapMarkerDto,
            map_dtos::MapMarkersDto,
            map_dtos::LayerCategoryDto,
            map_dtos::LayersDto,
            crate::features::map::selection::SelectionState,
            ApiResponse<map_dtos::MapConfigDto>,
            ApiResponse<map_dtos::MapMarkersDto>,
            ApiResponse<map_dtos::LayersDto>,
            // Reports
            reports_dtos::CreateLocationReportDto,
            reports_dtos::UpdateReportStatusDto,
            reports_dtos::LocationReportResponseDto,
            ApiResponse<Vec<reports_dtos::LocationReportResponseDto>>,
            ApiResponse<reports_dtos::LocationReportResponseDto>,
            // Dashboard
            dashboard_dtos::DashboardStatsDto,
            dashboard_dtos::DashboardLocationDto,
            dashboard_dtos::DashboardDto,
            ApiResponse<dashboard_dtos::DashboardDto>,
        )
    ),
    tags(
        (name = "auth", description = "Admin gate: login and logout"),
        (name = "categories", description = "Location categories and subcategories"),
        (name = "locations", description = "Village infrastructure locations"),
        (name = "map", description = "Public map view: config, markers, boundary"),
        (name = "reports", description = "Visitor reports about locations"),
        (name = "dashboard", description = "Admin dashboard stats"),
    ),
    info(
        title = "SIG Desa API",
        version = "0.1.0",
        description = "API documentation for the village GIS dashboard",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
