use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Headline stats for the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    pub total_locations: i64,
    pub total_categories: i64,
    pub pending_reports: i64,
}

/// Location row for the dashboard table
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardLocationDto {
    pub id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub condition: Option<String>,
    pub category_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full dashboard payload: stats plus the location table
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub stats: DashboardStatsDto,
    pub locations: Vec<DashboardLocationDto>,
}
