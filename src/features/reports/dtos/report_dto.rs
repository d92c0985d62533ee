use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::reports::models::ReportWithLocation;

/// Request DTO for submitting a location report
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateLocationReportDto {
    /// Location the report is about, if any
    pub location_id: Option<Uuid>,

    #[validate(length(max = 255, message = "Name must not exceed 255 characters"))]
    pub reporter_name: Option<String>,

    #[validate(length(min = 1, max = 5000, message = "Message must be 1-5000 characters"))]
    pub message: String,
}

/// Request DTO for updating a report status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateReportStatusDto {
    /// One of "pending", "resolved", "dismissed"
    pub status: String,
}

/// Response DTO for a location report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocationReportResponseDto {
    pub id: Uuid,
    pub location_id: Option<Uuid>,
    pub location_name: Option<String>,
    pub reporter_name: Option<String>,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<ReportWithLocation> for LocationReportResponseDto {
    fn from(r: ReportWithLocation) -> Self {
        Self {
            id: r.id,
            location_id: r.location_id,
            location_name: r.location_name,
            reporter_name: r.reporter_name,
            message: r.message,
            status: r.status,
            created_at: r.created_at,
        }
    }
}

/// Query parameters for the admin report list
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ReportListQuery {
    /// Filter by status, e.g. "pending"
    pub status: Option<String>,
}
