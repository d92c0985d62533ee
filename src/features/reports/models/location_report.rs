use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a visitor-submitted location report
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct LocationReport {
    pub id: Uuid,
    pub location_id: Option<Uuid>,
    pub reporter_name: Option<String>,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Report row joined with its location name for the admin table
#[derive(Debug, Clone, FromRow)]
pub struct ReportWithLocation {
    pub id: Uuid,
    pub location_id: Option<Uuid>,
    pub location_name: Option<String>,
    pub reporter_name: Option<String>,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
