use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for location
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category_id: Option<Uuid>,
    pub subcategory_id: Option<Uuid>,
    pub condition: Option<String>,
    pub address: Option<String>,
    pub dusun: Option<String>,
    pub contact: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Location row joined with its category/subcategory names for list views
#[derive(Debug, Clone, FromRow)]
pub struct LocationWithNames {
    pub id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category_id: Option<Uuid>,
    pub subcategory_id: Option<Uuid>,
    pub condition: Option<String>,
    pub address: Option<String>,
    pub dusun: Option<String>,
    pub contact: Option<String>,
    pub description: Option<String>,
    pub category_name: Option<String>,
    pub subcategory_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
