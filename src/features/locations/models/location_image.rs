use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Image URL row for a location. The set is fully replaced on every edit;
/// insertion order (serial id) is the display order.
#[derive(Debug, Clone, FromRow)]
pub struct LocationImage {
    pub id: i64,
    pub location_id: Uuid,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}
