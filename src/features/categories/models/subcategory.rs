use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for subcategory. Subcategories have no independent
/// lifecycle; they are created and edited only through their category's form.
#[derive(Debug, Clone, FromRow)]
pub struct Subcategory {
    pub id: Uuid,
    pub name: String,
    pub category_id: Uuid,
    pub created_at: DateTime<Utc>,
}
