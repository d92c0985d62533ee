use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use chrono::{DateTime, Utc};

use crate::core::error::{AppError, Result};
use crate::features::dashboard::dtos::{DashboardDto, DashboardLocationDto, DashboardStatsDto};

#[derive(Debug, FromRow)]
struct DashboardLocationRow {
    id: Uuid,
    name: String,
    latitude: f64,
    longitude: f64,
    condition: Option<String>,
    category_name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Service for the admin dashboard
pub struct DashboardService {
    pool: PgPool,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Dashboard payload: three counts issued concurrently, plus the
    /// location table ordered by last update
    pub async fn get(&self) -> Result<DashboardDto> {
        let (total_locations, total_categories, pending_reports, locations) = tokio::try_join!(
            self.count("SELECT COUNT(*) FROM locations"),
            self.count("SELECT COUNT(*) FROM categories"),
            self.count("SELECT COUNT(*) FROM location_reports WHERE status = 'pending'"),
            self.fetch_locations(),
        )?;

        Ok(DashboardDto {
            stats: DashboardStatsDto {
                total_locations,
                total_categories,
                pending_reports,
            },
            locations,
        })
    }

    async fn count(&self, sql: &str) -> Result<i64> {
        sqlx::query_scalar::<_, i64>(sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch dashboard count: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn fetch_locations(&self) -> Result<Vec<DashboardLocationDto>> {
        let rows = sqlx::query_as::<_, DashboardLocationRow>(
            r#"
            SELECT l.id, l.name, l.latitude, l.longitude, l.condition,
                   c.name AS category_name,
                   l.created_at, l.updated_at
            FROM locations l
            LEFT JOIN categories c ON c.id = l.category_id
            ORDER BY l.updated_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch dashboard locations: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows
            .into_iter()
            .map(|r| DashboardLocationDto {
                id: r.id,
                name: r.name,
                latitude: r.latitude,
                longitude: r.longitude,
                condition: r.condition,
                category_name: r.category_name,
                created_at: r.created_at,
                updated_at: r.updated_at,
            })
            .collect())
    }
}
