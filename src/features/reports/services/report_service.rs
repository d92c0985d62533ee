use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::{
    CreateLocationReportDto, LocationReportResponseDto, ReportListQuery,
};
use crate::features::reports::models::ReportWithLocation;
use crate::shared::constants::{REPORT_STATUSES, REPORT_STATUS_PENDING};

/// Service for location reports
pub struct ReportService {
    pool: PgPool,
}

impl ReportService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a report from a public submission; status starts as "pending"
    pub async fn create(&self, dto: CreateLocationReportDto) -> Result<LocationReportResponseDto> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO location_reports (location_id, reporter_name, message)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(dto.location_id)
        .bind(&dto.reporter_name)
        .bind(&dto.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create location report: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Location report created: id={}", id);

        self.get(id).await
    }

    /// Get one report with its location name
    pub async fn get(&self, id: Uuid) -> Result<LocationReportResponseDto> {
        let report = sqlx::query_as::<_, ReportWithLocation>(
            r#"
            SELECT r.id, r.location_id, l.name AS location_name,
                   r.reporter_name, r.message, r.status, r.created_at
            FROM location_reports r
            LEFT JOIN locations l ON l.id = r.location_id
            WHERE r.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get location report: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Report with id {} not found", id)))?;

        Ok(report.into())
    }

    /// List reports, newest first, optionally filtered by status
    pub async fn list(&self, query: &ReportListQuery) -> Result<Vec<LocationReportResponseDto>> {
        let reports = sqlx::query_as::<_, ReportWithLocation>(
            r#"
            SELECT r.id, r.location_id, l.name AS location_name,
                   r.reporter_name, r.message, r.status, r.created_at
            FROM location_reports r
            LEFT JOIN locations l ON l.id = r.location_id
            WHERE ($1::text IS NULL OR r.status = $1)
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(query.status.as_deref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list location reports: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(reports.into_iter().map(Into::into).collect())
    }

    /// Update a report status
    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<LocationReportResponseDto> {
        validate_status(status)?;

        let updated = sqlx::query(r#"UPDATE location_reports SET status = $1 WHERE id = $2"#)
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update report status: {:?}", e);
                AppError::Database(e)
            })?;

        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Report with id {} not found",
                id
            )));
        }

        self.get(id).await
    }

    /// Count of reports awaiting review, shown on the admin dashboard
    pub async fn count_pending(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM location_reports WHERE status = $1"#,
        )
        .bind(REPORT_STATUS_PENDING)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count pending reports: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(count)
    }
}

/// Reject statuses outside the known set
fn validate_status(status: &str) -> Result<()> {
    if REPORT_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Unknown report status '{}'",
            status
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_status() {
        assert!(validate_status("pending").is_ok());
        assert!(validate_status("resolved").is_ok());
        assert!(validate_status("dismissed").is_ok());
        assert!(validate_status("archived").is_err());
        assert!(validate_status("").is_err());
    }
}
