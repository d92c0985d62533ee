use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::locations::dtos::{
    CreateLocationDto, LocationResponseDto, UpdateLocationDto,
};
use crate::features::locations::models::{LocationImage, LocationWithNames};
use crate::features::map::geo::parse_coordinate;

/// Service for location operations
pub struct LocationService {
    pool: PgPool,
}

impl LocationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all locations (newest update first) with resolved names and images
    pub async fn list(&self) -> Result<Vec<LocationResponseDto>> {
        let rows = sqlx::query_as::<_, LocationWithNames>(
            r#"
            SELECT
                l.id, l.name, l.latitude, l.longitude,
                l.category_id, l.subcategory_id,
                l.condition, l.address, l.dusun, l.contact, l.description,
                c.name AS category_name,
                s.name AS subcategory_name,
                l.created_at, l.updated_at
            FROM locations l
            LEFT JOIN categories c ON c.id = l.category_id
            LEFT JOIN subcategories s ON s.id = l.subcategory_id
            ORDER BY l.updated_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list locations: {:?}", e);
            AppError::Database(e)
        })?;

        let mut images = self.fetch_all_images().await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let urls = images.remove(&row.id).unwrap_or_default();
                LocationResponseDto::from_row(row, urls)
            })
            .collect())
    }

    /// Get one location with its images
    pub async fn get(&self, id: Uuid) -> Result<LocationResponseDto> {
        let row = sqlx::query_as::<_, LocationWithNames>(
            r#"
            SELECT
                l.id, l.name, l.latitude, l.longitude,
                l.category_id, l.subcategory_id,
                l.condition, l.address, l.dusun, l.contact, l.description,
                c.name AS category_name,
                s.name AS subcategory_name,
                l.created_at, l.updated_at
            FROM locations l
            LEFT JOIN categories c ON c.id = l.category_id
            LEFT JOIN subcategories s ON s.id = l.subcategory_id
            WHERE l.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get location: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Location with id {} not found", id)))?;

        let images = self.fetch_images(id).await?;

        Ok(LocationResponseDto::from_row(row, images))
    }

    /// Create a location, then insert its image rows.
    ///
    /// The two writes are independent calls with no surrounding transaction;
    /// a failure after the first leaves the location without images.
    pub async fn create(&self, dto: CreateLocationDto) -> Result<LocationResponseDto> {
        let (latitude, longitude) = parse_coordinates(&dto.latitude, &dto.longitude)?;

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO locations
                (name, latitude, longitude, category_id, subcategory_id,
                 condition, address, dusun, contact, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(&dto.name)
        .bind(latitude)
        .bind(longitude)
        .bind(dto.category_id)
        .bind(dto.subcategory_id)
        .bind(&dto.condition)
        .bind(&dto.address)
        .bind(&dto.dusun)
        .bind(&dto.contact)
        .bind(&dto.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create location: {:?}", e);
            AppError::Database(e)
        })?;

        self.insert_images(id, &dto.images).await?;

        tracing::info!(
            "Location created: id={}, name={}, images={}",
            id,
            dto.name,
            dto.images.len()
        );

        self.get(id).await
    }

    /// Update a location, then replace its image set.
    ///
    /// Images are replaced by delete-all-then-insert keyed on location_id —
    /// a full replacement regardless of prior count, never a diff. The update
    /// and the replacement are separate calls; a failure in between leaves
    /// the stored image set stale relative to the location row.
    pub async fn update(&self, id: Uuid, dto: UpdateLocationDto) -> Result<LocationResponseDto> {
        let (latitude, longitude) = parse_coordinates(&dto.latitude, &dto.longitude)?;

        let updated = sqlx::query(
            r#"
            UPDATE locations
            SET name = $1, latitude = $2, longitude = $3,
                category_id = $4, subcategory_id = $5,
                condition = $6, address = $7, dusun = $8,
                contact = $9, description = $10,
                updated_at = NOW()
            WHERE id = $11
            "#,
        )
        .bind(&dto.name)
        .bind(latitude)
        .bind(longitude)
        .bind(dto.category_id)
        .bind(dto.subcategory_id)
        .bind(&dto.condition)
        .bind(&dto.address)
        .bind(&dto.dusun)
        .bind(&dto.contact)
        .bind(&dto.description)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update location: {:?}", e);
            AppError::Database(e)
        })?;

        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Location with id {} not found",
                id
            )));
        }

        sqlx::query(r#"DELETE FROM location_images WHERE location_id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete location images: {:?}", e);
                AppError::Database(e)
            })?;

        self.insert_images(id, &dto.images).await?;

        self.get(id).await
    }

    /// Delete a location. Image rows are removed by the database cascade.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(r#"DELETE FROM locations WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete location: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Location with id {} not found",
                id
            )));
        }

        tracing::info!("Location deleted: id={}", id);

        Ok(())
    }

    async fn fetch_all_images(&self) -> Result<HashMap<Uuid, Vec<String>>> {
        let rows = sqlx::query_as::<_, LocationImage>(
            r#"
            SELECT id, location_id, image_url, created_at
            FROM location_images
            ORDER BY location_id, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list location images: {:?}", e);
            AppError::Database(e)
        })?;

        let mut grouped: HashMap<Uuid, Vec<String>> = HashMap::new();
        for row in rows {
            grouped.entry(row.location_id).or_default().push(row.image_url);
        }

        Ok(grouped)
    }

    async fn fetch_images(&self, location_id: Uuid) -> Result<Vec<String>> {
        let rows = sqlx::query_scalar::<_, String>(
            r#"
            SELECT image_url
            FROM location_images
            WHERE location_id = $1
            ORDER BY id
            "#,
        )
        .bind(location_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch location images: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows)
    }

    /// Insert image rows one by one so the serial ids preserve list order
    async fn insert_images(&self, location_id: Uuid, urls: &[String]) -> Result<()> {
        for url in urls {
            sqlx::query(r#"INSERT INTO location_images (location_id, image_url) VALUES ($1, $2)"#)
                .bind(location_id)
                .bind(url)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to insert location image: {:?}", e);
                    AppError::Database(e)
                })?;
        }

        Ok(())
    }
}

/// Parse form coordinate strings, rejecting unparsable or non-finite values
fn parse_coordinates(latitude: &str, longitude: &str) -> Result<(f64, f64)> {
    let lat = parse_coordinate(latitude)
        .ok_or_else(|| AppError::Validation("Latitude must be a valid number".to_string()))?;
    let lng = parse_coordinate(longitude)
        .ok_or_else(|| AppError::Validation("Longitude must be a valid number".to_string()))?;

    Ok((lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates_accepts_form_strings() {
        let (lat, lng) = parse_coordinates("-6.535", "110.74").unwrap();
        assert_eq!(lat, -6.535);
        assert_eq!(lng, 110.74);
    }

    #[test]
    fn test_parse_coordinates_rejects_garbage() {
        assert!(parse_coordinates("abc", "110.74").is_err());
        assert!(parse_coordinates("-6.535", "").is_err());
        assert!(parse_coordinates("NaN", "110.74").is_err());
    }
}
