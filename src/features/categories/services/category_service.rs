use std::collections::HashSet;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::models::{Category, Subcategory};

/// Service for category operations
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all categories with their ordered subcategories
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, icon, created_at
            FROM categories
            ORDER BY created_at, name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        let subcategories = self.fetch_all_subcategories().await?;

        Ok(CategoryResponseDto::group(categories, subcategories))
    }

    /// Get one category with its subcategories
    pub async fn get(&self, id: Uuid) -> Result<CategoryResponseDto> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, icon, created_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Category with id {} not found", id)))?;

        let subcategories = self.fetch_subcategories(id).await?;

        Ok(CategoryResponseDto {
            id: category.id,
            name: category.name,
            icon: category.icon,
            subcategories: subcategories.into_iter().map(Into::into).collect(),
        })
    }

    /// Create a category together with its subcategory rows
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, icon)
            VALUES ($1, $2)
            RETURNING id, name, icon, created_at
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.icon)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create category: {:?}", e);
            AppError::Database(e)
        })?;

        for sub in &dto.subcategories {
            self.insert_subcategory(category.id, &sub.name).await?;
        }

        tracing::info!(
            "Category created: id={}, name={}, subcategories={}",
            category.id,
            category.name,
            dto.subcategories.len()
        );

        self.get(category.id).await
    }

    /// Update a category and reconcile its subcategory set.
    ///
    /// Submitted entries with an id are renamed in place, entries without one
    /// are inserted, and stored rows missing from the submission are deleted.
    /// A blind full replacement would ripple through the locations cascade,
    /// so reconciliation is keyed by id.
    pub async fn update(&self, id: Uuid, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let updated = sqlx::query(
            r#"
            UPDATE categories
            SET name = $1, icon = $2
            WHERE id = $3
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.icon)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update category: {:?}", e);
            AppError::Database(e)
        })?;

        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Category with id {} not found",
                id
            )));
        }

        let existing = self.fetch_subcategories(id).await?;
        let submitted_ids: HashSet<Uuid> =
            dto.subcategories.iter().filter_map(|s| s.id).collect();

        // Delete stored rows missing from the submission
        for sub in &existing {
            if !submitted_ids.contains(&sub.id) {
                sqlx::query(r#"DELETE FROM subcategories WHERE id = $1 AND category_id = $2"#)
                    .bind(sub.id)
                    .bind(id)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| {
                        tracing::error!("Failed to delete subcategory: {:?}", e);
                        AppError::Database(e)
                    })?;
            }
        }

        // Rename kept rows, insert new ones
        for sub in &dto.subcategories {
            match sub.id {
                Some(sub_id) => {
                    sqlx::query(
                        r#"UPDATE subcategories SET name = $1 WHERE id = $2 AND category_id = $3"#,
                    )
                    .bind(&sub.name)
                    .bind(sub_id)
                    .bind(id)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| {
                        tracing::error!("Failed to update subcategory: {:?}", e);
                        AppError::Database(e)
                    })?;
                }
                None => {
                    self.insert_subcategory(id, &sub.name).await?;
                }
            }
        }

        self.get(id).await
    }

    /// Delete a category. Subcategories and referencing locations are removed
    /// by the database cascade; no compensating cleanup is issued here.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(r#"DELETE FROM categories WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete category: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Category with id {} not found",
                id
            )));
        }

        tracing::info!("Category deleted: id={}", id);

        Ok(())
    }

    async fn fetch_all_subcategories(&self) -> Result<Vec<Subcategory>> {
        sqlx::query_as::<_, Subcategory>(
            r#"
            SELECT id, name, category_id, created_at
            FROM subcategories
            ORDER BY created_at, name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list subcategories: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn fetch_subcategories(&self, category_id: Uuid) -> Result<Vec<Subcategory>> {
        sqlx::query_as::<_, Subcategory>(
            r#"
            SELECT id, name, category_id, created_at
            FROM subcategories
            WHERE category_id = $1
            ORDER BY created_at, name
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch subcategories: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn insert_subcategory(&self, category_id: Uuid, name: &str) -> Result<()> {
        sqlx::query(r#"INSERT INTO subcategories (name, category_id) VALUES ($1, $2)"#)
            .bind(name)
            .bind(category_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert subcategory: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(())
    }
}
