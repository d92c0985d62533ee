use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::models::{Category, Subcategory};

/// Response DTO for subcategory
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubcategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub category_id: Uuid,
}

impl From<Subcategory> for SubcategoryResponseDto {
    fn from(s: Subcategory) -> Self {
        Self {
            id: s.id,
            name: s.name,
            category_id: s.category_id,
        }
    }
}

/// Response DTO for category with its ordered subcategory list
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub icon: Option<String>,
    pub subcategories: Vec<SubcategoryResponseDto>,
}

impl CategoryResponseDto {
    /// Group a flat subcategory list under its categories, preserving the
    /// creation order of both lists.
    pub fn group(categories: Vec<Category>, subcategories: Vec<Subcategory>) -> Vec<Self> {
        categories
            .into_iter()
            .map(|category| {
                let children: Vec<SubcategoryResponseDto> = subcategories
                    .iter()
                    .filter(|s| s.category_id == category.id)
                    .cloned()
                    .map(SubcategoryResponseDto::from)
                    .collect();

                Self {
                    id: category.id,
                    name: category.name,
                    icon: category.icon,
                    subcategories: children,
                }
            })
            .collect()
    }
}

/// Subcategory entry submitted as part of the category form. Entries carrying
/// an id refer to stored rows; entries without one are inserted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubcategoryInputDto {
    pub id: Option<Uuid>,

    #[validate(length(min = 1, max = 255, message = "Subcategory name must be 1-255 characters"))]
    pub name: String,
}

/// Request DTO for creating a category together with its subcategories
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(max = 255, message = "Icon must not exceed 255 characters"))]
    pub icon: Option<String>,

    #[validate(nested)]
    #[serde(default)]
    pub subcategories: Vec<SubcategoryInputDto>,
}

/// Request DTO for updating a category. The form resubmits the full
/// subcategory set; stored rows missing from it are deleted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(max = 255, message = "Icon must not exceed 255 characters"))]
    pub icon: Option<String>,

    #[validate(nested)]
    #[serde(default)]
    pub subcategories: Vec<SubcategoryInputDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn category(name: &str) -> Category {
        Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            icon: None,
            created_at: Utc::now(),
        }
    }

    fn subcategory(name: &str, category_id: Uuid) -> Subcategory {
        Subcategory {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category_id,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_group_nests_subcategories_under_their_category() {
        let jalan = category("Jalan");
        let fasilitas = category("Fasilitas Umum");
        let subs = vec![
            subcategory("Jalan Desa", jalan.id),
            subcategory("Masjid", fasilitas.id),
            subcategory("Jalan Lingkungan", jalan.id),
        ];

        let grouped =
            CategoryResponseDto::group(vec![jalan.clone(), fasilitas.clone()], subs);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].subcategories.len(), 2);
        assert_eq!(grouped[0].subcategories[0].name, "Jalan Desa");
        assert_eq!(grouped[0].subcategories[1].name, "Jalan Lingkungan");
        assert_eq!(grouped[1].subcategories.len(), 1);
        assert_eq!(grouped[1].subcategories[0].category_id, fasilitas.id);
    }

    #[test]
    fn test_group_keeps_empty_categories() {
        let empty = category("Saluran Air");
        let grouped = CategoryResponseDto::group(vec![empty], vec![]);
        assert_eq!(grouped.len(), 1);
        assert!(grouped[0].subcategories.is_empty());
    }
}
