use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::locations::models::LocationWithNames;
use crate::shared::validation::{validate_image_urls, CONTACT_REGEX};

/// Response DTO for location, with resolved category names and the ordered
/// image URL list
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocationResponseDto {
    pub id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category_id: Option<Uuid>,
    pub subcategory_id: Option<Uuid>,
    pub category_name: Option<String>,
    pub subcategory_name: Option<String>,
    pub condition: Option<String>,
    pub address: Option<String>,
    pub dusun: Option<String>,
    pub contact: Option<String>,
    pub description: Option<String>,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LocationResponseDto {
    pub fn from_row(row: LocationWithNames, images: Vec<String>) -> Self {
        Self {
            id: row.id,
            name: row.name,
            latitude: row.latitude,
            longitude: row.longitude,
            category_id: row.category_id,
            subcategory_id: row.subcategory_id,
            category_name: row.category_name,
            subcategory_name: row.subcategory_name,
            condition: row.condition,
            address: row.address,
            dusun: row.dusun,
            contact: row.contact,
            description: row.description,
            images,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Request DTO for creating a location.
///
/// Coordinates arrive as form strings and are parsed before persistence; an
/// unparsable value is a validation error on this write path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateLocationDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    /// Latitude as submitted by the form, e.g. "-6.535"
    #[validate(length(min = 1, message = "Latitude is required"))]
    pub latitude: String,

    /// Longitude as submitted by the form, e.g. "110.74"
    #[validate(length(min = 1, message = "Longitude is required"))]
    pub longitude: String,

    pub category_id: Option<Uuid>,
    pub subcategory_id: Option<Uuid>,

    #[validate(length(max = 50, message = "Condition must not exceed 50 characters"))]
    pub condition: Option<String>,

    #[validate(length(max = 1000, message = "Address must not exceed 1000 characters"))]
    pub address: Option<String>,

    #[validate(length(max = 255, message = "Dusun must not exceed 255 characters"))]
    pub dusun: Option<String>,

    #[validate(regex(path = *CONTACT_REGEX, message = "Contact must be a valid mobile number"))]
    pub contact: Option<String>,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    #[validate(custom(function = validate_image_urls))]
    #[serde(default)]
    pub images: Vec<String>,
}

/// Request DTO for updating a location. The form resubmits the full entity;
/// the stored image set is replaced wholesale with `images`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateLocationDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "Latitude is required"))]
    pub latitude: String,

    #[validate(length(min = 1, message = "Longitude is required"))]
    pub longitude: String,

    pub category_id: Option<Uuid>,
    pub subcategory_id: Option<Uuid>,

    #[validate(length(max = 50, message = "Condition must not exceed 50 characters"))]
    pub condition: Option<String>,

    #[validate(length(max = 1000, message = "Address must not exceed 1000 characters"))]
    pub address: Option<String>,

    #[validate(length(max = 255, message = "Dusun must not exceed 255 characters"))]
    pub dusun: Option<String>,

    #[validate(regex(path = *CONTACT_REGEX, message = "Contact must be a valid mobile number"))]
    pub contact: Option<String>,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    #[validate(custom(function = validate_image_urls))]
    #[serde(default)]
    pub images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateLocationDto {
        CreateLocationDto {
            name: "Balai Desa".to_string(),
            latitude: "-6.535".to_string(),
            longitude: "110.74".to_string(),
            category_id: None,
            subcategory_id: None,
            condition: Some("Baik".to_string()),
            address: None,
            dusun: None,
            contact: Some("081234567890".to_string()),
            description: None,
            images: vec!["https://example.com/balai.jpg".to_string()],
        }
    }

    #[test]
    fn test_create_dto_valid() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn test_create_dto_rejects_bad_contact() {
        let dto = CreateLocationDto {
            contact: Some("call me".to_string()),
            ..valid_create()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_dto_rejects_bad_image_url() {
        let dto = CreateLocationDto {
            images: vec!["not-a-url".to_string()],
            ..valid_create()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_dto_requires_coordinates() {
        let dto = CreateLocationDto {
            latitude: String::new(),
            ..valid_create()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_dto_accepts_generated_names_and_addresses() {
        use fake::faker::address::en::StreetName;
        use fake::faker::company::en::CompanyName;
        use fake::Fake;

        for _ in 0..20 {
            let dto = CreateLocationDto {
                name: CompanyName().fake(),
                address: Some(StreetName().fake()),
                ..valid_create()
            };
            assert!(dto.validate().is_ok());
        }
    }
}
