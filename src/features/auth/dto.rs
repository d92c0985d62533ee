use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Form-encoded login request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    pub username: String,
    pub password: String,
    /// Admin path originally requested, used as the redirect target
    pub from: Option<String>,
}
