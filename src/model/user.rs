use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::server::util::validation::validate_role;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[schema(value_type = String, example = "user")]
    pub role: UserRole,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Returned by register, login and profile update alongside the `token` cookie.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    pub token: String,
    pub user: UserDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub user: UserDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsersDto {
    pub users: Vec<UserDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoleUpdatedDto {
    pub message: String,
    pub user: UserDto,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(custom(function = "validate_role", message = "Role must be user or admin"))]
    pub role: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginDto {
    #[serde(default)]
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// When present the account must hold exactly this role.
    #[validate(custom(function = "validate_role", message = "Role must be user or admin"))]
    pub role: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    #[validate(email(message = "Valid email is required"))]
    pub email: Option<String>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
}

/// Role is kept as a raw string so an unknown value yields "Invalid role".
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRoleDto {
    #[serde(default)]
    pub role: String,
}
