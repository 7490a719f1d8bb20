//! User domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;

use crate::model::user::{LoginDto, RegisterDto, UpdateProfileDto, UserDto};

/// Registered account.
///
/// Carries the stored password hash for credential checks; it is dropped when
/// converting to a DTO.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    /// Lowercase, trimmed email address.
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            avatar_url: self.avatar_url,
            phone: self.phone,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password,
            role: entity.role,
            avatar_url: entity.avatar_url,
            phone: entity.phone,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Normalizes an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Registration request after validation. The password is still plaintext.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

impl RegisterParam {
    /// Converts a validated DTO. A missing role registers a regular user.
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: normalize_email(&dto.email),
            password: dto.password,
            role: dto
                .role
                .as_deref()
                .and_then(parse_role)
                .unwrap_or(UserRole::User),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
    /// Role the caller expects the account to hold.
    pub role: Option<UserRole>,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: normalize_email(&dto.email),
            password: dto.password,
            role: dto.role.as_deref().and_then(parse_role),
        }
    }
}

/// Parameters for inserting a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// Profile fields the owner may change. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParam {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Plaintext, hashed by the service before storage.
    pub password: Option<String>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
}

impl UpdateProfileParam {
    pub fn from_dto(dto: UpdateProfileDto) -> Self {
        Self {
            name: dto.name.map(|n| n.trim().to_string()),
            email: dto.email.as_deref().map(normalize_email),
            password: dto.password,
            avatar_url: dto.avatar_url,
            phone: dto.phone,
        }
    }
}

/// Stored column changes for a profile update, produced by the service.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
}

/// Parses a role name, `None` for anything but `user` or `admin`.
pub fn parse_role(role: &str) -> Option<UserRole> {
    match role {
        "user" => Some(UserRole::User),
        "admin" => Some(UserRole::Admin),
        _ => None,
    }
}

/// Wire name of a role as used in messages.
pub fn role_name(role: UserRole) -> &'static str {
    match role {
        UserRole::User => "user",
        UserRole::Admin => "admin",
    }
}
