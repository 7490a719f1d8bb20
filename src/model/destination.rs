use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::DestinationCategory;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct LocationDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    #[schema(value_type = String, example = "adventure")]
    pub category: DestinationCategory,
    pub price: f64,
    pub duration_days: i32,
    pub rating_average: f64,
    pub rating_count: i32,
    pub images: Vec<String>,
    pub location: LocationDto,
    pub highlights: Vec<String>,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    pub featured: bool,
    pub best_season: Option<String>,
    pub tags: Vec<String>,
    pub created_by: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DestinationEnvelopeDto {
    pub destination: DestinationDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DestinationsDto {
    pub destinations: Vec<DestinationDto>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginationDto {
    pub total: u64,
    pub page: u64,
    pub pages: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedDestinationsDto {
    pub destinations: Vec<DestinationDto>,
    pub pagination: PaginationDto,
}

/// Query string accepted by the public destination listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DestinationQueryDto {
    /// Exact category match
    #[param(value_type = Option<String>)]
    pub category: Option<DestinationCategory>,
    /// Case-insensitive substring of the city
    pub destination: Option<String>,
    pub country: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
    pub max_duration: Option<i32>,
    /// Case-insensitive substring over name, description, category, city and country
    pub search: Option<String>,
    /// Comma separated, matches destinations carrying any of the tags
    pub tags: Option<String>,
    /// Page size (default 12, at most 100)
    pub limit: Option<u64>,
    /// 1-based page number (default 1)
    pub page: Option<u64>,
    /// Sort key, `-` prefix for descending (default `-createdAt`)
    pub sort: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeaturedQueryDto {
    /// Number of destinations (default 6, at most 100)
    pub limit: Option<u64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDestinationDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[schema(value_type = Option<String>)]
    pub category: Option<DestinationCategory>,
    #[validate(
        required(message = "Price must be a valid number"),
        range(min = 0.0, message = "Price must be a valid number")
    )]
    pub price: Option<f64>,
    #[validate(
        required(message = "Duration must be at least 1 day"),
        range(min = 1, message = "Duration must be at least 1 day")
    )]
    pub duration_days: Option<i32>,
    #[serde(default)]
    #[validate(nested)]
    pub location: LocationDto,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub excludes: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    pub best_season: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateLocationDto {
    #[validate(length(min = 1, message = "City is required when provided"))]
    pub city: Option<String>,
    #[validate(length(min = 1, message = "Country is required when provided"))]
    pub country: Option<String>,
}

/// Partial update, absent fields are left untouched.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDestinationDto {
    #[validate(length(min = 1, message = "Name is required when provided"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>)]
    pub category: Option<DestinationCategory>,
    #[validate(range(min = 0.0, message = "Price must be valid"))]
    pub price: Option<f64>,
    #[validate(range(min = 1, message = "Duration must be valid"))]
    pub duration_days: Option<i32>,
    #[validate(nested)]
    pub location: Option<UpdateLocationDto>,
    pub images: Option<Vec<String>>,
    pub highlights: Option<Vec<String>>,
    pub includes: Option<Vec<String>>,
    pub excludes: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub best_season: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_active: Option<bool>,
}
