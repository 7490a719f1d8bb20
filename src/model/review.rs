use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewerDto {
    pub id: i32,
    pub name: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: i32,
    pub user_id: i32,
    pub destination_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<ReviewerDto>,
    pub rating: i32,
    pub title: Option<String>,
    pub comment: String,
    pub images: Vec<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewEnvelopeDto {
    pub review: ReviewDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewsDto {
    pub reviews: Vec<ReviewDto>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewDto {
    #[validate(required(message = "Destination is required"))]
    pub destination_id: Option<i32>,
    #[validate(
        required(message = "Rating must be between 1 and 5"),
        range(min = 1, max = 5, message = "Rating must be between 1 and 5")
    )]
    pub rating: Option<i32>,
    #[serde(default)]
    #[validate(length(min = 5, message = "Comment must be at least 5 characters"))]
    pub comment: String,
    pub title: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewDto {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i32>,
    #[validate(length(min = 5, message = "Comment must be at least 5 characters"))]
    pub comment: Option<String>,
    pub title: Option<String>,
    pub is_published: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublishReviewDto {
    pub is_published: bool,
}
