//! Review domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::review::{CreateReviewDto, ReviewDto, ReviewerDto, UpdateReviewDto},
    server::{model::user::User, util::parse::json_strings},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub destination_id: i32,
    /// Integer from 1 to 5.
    pub rating: i32,
    pub title: Option<String>,
    pub comment: String,
    pub images: Vec<String>,
    /// Only published reviews are listed and counted in the destination rating.
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            destination_id: entity.destination_id,
            rating: entity.rating,
            title: entity.title,
            comment: entity.comment,
            images: json_strings(entity.images),
            is_published: entity.is_published,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        self.into_dto_with_author(None)
    }

    /// Converts to a DTO embedding the reviewer's public profile.
    pub fn into_dto_with_author(self, author: Option<User>) -> ReviewDto {
        ReviewDto {
            id: self.id,
            user_id: self.user_id,
            destination_id: self.destination_id,
            user: author.map(|u| ReviewerDto {
                id: u.id,
                name: u.name,
                avatar_url: u.avatar_url,
            }),
            rating: self.rating,
            title: self.title,
            comment: self.comment,
            images: self.images,
            is_published: self.is_published,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub user_id: i32,
    pub destination_id: i32,
    pub rating: i32,
    pub title: Option<String>,
    pub comment: String,
    pub images: Vec<String>,
}

impl CreateReviewParams {
    /// Converts a validated DTO. `destination_id` and `rating` are required by validation.
    pub fn from_dto(user_id: i32, dto: CreateReviewDto) -> Self {
        Self {
            user_id,
            destination_id: dto.destination_id.unwrap_or_default(),
            rating: dto.rating.unwrap_or_default(),
            title: dto.title,
            comment: dto.comment,
            images: dto.images,
        }
    }
}

/// Partial update, `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateReviewParams {
    pub rating: Option<i32>,
    pub comment: Option<String>,
    pub title: Option<String>,
    pub is_published: Option<bool>,
}

impl UpdateReviewParams {
    pub fn from_dto(dto: UpdateReviewDto) -> Self {
        Self {
            rating: dto.rating,
            comment: dto.comment,
            title: dto.title,
            is_published: dto.is_published,
        }
    }

    pub fn publish(is_published: bool) -> Self {
        Self {
            is_published: Some(is_published),
            ..Default::default()
        }
    }
}

/// Recomputed denormalized rating of a destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    pub average: f64,
    pub count: i32,
}

impl RatingSummary {
    /// Builds a summary from a raw mean, rounding to one decimal place.
    ///
    /// No ratings yields zero for both values.
    pub fn from_mean(mean: Option<f64>, count: i64) -> Self {
        match mean {
            Some(mean) if count > 0 => Self {
                average: round_one_decimal(mean),
                count: count as i32,
            },
            _ => Self {
                average: 0.0,
                count: 0,
            },
        }
    }
}

/// Rounds half away from zero to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
