//! Review factory for creating test reviews.
//!
//! Factory reviews are inserted directly and do NOT update the destination's rating
//! aggregate. Use the review service when a test depends on the aggregate.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    destination_id: i32,
    rating: i32,
    comment: String,
    is_published: bool,
    created_at: DateTime<Utc>,
}

impl<'a> ReviewFactory<'a> {
    /// Defaults: a published 5-star review.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, destination_id: i32) -> Self {
        Self {
            db,
            user_id,
            destination_id,
            rating: 5,
            comment: "Wonderful trip".to_string(),
            is_published: true,
            created_at: Utc::now(),
        }
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            destination_id: ActiveValue::Set(self.destination_id),
            rating: ActiveValue::Set(self.rating),
            title: ActiveValue::Set(None),
            comment: ActiveValue::Set(self.comment),
            images: ActiveValue::Set(serde_json::json!([])),
            is_published: ActiveValue::Set(self.is_published),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a published review with the given rating.
pub async fn create_review(
    db: &DatabaseConnection,
    user_id: i32,
    destination_id: i32,
    rating: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, user_id, destination_id)
        .rating(rating)
        .build()
        .await
}
