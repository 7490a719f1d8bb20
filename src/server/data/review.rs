//! Review data repository, including the rating aggregate over published reviews.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, ExprTrait, FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    review::{CreateReviewParams, RatingSummary, Review, UpdateReviewParams},
    user::User,
};

#[derive(Debug, FromQueryResult)]
struct RatingRow {
    average: Option<f64>,
    count: i64,
}

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a published review.
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review
    /// - `Err(DbErr)` - Database error, including a unique violation on
    ///   (destination, user)
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, DbErr> {
        let now = Utc::now();
        let entity = entity::review::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            destination_id: ActiveValue::Set(params.destination_id),
            rating: ActiveValue::Set(params.rating),
            title: ActiveValue::Set(params.title),
            comment: ActiveValue::Set(params.comment),
            images: ActiveValue::Set(serde_json::json!(params.images)),
            is_published: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Review>, DbErr> {
        let entity = entity::prelude::Review::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Review::from_entity))
    }

    /// Finds the review a user left on a destination, if any.
    pub async fn find_by_user_and_destination(
        &self,
        user_id: i32,
        destination_id: i32,
    ) -> Result<Option<Review>, DbErr> {
        let entity = entity::prelude::Review::find()
            .filter(entity::review::Column::UserId.eq(user_id))
            .filter(entity::review::Column::DestinationId.eq(destination_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Review::from_entity))
    }

    /// Gets a destination's published reviews with their authors, newest first.
    ///
    /// Authors are fetched in a single query; a deleted author yields `None`.
    pub async fn get_published_by_destination(
        &self,
        destination_id: i32,
    ) -> Result<Vec<(Review, Option<User>)>, DbErr> {
        let reviews: Vec<Review> = entity::prelude::Review::find()
            .filter(entity::review::Column::DestinationId.eq(destination_id))
            .filter(entity::review::Column::IsPublished.eq(true))
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Review::from_entity)
            .collect();

        let user_ids: Vec<i32> = reviews.iter().map(|r| r.user_id).collect();
        let users: HashMap<i32, User> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, User::from_entity(u)))
            .collect();

        Ok(reviews
            .into_iter()
            .map(|review| {
                let author = users.get(&review.user_id).cloned();
                (review, author)
            })
            .collect())
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Review))` - The updated review
    /// - `Ok(None)` - No review with that ID
    pub async fn update(
        &self,
        id: i32,
        params: UpdateReviewParams,
    ) -> Result<Option<Review>, DbErr> {
        let Some(review) = entity::prelude::Review::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::review::ActiveModel = review.into();
        if let Some(rating) = params.rating {
            active_model.rating = ActiveValue::Set(rating);
        }
        if let Some(comment) = params.comment {
            active_model.comment = ActiveValue::Set(comment);
        }
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(Some(title));
        }
        if let Some(is_published) = params.is_published {
            active_model.is_published = ActiveValue::Set(is_published);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Review::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Computes the mean rating and count over a destination's published reviews.
    ///
    /// # Returns
    /// - `Ok(RatingSummary)` - Mean rounded to one decimal, or zeros with no reviews
    /// - `Err(DbErr)` - Database error during aggregate query
    pub async fn rating_summary(&self, destination_id: i32) -> Result<RatingSummary, DbErr> {
        let row = entity::prelude::Review::find()
            .select_only()
            .column_as(Expr::col(entity::review::Column::Rating).avg(), "average")
            .column_as(Expr::col(entity::review::Column::Id).count(), "count")
            .filter(entity::review::Column::DestinationId.eq(destination_id))
            .filter(entity::review::Column::IsPublished.eq(true))
            .into_model::<RatingRow>()
            .one(self.db)
            .await?;

        Ok(match row {
            Some(row) => RatingSummary::from_mean(row.average, row.count),
            None => RatingSummary::from_mean(None, 0),
        })
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Review::find().count(self.db).await
    }
}
