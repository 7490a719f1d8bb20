//! Review service.
//!
//! Every change to a review recomputes its destination's rating from the published
//! reviews. The recompute runs as a separate write after the review change.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{destination::DestinationRepository, review::ReviewRepository},
    error::AppError,
    model::{
        review::{CreateReviewParams, Review, UpdateReviewParams},
        user::User,
    },
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a destination's published reviews with their authors, newest first.
    pub async fn get_for_destination(
        &self,
        destination_id: i32,
    ) -> Result<Vec<(Review, Option<User>)>, AppError> {
        let repo = ReviewRepository::new(self.db);

        Ok(repo.get_published_by_destination(destination_id).await?)
    }

    /// Creates a published review and refreshes the destination rating.
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review
    /// - `Err(AppError::NotFound)` - Destination does not exist
    /// - `Err(AppError::BadRequest)` - The user already reviewed this destination
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, AppError> {
        let destination_repo = DestinationRepository::new(self.db);
        let review_repo = ReviewRepository::new(self.db);

        if destination_repo
            .find_by_id(params.destination_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Destination not found".to_string()));
        }

        if review_repo
            .find_by_user_and_destination(params.user_id, params.destination_id)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(
                "You have already reviewed this destination".to_string(),
            ));
        }

        let review = review_repo.create(params).await?;
        self.recalculate_rating(review.destination_id).await?;

        Ok(review)
    }

    /// Updates a review on behalf of its author.
    ///
    /// # Returns
    /// - `Ok(Review)` - The updated review
    /// - `Err(AppError::NotFound)` - No review with that ID
    /// - `Err(AppError::Forbidden)` - Caller is not the author
    pub async fn update(
        &self,
        user: &User,
        id: i32,
        params: UpdateReviewParams,
    ) -> Result<Review, AppError> {
        let review = self.find(id).await?;

        if review.user_id != user.id {
            return Err(AppError::Forbidden(
                "You can only update your own review".to_string(),
            ));
        }

        self.apply(id, params).await
    }

    /// Sets the published flag on any review.
    pub async fn publish(&self, id: i32, is_published: bool) -> Result<Review, AppError> {
        self.find(id).await?;

        self.apply(id, UpdateReviewParams::publish(is_published))
            .await
    }

    /// Deletes a review. Admins may delete any review, others only their own.
    pub async fn delete(&self, user: &User, id: i32) -> Result<(), AppError> {
        let review = self.find(id).await?;

        if review.user_id != user.id && !user.is_admin() {
            return Err(AppError::Forbidden(
                "You can only delete your own review".to_string(),
            ));
        }

        ReviewRepository::new(self.db).delete(id).await?;
        self.recalculate_rating(review.destination_id).await?;

        Ok(())
    }

    /// Recomputes `rating_average` and `rating_count` from published reviews.
    ///
    /// Does nothing if the destination has been deleted.
    pub async fn recalculate_rating(&self, destination_id: i32) -> Result<(), AppError> {
        let summary = ReviewRepository::new(self.db)
            .rating_summary(destination_id)
            .await?;

        DestinationRepository::new(self.db)
            .set_rating(destination_id, summary)
            .await?;

        tracing::debug!(
            "Destination {} rating is now {} over {} reviews",
            destination_id,
            summary.average,
            summary.count
        );

        Ok(())
    }

    async fn find(&self, id: i32) -> Result<Review, AppError> {
        ReviewRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))
    }

    async fn apply(&self, id: i32, params: UpdateReviewParams) -> Result<Review, AppError> {
        let review = ReviewRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;

        self.recalculate_rating(review.destination_id).await?;

        Ok(review)
    }
}
