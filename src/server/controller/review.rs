use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        review::{
            CreateReviewDto, PublishReviewDto, ReviewEnvelopeDto, ReviewsDto, UpdateReviewDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::review::{CreateReviewParams, UpdateReviewParams},
        service::review::ReviewService,
        state::AppState,
        util::extract::{Json, Path},
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "reviews";

/// Published reviews of a destination with their authors, newest first.
#[utoipa::path(
    get,
    path = "/api/reviews/destination/{destination_id}",
    tag = REVIEW_TAG,
    params(
        ("destination_id" = i32, Path, description = "Destination ID")
    ),
    responses(
        (status = 200, description = "Published reviews", body = ReviewsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_destination_reviews(
    State(state): State<AppState>,
    Path(destination_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db)
        .get_for_destination(destination_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ReviewsDto {
            reviews: reviews
                .into_iter()
                .map(|(review, author)| review.into_dto_with_author(author))
                .collect(),
        }),
    ))
}

/// Review a destination.
///
/// One review per user and destination. The destination's rating is recomputed.
///
/// # Returns
/// - `201 Created` - The new review
/// - `400 Bad Request` - Invalid fields or destination already reviewed
/// - `404 Not Found` - Destination does not exist
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ReviewEnvelopeDto),
        (status = 400, description = "Invalid review or duplicate", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Destination not found", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    payload.validate()?;

    let review = ReviewService::new(&state.db)
        .create(CreateReviewParams::from_dto(user.id, payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ReviewEnvelopeDto {
            review: review.into_dto(),
        }),
    ))
}

/// Update one of the caller's reviews.
///
/// # Access Control
/// - Author only
#[utoipa::path(
    put,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    request_body = UpdateReviewDto,
    responses(
        (status = 200, description = "Review updated", body = ReviewEnvelopeDto),
        (status = 400, description = "Invalid review data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto)
    ),
)]
pub async fn update_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    payload.validate()?;

    let review = ReviewService::new(&state.db)
        .update(&user, id, UpdateReviewParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ReviewEnvelopeDto {
            review: review.into_dto(),
        }),
    ))
}

/// Delete a review.
///
/// # Access Control
/// - Author, or any admin
#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Review removed", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Neither author nor admin", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    ReviewService::new(&state.db).delete(&user, id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Review removed".to_string(),
        }),
    ))
}

/// Publish or hide a review.
///
/// # Access Control
/// - `Admin` - Moderation is admin only
#[utoipa::path(
    patch,
    path = "/api/reviews/{id}/publish",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    request_body = PublishReviewDto,
    responses(
        (status = 200, description = "Review updated", body = ReviewEnvelopeDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto)
    ),
)]
pub async fn publish_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<PublishReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let review = ReviewService::new(&state.db)
        .publish(id, payload.is_published)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ReviewEnvelopeDto {
            review: review.into_dto(),
        }),
    ))
}
