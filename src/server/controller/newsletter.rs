use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        newsletter::{
            CreateNotificationDto, NotificationEnvelopeDto, NotificationsDto, SubscribeDto,
            SubscribeResponseDto, SubscribersDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::newsletter::{CreateNotificationParams, SubscribeOutcome},
        service::newsletter::NewsletterService,
        state::AppState,
        util::extract::{Json},
    },
};

/// Tag for grouping newsletter endpoints in OpenAPI documentation
pub static NEWSLETTER_TAG: &str = "newsletter";

/// Subscribe an email to updates.
///
/// Subscribing an address twice is not an error.
///
/// # Returns
/// - `201 Created` - New subscriber
/// - `200 OK` - Address was already subscribed
/// - `400 Bad Request` - Invalid email
#[utoipa::path(
    post,
    path = "/api/newsletter/subscribe",
    tag = NEWSLETTER_TAG,
    request_body = SubscribeDto,
    responses(
        (status = 201, description = "Subscribed", body = SubscribeResponseDto),
        (status = 200, description = "Already subscribed", body = SubscribeResponseDto),
        (status = 400, description = "Invalid email", body = ErrorDto)
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    Json(payload): Json<SubscribeDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let outcome = NewsletterService::new(&state.db)
        .subscribe(&payload.email, payload.source)
        .await?;

    let response = match outcome {
        SubscribeOutcome::Created(subscriber) => (
            StatusCode::CREATED,
            Json(SubscribeResponseDto {
                message: "Welcome to TripNest Studio updates!".to_string(),
                subscriber: Some(subscriber.into_dto()),
            }),
        ),
        SubscribeOutcome::AlreadySubscribed => (
            StatusCode::OK,
            Json(SubscribeResponseDto {
                message: "You are already subscribed. Stay tuned!".to_string(),
                subscriber: None,
            }),
        ),
    };

    Ok(response)
}

/// List subscribers, newest first.
///
/// # Access Control
/// - `Admin` - Only admins can see subscribers
#[utoipa::path(
    get,
    path = "/api/newsletter/subscribers",
    tag = NEWSLETTER_TAG,
    responses(
        (status = 200, description = "All subscribers", body = SubscribersDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_subscribers(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let subscribers = NewsletterService::new(&state.db).subscribers().await?;

    Ok((
        StatusCode::OK,
        Json(SubscribersDto {
            subscribers: subscribers.into_iter().map(|s| s.into_dto()).collect(),
        }),
    ))
}

/// List scheduled notifications, newest first.
///
/// # Access Control
/// - `Admin` - Only admins can manage notifications
#[utoipa::path(
    get,
    path = "/api/newsletter/notifications",
    tag = NEWSLETTER_TAG,
    responses(
        (status = 200, description = "All notifications", body = NotificationsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let notifications = NewsletterService::new(&state.db).notifications().await?;

    Ok((
        StatusCode::OK,
        Json(NotificationsDto {
            notifications: notifications.into_iter().map(|n| n.into_dto()).collect(),
        }),
    ))
}

/// Schedule a notification. It is stored with status `scheduled` and never sent.
///
/// # Access Control
/// - `Admin` - Only admins can manage notifications
#[utoipa::path(
    post,
    path = "/api/newsletter/notifications",
    tag = NEWSLETTER_TAG,
    request_body = CreateNotificationDto,
    responses(
        (status = 201, description = "Notification scheduled", body = NotificationEnvelopeDto),
        (status = 400, description = "Invalid notification data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn create_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let notification = NewsletterService::new(&state.db)
        .create_notification(CreateNotificationParams::from_dto(payload)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(NotificationEnvelopeDto {
            notification: notification.into_dto(),
        }),
    ))
}
