use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::NotificationStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::server::util::validation::validate_iso8601;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberDto {
    pub id: i32,
    pub email: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubscribeResponseDto {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber: Option<SubscriberDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubscribersDto {
    pub subscribers: Vec<SubscriberDto>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubscribeDto {
    #[serde(default)]
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
    /// Where the signup came from, defaults to `footer`
    pub source: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: i32,
    pub title: String,
    pub message: String,
    pub scheduled_for: DateTime<Utc>,
    #[schema(value_type = String, example = "scheduled")]
    pub status: NotificationStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotificationEnvelopeDto {
    pub notification: NotificationDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotificationsDto {
    pub notifications: Vec<NotificationDto>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationDto {
    #[serde(default)]
    #[validate(length(min = 4, message = "Title must be at least 4 characters"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
    #[validate(
        required(message = "Scheduled date must be valid"),
        custom(function = "validate_iso8601", message = "Scheduled date must be valid")
    )]
    pub scheduled_for: Option<String>,
}
