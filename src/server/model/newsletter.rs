//! Newsletter subscriber and notification models.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::NotificationStatus;

use crate::{
    model::newsletter::{CreateNotificationDto, NotificationDto, SubscriberDto},
    server::{error::AppError, util::parse::parse_datetime_or},
};

pub const DEFAULT_SUBSCRIBER_SOURCE: &str = "footer";

#[derive(Debug, Clone, PartialEq)]
pub struct Subscriber {
    pub id: i32,
    pub email: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

impl Subscriber {
    pub fn from_entity(entity: entity::subscriber::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            source: entity.source,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> SubscriberDto {
        SubscriberDto {
            id: self.id,
            email: self.email,
            source: self.source,
            created_at: self.created_at,
        }
    }
}

/// Result of a subscribe request.
#[derive(Debug, Clone, PartialEq)]
pub enum SubscribeOutcome {
    Created(Subscriber),
    AlreadySubscribed,
}

/// Scheduled announcement record. Nothing delivers it; it is only stored and listed.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub title: String,
    pub message: String,
    pub scheduled_for: DateTime<Utc>,
    pub status: NotificationStatus,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::newsletter_notification::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            message: entity.message,
            scheduled_for: entity.scheduled_for,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            title: self.title,
            message: self.message,
            scheduled_for: self.scheduled_for,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub title: String,
    pub message: String,
    pub scheduled_for: DateTime<Utc>,
}

impl CreateNotificationParams {
    pub fn from_dto(dto: CreateNotificationDto) -> Result<Self, AppError> {
        Ok(Self {
            title: dto.title.trim().to_string(),
            message: dto.message.trim().to_string(),
            scheduled_for: parse_datetime_or(
                dto.scheduled_for.as_deref().unwrap_or_default(),
                "Scheduled date must be valid",
            )?,
        })
    }
}
