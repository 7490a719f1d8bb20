//! Newsletter notification repository.
//!
//! Notifications are stored with status `scheduled` and only listed back; nothing sends them.

use chrono::Utc;
use entity::sea_orm_active_enums::NotificationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::newsletter::{CreateNotificationParams, Notification};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, DbErr> {
        let now = Utc::now();
        let entity = entity::newsletter_notification::ActiveModel {
            title: ActiveValue::Set(params.title),
            message: ActiveValue::Set(params.message),
            scheduled_for: ActiveValue::Set(params.scheduled_for),
            status: ActiveValue::Set(NotificationStatus::Scheduled),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Gets all notifications, newest first.
    pub async fn get_all(&self) -> Result<Vec<Notification>, DbErr> {
        let entities = entity::prelude::NewsletterNotification::find()
            .order_by_desc(entity::newsletter_notification::Column::CreatedAt)
            .order_by_desc(entity::newsletter_notification::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Notification::from_entity).collect())
    }
}
