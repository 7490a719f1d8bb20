//! Newsletter subscriptions and scheduled notification records.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{notification::NotificationRepository, subscriber::SubscriberRepository},
    error::AppError,
    model::{
        newsletter::{
            CreateNotificationParams, Notification, SubscribeOutcome, Subscriber,
            DEFAULT_SUBSCRIBER_SOURCE,
        },
        user::normalize_email,
    },
};

pub struct NewsletterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsletterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Subscribes an email, reporting an existing subscription instead of failing.
    pub async fn subscribe(
        &self,
        email: &str,
        source: Option<String>,
    ) -> Result<SubscribeOutcome, AppError> {
        let repo = SubscriberRepository::new(self.db);
        let email = normalize_email(email);

        if repo.find_by_email(&email).await?.is_some() {
            return Ok(SubscribeOutcome::AlreadySubscribed);
        }

        let source = source
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SUBSCRIBER_SOURCE.to_string());

        let subscriber = repo.create(email, source).await?;

        Ok(SubscribeOutcome::Created(subscriber))
    }

    pub async fn subscribers(&self) -> Result<Vec<Subscriber>, AppError> {
        Ok(SubscriberRepository::new(self.db).get_all().await?)
    }

    pub async fn create_notification(
        &self,
        params: CreateNotificationParams,
    ) -> Result<Notification, AppError> {
        let notification = NotificationRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Scheduled notification {} for {}",
            notification.id,
            notification.scheduled_for
        );

        Ok(notification)
    }

    pub async fn notifications(&self) -> Result<Vec<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db).get_all().await?)
    }
}
