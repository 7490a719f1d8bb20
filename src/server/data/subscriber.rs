//! Newsletter subscriber repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::newsletter::Subscriber;

pub struct SubscriberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a subscriber. The email must already be normalized.
    pub async fn create(&self, email: String, source: String) -> Result<Subscriber, DbErr> {
        let now = Utc::now();
        let entity = entity::subscriber::ActiveModel {
            email: ActiveValue::Set(email),
            source: ActiveValue::Set(source),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Subscriber::from_entity(entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Subscriber>, DbErr> {
        let entity = entity::prelude::Subscriber::find()
            .filter(entity::subscriber::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Subscriber::from_entity))
    }

    /// Gets all subscribers, newest first.
    pub async fn get_all(&self) -> Result<Vec<Subscriber>, DbErr> {
        let entities = entity::prelude::Subscriber::find()
            .order_by_desc(entity::subscriber::Column::CreatedAt)
            .order_by_desc(entity::subscriber::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Subscriber::from_entity).collect())
    }
}
