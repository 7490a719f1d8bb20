//! Subscriber factory for newsletter tests.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a subscriber with the given email, source `footer`, created at `created_at`.
pub async fn create_subscriber(
    db: &DatabaseConnection,
    email: impl Into<String>,
    created_at: DateTime<Utc>,
) -> Result<entity::subscriber::Model, DbErr> {
    entity::subscriber::ActiveModel {
        email: ActiveValue::Set(email.into()),
        source: ActiveValue::Set("footer".to_string()),
        created_at: ActiveValue::Set(created_at),
        updated_at: ActiveValue::Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
