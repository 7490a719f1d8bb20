pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_user_table;
mod m20250901_000002_create_destination_table;
mod m20250901_000003_create_booking_table;
mod m20250901_000004_create_review_table;
mod m20250901_000005_create_subscriber_table;
mod m20250901_000006_create_newsletter_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_user_table::Migration),
            Box::new(m20250901_000002_create_destination_table::Migration),
            Box::new(m20250901_000003_create_booking_table::Migration),
            Box::new(m20250901_000004_create_review_table::Migration),
            Box::new(m20250901_000005_create_subscriber_table::Migration),
            Box::new(m20250901_000006_create_newsletter_notification_table::Migration),
        ]
    }
}
