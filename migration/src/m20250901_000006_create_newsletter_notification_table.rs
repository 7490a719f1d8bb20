use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsletterNotification::Table)
                    .if_not_exists()
                    .col(pk_auto(NewsletterNotification::Id))
                    .col(string(NewsletterNotification::Title))
                    .col(text(NewsletterNotification::Message))
                    .col(timestamp_with_time_zone(NewsletterNotification::ScheduledFor))
                    .col(string(NewsletterNotification::Status).default("scheduled"))
                    .col(
                        timestamp_with_time_zone(NewsletterNotification::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(NewsletterNotification::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NewsletterNotification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NewsletterNotification {
    Table,
    Id,
    Title,
    Message,
    ScheduledFor,
    Status,
    CreatedAt,
    UpdatedAt,
}
