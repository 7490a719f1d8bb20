use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(integer(Review::UserId))
                    .col(integer(Review::DestinationId))
                    .col(integer(Review::Rating))
                    .col(string_null(Review::Title))
                    .col(text(Review::Comment))
                    .col(json(Review::Images))
                    .col(boolean(Review::IsPublished).default(true))
                    .col(
                        timestamp_with_time_zone(Review::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Review::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // One review per user per destination
        manager
            .create_index(
                Index::create()
                    .name("idx_review_destination_user")
                    .table(Review::Table)
                    .col(Review::DestinationId)
                    .col(Review::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Review {
    Table,
    Id,
    UserId,
    DestinationId,
    Rating,
    Title,
    Comment,
    Images,
    IsPublished,
    CreatedAt,
    UpdatedAt,
}
