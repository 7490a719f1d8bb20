use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Destination::Table)
                    .if_not_exists()
                    .col(pk_auto(Destination::Id))
                    .col(string(Destination::Name))
                    .col(string_uniq(Destination::Slug))
                    .col(text(Destination::Description))
                    .col(string(Destination::Category).default("adventure"))
                    .col(double(Destination::Price))
                    .col(integer(Destination::DurationDays))
                    .col(double(Destination::RatingAverage).default(0.0))
                    .col(integer(Destination::RatingCount).default(0))
                    .col(json(Destination::Images))
                    .col(string(Destination::City))
                    .col(string(Destination::Country))
                    .col(json(Destination::Highlights))
                    .col(json(Destination::Includes))
                    .col(json(Destination::Excludes))
                    .col(boolean(Destination::Featured).default(false))
                    .col(string_null(Destination::BestSeason))
                    .col(json(Destination::Tags))
                    .col(integer_null(Destination::CreatedBy))
                    .col(boolean(Destination::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Destination::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Destination::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_destination_active_featured")
                    .table(Destination::Table)
                    .col(Destination::IsActive)
                    .col(Destination::Featured)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Destination::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Destination {
    Table,
    Id,
    Name,
    Slug,
    Description,
    Category,
    Price,
    DurationDays,
    RatingAverage,
    RatingCount,
    Images,
    City,
    Country,
    Highlights,
    Includes,
    Excludes,
    Featured,
    BestSeason,
    Tags,
    CreatedBy,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
