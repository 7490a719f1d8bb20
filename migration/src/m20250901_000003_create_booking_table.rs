use sea_orm_migration::{prelude::*, schema::*};

/// Bookings reference users and destinations by id only. Destinations can be
/// deleted while bookings for them remain, so no foreign keys are declared.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::UserId))
                    .col(integer(Booking::DestinationId))
                    .col(string_uniq(Booking::BookingCode))
                    .col(timestamp_with_time_zone(Booking::StartDate))
                    .col(timestamp_with_time_zone(Booking::EndDate))
                    .col(integer(Booking::GuestsAdults).default(1))
                    .col(integer(Booking::GuestsChildren).default(0))
                    .col(string(Booking::ContactEmail))
                    .col(string_null(Booking::ContactPhone))
                    .col(double(Booking::TotalPrice))
                    .col(string(Booking::Status).default("pending"))
                    .col(string(Booking::PaymentMethod).default("card"))
                    .col(string(Booking::PaymentStatus).default("pending"))
                    .col(string_null(Booking::TransactionId))
                    .col(text_null(Booking::Notes))
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Booking::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_user_id")
                    .table(Booking::Table)
                    .col(Booking::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    UserId,
    DestinationId,
    BookingCode,
    StartDate,
    EndDate,
    GuestsAdults,
    GuestsChildren,
    ContactEmail,
    ContactPhone,
    TotalPrice,
    Status,
    PaymentMethod,
    PaymentStatus,
    TransactionId,
    Notes,
    CreatedAt,
    UpdatedAt,
}
