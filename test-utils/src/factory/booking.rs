//! Booking factory for creating test bookings.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::{BookingStatus, PaymentMethod, PaymentStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings for an existing user and destination.
///
/// Defaults: a pending, unpaid card booking two weeks out for one adult, priced at 500.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    destination_id: i32,
    booking_code: String,
    total_price: f64,
    status: BookingStatus,
    payment_status: PaymentStatus,
    created_at: DateTime<Utc>,
}

impl<'a> BookingFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32, destination_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            destination_id,
            booking_code: format!("TN-TEST{:04}", id % 10_000),
            total_price: 500.0,
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn booking_code(mut self, code: impl Into<String>) -> Self {
        self.booking_code = code.into();
        self
    }

    pub fn total_price(mut self, total_price: f64) -> Self {
        self.total_price = total_price;
        self
    }

    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    pub fn payment_status(mut self, payment_status: PaymentStatus) -> Self {
        self.payment_status = payment_status;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let start = Utc::now() + Duration::days(14);
        entity::booking::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            destination_id: ActiveValue::Set(self.destination_id),
            booking_code: ActiveValue::Set(self.booking_code),
            start_date: ActiveValue::Set(start),
            end_date: ActiveValue::Set(start + Duration::days(5)),
            guests_adults: ActiveValue::Set(1),
            guests_children: ActiveValue::Set(0),
            contact_email: ActiveValue::Set("guest@example.com".to_string()),
            contact_phone: ActiveValue::Set(None),
            total_price: ActiveValue::Set(self.total_price),
            status: ActiveValue::Set(self.status),
            payment_method: ActiveValue::Set(PaymentMethod::Card),
            payment_status: ActiveValue::Set(self.payment_status),
            transaction_id: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a booking with default values.
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: i32,
    destination_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id, destination_id).build().await
}
