//! Booking service: code generation, creation, listings and admin status changes.

use chrono::Utc;
use entity::sea_orm_active_enums::{BookingStatus, PaymentStatus};
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, destination::DestinationRepository},
    error::{internal::InternalError, AppError},
    model::booking::{
        Booking, BookingWithRelations, CreateBookingParams, UpdateBookingStatusParams,
    },
};

/// Attempts at finding an unused booking code before giving up.
const MAX_CODE_ATTEMPTS: u32 = 10;

/// Builds a booking code such as `TN-K3ZQ4821`.
///
/// Four random uppercase base-36 characters followed by the last four digits of the
/// current unix time in milliseconds. Uniqueness is checked by the caller.
pub fn generate_booking_code() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    const RANDOM_LENGTH: usize = 4;

    let mut rng = rand::rng();
    let random: String = (0..RANDOM_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();

    let millis = Utc::now().timestamp_millis().unsigned_abs();

    format!("TN-{}{:04}", random, millis % 10_000)
}

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending booking for an existing destination.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking with a fresh unique code
    /// - `Err(AppError::NotFound)` - Destination does not exist
    /// - `Err(InternalError::BookingCodeExhausted)` - No free code found
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, AppError> {
        self.create_with_codes(params, generate_booking_code).await
    }

    /// Creates a booking drawing candidate codes from `generate`.
    pub(super) async fn create_with_codes(
        &self,
        params: CreateBookingParams,
        generate: impl FnMut() -> String,
    ) -> Result<Booking, AppError> {
        let destination_repo = DestinationRepository::new(self.db);
        let booking_repo = BookingRepository::new(self.db);

        if destination_repo
            .find_by_id(params.destination_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Destination not found".to_string()));
        }

        let code = unused_code(&booking_repo, generate).await?;
        let booking = booking_repo.create(params, code).await?;

        tracing::info!(
            "Created booking {} ({}) for user {}",
            booking.id,
            booking.booking_code,
            booking.user_id
        );

        Ok(booking)
    }

    /// Gets a user's bookings, newest first, with destinations attached.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<BookingWithRelations>, AppError> {
        let repo = BookingRepository::new(self.db);

        let bookings = repo.get_by_user(user_id).await?;

        Ok(repo.with_relations(bookings, false).await?)
    }

    /// Gets every booking, newest first, with user and destination attached.
    pub async fn get_all(
        &self,
        status: Option<BookingStatus>,
    ) -> Result<Vec<BookingWithRelations>, AppError> {
        let repo = BookingRepository::new(self.db);

        let bookings = repo.get_all(status).await?;

        Ok(repo.with_relations(bookings, true).await?)
    }

    /// Overwrites status fields without checking transitions.
    pub async fn update_status(
        &self,
        params: UpdateBookingStatusParams,
    ) -> Result<Booking, AppError> {
        let repo = BookingRepository::new(self.db);

        repo.update_status(params).await?.ok_or_else(not_found)
    }

    /// Marks a booking paid and confirmed with a `SIM-<millis>` transaction ID.
    ///
    /// Applies regardless of the current status, including cancelled bookings.
    pub async fn simulate_payment(&self, id: i32) -> Result<Booking, AppError> {
        let repo = BookingRepository::new(self.db);

        let booking = repo
            .update_status(UpdateBookingStatusParams {
                id,
                status: Some(BookingStatus::Confirmed),
                payment_status: Some(PaymentStatus::Paid),
                transaction_id: Some(format!("SIM-{}", Utc::now().timestamp_millis())),
            })
            .await?
            .ok_or_else(not_found)?;

        tracing::info!("Simulated payment for booking {}", booking.id);

        Ok(booking)
    }

}

/// Draws codes until one is unused, giving up after `MAX_CODE_ATTEMPTS`.
async fn unused_code(
    repo: &BookingRepository<'_>,
    mut generate: impl FnMut() -> String,
) -> Result<String, AppError> {
    for _ in 0..MAX_CODE_ATTEMPTS {
        let code = generate();
        if !repo.code_exists(&code).await? {
            return Ok(code);
        }
        tracing::debug!("Booking code {} already used, regenerating", code);
    }

    Err(InternalError::BookingCodeExhausted {
        attempts: MAX_CODE_ATTEMPTS,
    }
    .into())
}

fn not_found() -> AppError {
    AppError::NotFound("Booking not found".to_string())
}
