//! Admin dashboard summary.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        booking::BookingRepository, destination::DestinationRepository,
        review::ReviewRepository, user::UserRepository,
    },
    error::AppError,
    model::admin::AdminSummary,
};

/// Bookings shown in the dashboard's recent list.
const RECENT_BOOKINGS: u64 = 5;
/// Destinations shown in the dashboard's top-rated list.
const TOP_DESTINATIONS: u64 = 5;

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Collects counts, booking totals by status, recent bookings and top destinations.
    ///
    /// Each figure is read with its own query; the summary is not a consistent snapshot.
    pub async fn summary(&self) -> Result<AdminSummary, AppError> {
        let booking_repo = BookingRepository::new(self.db);
        let destination_repo = DestinationRepository::new(self.db);

        let recent = booking_repo.get_recent(RECENT_BOOKINGS).await?;

        Ok(AdminSummary {
            users_count: UserRepository::new(self.db).count().await?,
            destinations_count: destination_repo.count().await?,
            reviews_count: ReviewRepository::new(self.db).count().await?,
            booking_totals: booking_repo.status_totals().await?,
            recent_bookings: booking_repo.with_relations(recent, true).await?,
            top_destinations: destination_repo.get_top_rated(TOP_DESTINATIONS).await?,
        })
    }
}
