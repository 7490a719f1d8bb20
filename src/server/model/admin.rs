//! Dashboard summary model.

use std::collections::BTreeMap;

use entity::sea_orm_active_enums::BookingStatus;

use crate::{
    model::admin::{AdminSummaryDto, BookingsSummaryDto, RecentBookingDto},
    server::model::{booking::BookingWithRelations, destination::Destination},
};

/// Booking count and revenue for one status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusTotals {
    pub status: BookingStatus,
    pub count: u64,
    pub revenue: f64,
}

pub fn status_name(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "pending",
        BookingStatus::Confirmed => "confirmed",
        BookingStatus::Cancelled => "cancelled",
        BookingStatus::Completed => "completed",
    }
}

/// Counts and aggregates shown on the admin dashboard.
#[derive(Debug, Clone)]
pub struct AdminSummary {
    pub users_count: u64,
    pub destinations_count: u64,
    pub reviews_count: u64,
    pub booking_totals: Vec<StatusTotals>,
    pub recent_bookings: Vec<BookingWithRelations>,
    pub top_destinations: Vec<Destination>,
}

impl AdminSummary {
    pub fn bookings_count(&self) -> u64 {
        self.booking_totals.iter().map(|t| t.count).sum()
    }

    /// Sum of `total_price` over all bookings regardless of status or payment.
    pub fn revenue(&self) -> f64 {
        self.booking_totals.iter().map(|t| t.revenue).sum()
    }

    pub fn into_dto(self) -> AdminSummaryDto {
        let by_status: BTreeMap<String, u64> = self
            .booking_totals
            .iter()
            .map(|t| (status_name(t.status).to_string(), t.count))
            .collect();

        let bookings_summary = BookingsSummaryDto {
            count: self.bookings_count(),
            revenue: self.revenue(),
            by_status,
        };

        AdminSummaryDto {
            users_count: self.users_count,
            destinations_count: self.destinations_count,
            reviews_count: self.reviews_count,
            bookings_summary,
            recent_bookings: self
                .recent_bookings
                .into_iter()
                .map(|r| RecentBookingDto {
                    id: r.booking.id,
                    booking_code: r.booking.booking_code,
                    user_name: r.user.as_ref().map(|u| u.name.clone()),
                    user_email: r.user.map(|u| u.email),
                    destination_name: r.destination.map(|d| d.name),
                    total_price: r.booking.total_price,
                    status: status_name(r.booking.status).to_string(),
                    created_at: r.booking.created_at,
                })
                .collect(),
            top_destinations: self
                .top_destinations
                .into_iter()
                .map(Destination::into_dto)
                .collect(),
        }
    }
}
