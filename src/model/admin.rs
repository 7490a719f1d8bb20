use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::destination::DestinationDto;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingsSummaryDto {
    pub count: u64,
    pub revenue: f64,
    /// Booking count keyed by status, statuses with no bookings are omitted
    pub by_status: BTreeMap<String, u64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentBookingDto {
    pub id: i32,
    pub booking_code: String,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub destination_name: Option<String>,
    pub total_price: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminSummaryDto {
    pub users_count: u64,
    pub destinations_count: u64,
    pub reviews_count: u64,
    pub bookings_summary: BookingsSummaryDto,
    pub recent_bookings: Vec<RecentBookingDto>,
    pub top_destinations: Vec<DestinationDto>,
}
