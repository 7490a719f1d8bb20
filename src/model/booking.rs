use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{BookingStatus, PaymentMethod, PaymentStatus};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{model::destination::DestinationDto, server::util::validation::validate_iso8601};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct GuestsDto {
    #[serde(default = "default_adults")]
    #[validate(range(min = 1, message = "At least one adult is required"))]
    pub adults: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "Children cannot be negative"))]
    pub children: i32,
}

fn default_adults() -> i32 {
    1
}

impl Default for GuestsDto {
    fn default() -> Self {
        Self {
            adults: 1,
            children: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ContactInfoDto {
    #[serde(default)]
    #[validate(email(message = "Contact email is required"))]
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    #[schema(value_type = String, example = "card")]
    pub method: PaymentMethod,
    #[schema(value_type = String, example = "pending")]
    pub status: PaymentStatus,
    pub transaction_id: Option<String>,
}

/// Booking owner as embedded in admin listings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingUserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    pub booking_code: String,
    pub user_id: i32,
    pub destination_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<BookingUserDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<DestinationDto>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub guests: GuestsDto,
    pub contact_info: ContactInfoDto,
    pub total_price: f64,
    #[schema(value_type = String, example = "pending")]
    pub status: BookingStatus,
    pub payment: PaymentDto,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingEnvelopeDto {
    pub booking: BookingDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingsDto {
    pub bookings: Vec<BookingDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SimulatedPaymentDto {
    pub booking: BookingDto,
    pub message: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    #[validate(required(message = "Destination is required"))]
    pub destination_id: Option<i32>,
    #[validate(
        required(message = "Start date is invalid"),
        custom(function = "validate_iso8601", message = "Start date is invalid")
    )]
    pub start_date: Option<String>,
    #[validate(
        required(message = "End date is invalid"),
        custom(function = "validate_iso8601", message = "End date is invalid")
    )]
    pub end_date: Option<String>,
    #[validate(
        required(message = "Total price must be valid"),
        range(min = 0.0, message = "Total price must be valid")
    )]
    pub total_price: Option<f64>,
    #[serde(default)]
    #[validate(nested)]
    pub contact_info: ContactInfoDto,
    #[validate(nested)]
    pub guests: Option<GuestsDto>,
    #[schema(value_type = Option<String>)]
    pub payment_method: Option<PaymentMethod>,
    pub notes: Option<String>,
}

/// Admin overwrite of booking fields. No transition rules are applied.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingStatusDto {
    #[schema(value_type = Option<String>)]
    pub status: Option<BookingStatus>,
    #[schema(value_type = Option<String>)]
    pub payment_status: Option<PaymentStatus>,
    pub transaction_id: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookingStatusQueryDto {
    /// Only return bookings in this status
    #[param(value_type = Option<String>)]
    pub status: Option<BookingStatus>,
}
