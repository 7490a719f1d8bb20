//! Booking domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{BookingStatus, PaymentMethod, PaymentStatus};

use crate::{
    model::booking::{
        BookingDto, BookingUserDto, ContactInfoDto, CreateBookingDto, GuestsDto, PaymentDto,
        UpdateBookingStatusDto,
    },
    server::{
        error::AppError,
        model::{destination::Destination, user::User},
        util::parse::parse_datetime_or,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub destination_id: i32,
    /// Human-readable identifier such as `TN-K3ZQ4821`.
    pub booking_code: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub guests_adults: i32,
    pub guests_children: i32,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub total_price: f64,
    pub status: BookingStatus,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub transaction_id: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            destination_id: entity.destination_id,
            booking_code: entity.booking_code,
            start_date: entity.start_date,
            end_date: entity.end_date,
            guests_adults: entity.guests_adults,
            guests_children: entity.guests_children,
            contact_email: entity.contact_email,
            contact_phone: entity.contact_phone,
            total_price: entity.total_price,
            status: entity.status,
            payment_method: entity.payment_method,
            payment_status: entity.payment_status,
            transaction_id: entity.transaction_id,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> BookingDto {
        BookingWithRelations {
            booking: self,
            user: None,
            destination: None,
        }
        .into_dto()
    }
}

/// Booking with its owner and destination loaded, either may be gone.
#[derive(Debug, Clone)]
pub struct BookingWithRelations {
    pub booking: Booking,
    pub user: Option<User>,
    pub destination: Option<Destination>,
}

impl BookingWithRelations {
    pub fn into_dto(self) -> BookingDto {
        let b = self.booking;
        BookingDto {
            id: b.id,
            booking_code: b.booking_code,
            user_id: b.user_id,
            destination_id: b.destination_id,
            user: self.user.map(|u| BookingUserDto {
                id: u.id,
                name: u.name,
                email: u.email,
            }),
            destination: self.destination.map(Destination::into_dto),
            start_date: b.start_date,
            end_date: b.end_date,
            guests: GuestsDto {
                adults: b.guests_adults,
                children: b.guests_children,
            },
            contact_info: ContactInfoDto {
                email: b.contact_email,
                phone: b.contact_phone,
            },
            total_price: b.total_price,
            status: b.status,
            payment: PaymentDto {
                method: b.payment_method,
                status: b.payment_status,
                transaction_id: b.transaction_id,
            },
            notes: b.notes,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

/// Parameters for a new booking. The code is assigned by the service.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub user_id: i32,
    pub destination_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub guests_adults: i32,
    pub guests_children: i32,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub total_price: f64,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
}

impl CreateBookingParams {
    /// Converts a validated DTO, parsing the ISO-8601 dates.
    ///
    /// # Returns
    /// - `Ok(CreateBookingParams)` - Converted parameters
    /// - `Err(AppError::BadRequest)` - A required field is missing or a date is unparseable
    pub fn from_dto(user_id: i32, dto: CreateBookingDto) -> Result<Self, AppError> {
        let destination_id = dto
            .destination_id
            .ok_or_else(|| AppError::BadRequest("Destination is required".to_string()))?;
        let start_date = parse_datetime_or(
            dto.start_date.as_deref().unwrap_or_default(),
            "Start date is invalid",
        )?;
        let end_date = parse_datetime_or(
            dto.end_date.as_deref().unwrap_or_default(),
            "End date is invalid",
        )?;
        let guests = dto.guests.unwrap_or_default();

        Ok(Self {
            user_id,
            destination_id,
            start_date,
            end_date,
            guests_adults: guests.adults,
            guests_children: guests.children,
            contact_email: dto.contact_info.email.trim().to_string(),
            contact_phone: dto.contact_info.phone,
            total_price: dto.total_price.unwrap_or_default(),
            payment_method: dto.payment_method.unwrap_or(PaymentMethod::Card),
            notes: dto.notes,
        })
    }
}

/// Admin overwrite of status fields. Each provided value replaces the stored one.
#[derive(Debug, Clone, Default)]
pub struct UpdateBookingStatusParams {
    pub id: i32,
    pub status: Option<BookingStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub transaction_id: Option<String>,
}

impl UpdateBookingStatusParams {
    pub fn from_dto(id: i32, dto: UpdateBookingStatusDto) -> Self {
        Self {
            id,
            status: dto.status,
            payment_status: dto.payment_status,
            transaction_id: dto.transaction_id.filter(|t| !t.is_empty()),
        }
    }
}
