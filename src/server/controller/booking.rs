use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        booking::{
            BookingEnvelopeDto, BookingStatusQueryDto, BookingsDto, CreateBookingDto,
            SimulatedPaymentDto, UpdateBookingStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::booking::{BookingWithRelations, CreateBookingParams, UpdateBookingStatusParams},
        service::booking::BookingService,
        state::AppState,
        util::extract::{Json, Path, Query},
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "bookings";

/// Create a booking for the signed-in user.
///
/// The booking starts as pending and unpaid with a generated `TN-` code.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - The new booking
/// - `400 Bad Request` - Invalid fields or end date not after start date
/// - `404 Not Found` - Destination does not exist
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = BookingEnvelopeDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Destination not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    payload.validate()?;

    let params = CreateBookingParams::from_dto(user.id, payload)?;
    let booking = BookingService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingEnvelopeDto {
            booking: booking.into_dto(),
        }),
    ))
}

/// List the signed-in user's bookings, newest first, with destinations attached.
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "The user's bookings", body = BookingsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_user_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let bookings = BookingService::new(&state.db).get_for_user(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(BookingsDto {
            bookings: bookings
                .into_iter()
                .map(BookingWithRelations::into_dto)
                .collect(),
        }),
    ))
}

/// List all bookings, optionally filtered by status.
///
/// # Access Control
/// - `Admin` - Only admins can see every booking
#[utoipa::path(
    get,
    path = "/api/bookings/admin/all",
    tag = BOOKING_TAG,
    params(BookingStatusQueryDto),
    responses(
        (status = 200, description = "All bookings", body = BookingsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_all_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<BookingStatusQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let bookings = BookingService::new(&state.db).get_all(query.status).await?;

    Ok((
        StatusCode::OK,
        Json(BookingsDto {
            bookings: bookings
                .into_iter()
                .map(BookingWithRelations::into_dto)
                .collect(),
        }),
    ))
}

/// Overwrite a booking's status, payment status or transaction ID.
///
/// # Access Control
/// - `Admin` - Only admins can change booking status
#[utoipa::path(
    patch,
    path = "/api/bookings/{id}/status",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    request_body = UpdateBookingStatusDto,
    responses(
        (status = 200, description = "Booking updated", body = BookingEnvelopeDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto)
    ),
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let booking = BookingService::new(&state.db)
        .update_status(UpdateBookingStatusParams::from_dto(id, payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(BookingEnvelopeDto {
            booking: booking.into_dto(),
        }),
    ))
}

/// Simulate a successful payment.
///
/// Marks the booking confirmed and paid with a `SIM-` transaction ID.
///
/// # Access Control
/// - `Admin` - Only admins can simulate payments
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/simulate-payment",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Payment simulated", body = SimulatedPaymentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto)
    ),
)]
pub async fn simulate_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let booking = BookingService::new(&state.db).simulate_payment(id).await?;

    Ok((
        StatusCode::OK,
        Json(SimulatedPaymentDto {
            booking: booking.into_dto(),
            message: "Payment simulated successfully".to_string(),
        }),
    ))
}
