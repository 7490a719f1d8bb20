use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        destination::{
            CreateDestinationDto, DestinationEnvelopeDto, DestinationQueryDto, DestinationsDto,
            FeaturedQueryDto, PaginatedDestinationsDto, UpdateDestinationDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::destination::{
            featured_limit, CreateDestinationParams, DestinationFilter, UpdateDestinationParams,
        },
        service::destination::DestinationService,
        state::AppState,
        util::extract::{Json, Path, Query},
    },
};

/// Tag for grouping destination endpoints in OpenAPI documentation
pub static DESTINATION_TAG: &str = "destinations";

/// List active destinations.
///
/// Supports filtering by category, city, country, price range, minimum rating,
/// maximum duration, free-text search and tags, plus sorting and pagination.
///
/// # Returns
/// - `200 OK` - One page of destinations and pagination info
/// - `400 Bad Request` - Page number out of range
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/destinations",
    tag = DESTINATION_TAG,
    params(DestinationQueryDto),
    responses(
        (status = 200, description = "Page of destinations", body = PaginatedDestinationsDto),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_destinations(
    State(state): State<AppState>,
    Query(query): Query<DestinationQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let page = DestinationService::new(&state.db)
        .list(DestinationFilter::from_dto(query)?)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Featured active destinations, highest rated first.
#[utoipa::path(
    get,
    path = "/api/destinations/featured",
    tag = DESTINATION_TAG,
    params(FeaturedQueryDto),
    responses(
        (status = 200, description = "Featured destinations", body = DestinationsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_featured_destinations(
    State(state): State<AppState>,
    Query(query): Query<FeaturedQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let destinations = DestinationService::new(&state.db)
        .featured(featured_limit(query.limit))
        .await?;

    Ok((
        StatusCode::OK,
        Json(DestinationsDto {
            destinations: destinations.into_iter().map(|d| d.into_dto()).collect(),
        }),
    ))
}

/// Get a destination by slug.
///
/// Inactive destinations are still returned so existing links keep working.
#[utoipa::path(
    get,
    path = "/api/destinations/{slug}",
    tag = DESTINATION_TAG,
    params(
        ("slug" = String, Path, description = "Destination slug")
    ),
    responses(
        (status = 200, description = "Destination", body = DestinationEnvelopeDto),
        (status = 404, description = "Destination not found", body = ErrorDto)
    ),
)]
pub async fn get_destination(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let destination = DestinationService::new(&state.db).get_by_slug(&slug).await?;

    Ok((
        StatusCode::OK,
        Json(DestinationEnvelopeDto {
            destination: destination.into_dto(),
        }),
    ))
}

/// Create a destination.
///
/// The slug is derived from the name and must be unique.
///
/// # Access Control
/// - `Admin` - Only admins can manage the catalog
///
/// # Returns
/// - `201 Created` - The new destination
/// - `400 Bad Request` - Invalid fields or a destination with the same name exists
#[utoipa::path(
    post,
    path = "/api/destinations",
    tag = DESTINATION_TAG,
    request_body = CreateDestinationDto,
    responses(
        (status = 201, description = "Destination created", body = DestinationEnvelopeDto),
        (status = 400, description = "Invalid destination data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_destination(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateDestinationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let destination = DestinationService::new(&state.db)
        .create(CreateDestinationParams::from_dto(payload, user.id))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DestinationEnvelopeDto {
            destination: destination.into_dto(),
        }),
    ))
}

/// Update a destination.
///
/// Renaming regenerates the slug.
///
/// # Access Control
/// - `Admin` - Only admins can manage the catalog
#[utoipa::path(
    put,
    path = "/api/destinations/{id}",
    tag = DESTINATION_TAG,
    params(
        ("id" = i32, Path, description = "Destination ID")
    ),
    request_body = UpdateDestinationDto,
    responses(
        (status = 200, description = "Destination updated", body = DestinationEnvelopeDto),
        (status = 400, description = "Invalid destination data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Destination not found", body = ErrorDto)
    ),
)]
pub async fn update_destination(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDestinationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let destination = DestinationService::new(&state.db)
        .update(UpdateDestinationParams::from_dto(id, payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(DestinationEnvelopeDto {
            destination: destination.into_dto(),
        }),
    ))
}

/// Flip a destination's active flag.
///
/// # Access Control
/// - `Admin` - Only admins can manage the catalog
#[utoipa::path(
    patch,
    path = "/api/destinations/{id}/toggle",
    tag = DESTINATION_TAG,
    params(
        ("id" = i32, Path, description = "Destination ID")
    ),
    responses(
        (status = 200, description = "Destination with its new flag", body = DestinationEnvelopeDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Destination not found", body = ErrorDto)
    ),
)]
pub async fn toggle_destination(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let destination = DestinationService::new(&state.db).toggle(id).await?;

    Ok((
        StatusCode::OK,
        Json(DestinationEnvelopeDto {
            destination: destination.into_dto(),
        }),
    ))
}

/// Delete a destination.
///
/// Bookings and reviews referencing it are kept.
///
/// # Access Control
/// - `Admin` - Only admins can manage the catalog
#[utoipa::path(
    delete,
    path = "/api/destinations/{id}",
    tag = DESTINATION_TAG,
    params(
        ("id" = i32, Path, description = "Destination ID")
    ),
    responses(
        (status = 200, description = "Destination removed", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Destination not found", body = ErrorDto)
    ),
)]
pub async fn delete_destination(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    DestinationService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Destination removed".to_string(),
        }),
    ))
}
