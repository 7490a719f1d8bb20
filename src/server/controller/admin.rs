use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{admin::AdminSummaryDto, api::ErrorDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::admin::AdminService,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Dashboard summary.
///
/// Counts of users, destinations and reviews, booking totals by status with
/// revenue, the latest bookings and the top rated destinations.
///
/// # Access Control
/// - `Admin` - Only admins can view the dashboard
#[utoipa::path(
    get,
    path = "/api/admin/summary",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Dashboard summary", body = AdminSummaryDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let summary = AdminService::new(&state.db).summary().await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}
