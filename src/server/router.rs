//! Route table and OpenAPI document.

use axum::{
    http::Uri,
    routing::{get, patch, post, put},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{admin, auth, booking, destination, health, newsletter, review},
    error::AppError,
    state::AppState,
};

/// Registers the bearer token scheme. The same token is also accepted from the
/// `token` cookie.
struct BearerAddon;

impl Modify for BearerAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&BearerAddon),
    info(
        title = "TripNest Studio API",
        description = "Travel catalog, bookings, reviews and newsletter."
    ),
    security(("BearerToken" = [])),
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::get_profile,
        auth::update_profile,
        auth::get_users,
        auth::update_user_role,
        destination::get_destinations,
        destination::get_featured_destinations,
        destination::get_destination,
        destination::create_destination,
        destination::update_destination,
        destination::toggle_destination,
        destination::delete_destination,
        booking::create_booking,
        booking::get_user_bookings,
        booking::get_all_bookings,
        booking::update_booking_status,
        booking::simulate_payment,
        review::get_destination_reviews,
        review::create_review,
        review::update_review,
        review::delete_review,
        review::publish_review,
        admin::get_summary,
        newsletter::subscribe,
        newsletter::get_subscribers,
        newsletter::get_notifications,
        newsletter::create_notification,
        health::health,
    ),
    tags(
        (name = "auth", description = "Registration, sign in and user management"),
        (name = "destinations", description = "Destination catalog"),
        (name = "bookings", description = "Bookings and simulated payments"),
        (name = "reviews", description = "Destination reviews and moderation"),
        (name = "admin", description = "Admin dashboard"),
        (name = "newsletter", description = "Newsletter subscribers and notifications"),
        (name = "health", description = "Health check")
    )
)]
pub struct ApiDoc;

/// Builds every API route plus the Swagger UI at `/api/docs`.
///
/// `GET /api/destinations/{id}` looks up by slug; the segment shares its name with
/// the admin routes because the router cannot hold two parameter names at one position.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route(
            "/api/auth/profile",
            get(auth::get_profile).put(auth::update_profile),
        )
        .route("/api/auth/users", get(auth::get_users))
        .route(
            "/api/auth/users/{user_id}/role",
            patch(auth::update_user_role),
        )
        .route(
            "/api/destinations",
            get(destination::get_destinations).post(destination::create_destination),
        )
        .route(
            "/api/destinations/featured",
            get(destination::get_featured_destinations),
        )
        .route(
            "/api/destinations/{id}",
            get(destination::get_destination)
                .put(destination::update_destination)
                .delete(destination::delete_destination),
        )
        .route(
            "/api/destinations/{id}/toggle",
            patch(destination::toggle_destination),
        )
        .route(
            "/api/bookings",
            get(booking::get_user_bookings).post(booking::create_booking),
        )
        .route("/api/bookings/admin/all", get(booking::get_all_bookings))
        .route(
            "/api/bookings/{id}/status",
            patch(booking::update_booking_status),
        )
        .route(
            "/api/bookings/{id}/simulate-payment",
            post(booking::simulate_payment),
        )
        .route(
            "/api/reviews/destination/{destination_id}",
            get(review::get_destination_reviews),
        )
        .route("/api/reviews", post(review::create_review))
        .route(
            "/api/reviews/{id}",
            put(review::update_review).delete(review::delete_review),
        )
        .route("/api/reviews/{id}/publish", patch(review::publish_review))
        .route("/api/admin/summary", get(admin::get_summary))
        .route("/api/newsletter/subscribe", post(newsletter::subscribe))
        .route(
            "/api/newsletter/subscribers",
            get(newsletter::get_subscribers),
        )
        .route(
            "/api/newsletter/notifications",
            get(newsletter::get_notifications).post(newsletter::create_notification),
        )
        .route("/api/health", get(health::health))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("Not Found - {}", uri.path()))
}
