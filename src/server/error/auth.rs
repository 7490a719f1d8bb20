use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer header and no `token` cookie on the request.
    #[error("Not authorized, token missing")]
    TokenMissing,

    /// Token failed signature or expiry checks, or its user no longer exists.
    #[error("Not authorized, token invalid")]
    TokenInvalid,

    /// Authenticated user lacks the role required by the route.
    ///
    /// # Fields
    /// - ID of the user that was denied
    #[error("User {0} is not authorized for this action")]
    AccessDenied(i32),

    /// Unknown email or wrong password on login.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Login requested a role the account does not hold.
    ///
    /// # Fields
    /// - The requested role
    #[error("Account does not have {0} access")]
    RoleMismatch(String),

    /// Registration email already belongs to an account.
    #[error("Email already registered")]
    EmailTaken,

    /// Registration requested the admin role while an admin exists.
    #[error("An admin account already exists. Contact support to manage admin access.")]
    AdminExists,
}

/// Converts authentication errors into HTTP responses.
///
/// - `TokenMissing` / `TokenInvalid` / `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` / `RoleMismatch` → 403 Forbidden
/// - `EmailTaken` / `AdminExists` → 400 Bad Request
///
/// Access denials are logged at debug level with the user ID while the client only
/// sees a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::TokenMissing | Self::TokenInvalid | Self::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            Self::AccessDenied(user_id) => {
                tracing::debug!(user_id, "Access denied");
                (
                    StatusCode::FORBIDDEN,
                    "Not authorized for this action".to_string(),
                )
            }
            Self::RoleMismatch(_) => (StatusCode::FORBIDDEN, self.to_string()),
            Self::EmailTaken | Self::AdminExists => (StatusCode::BAD_REQUEST, self.to_string()),
        };

        (status, Json(ErrorDto { message })).into_response()
    }
}
