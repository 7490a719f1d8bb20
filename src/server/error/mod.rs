//! Error hierarchy and its mapping onto HTTP responses.
//!
//! Handlers, services and repositories all return `AppError`. Every variant renders as
//! `{"message": "..."}`; failures the client cannot act on are logged and reported as a
//! generic 500.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{
        error::{auth::AuthError, config::ConfigError, internal::InternalError},
        util::validation::first_message,
    },
};

#[derive(Error, Debug)]
pub enum AppError {
    /// Bad or missing environment configuration. Only raised during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Token, credential or role failure. Carries its own status mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Hashing, token signing or booking code generation failed.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Binding or serving the listener failed.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// 404 with the given message, e.g. "Destination not found".
    #[error("{0}")]
    NotFound(String),

    /// 400 with the given message.
    #[error("{0}")]
    BadRequest(String),

    /// 403 for a signed-in caller acting on someone else's resource.
    #[error("{0}")]
    Forbidden(String),
}

/// Request DTO validation failures become a 400 carrying the first failing message.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::BadRequest(first_message(&errors))
    }
}

/// Extractor rejections become a 400 carrying axum's description of the bad input.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// # Returns
/// - 400 / 403 / 404 - `BadRequest`, `Forbidden` and `NotFound` with their message
/// - Delegated - `AuthErr` decides between 400, 401 and 403
/// - 500 - Everything else, logged with `tracing::error!` and reported generically
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::AuthErr(err) => return err.into_response(),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Forbidden(message) => (StatusCode::FORBIDDEN, message),
            err => return InternalServerError(err).into_response(),
        };

        (status, Json(ErrorDto { message })).into_response()
    }
}

/// Logs the wrapped error and answers 500 without exposing its detail.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                message: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
