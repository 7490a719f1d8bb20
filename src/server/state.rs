//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds the database pool, the token
//! signing keys and the cookie policy derived from configuration.

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    middleware::token::CookiePolicy,
    service::token::TokenService,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and
/// `TokenService` keeps its keys behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,

    /// Attributes applied to the `token` cookie.
    pub cookies: CookiePolicy,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            tokens: TokenService::new(&config.jwt_secret),
            cookies: CookiePolicy::new(config.is_production()),
        }
    }
}
