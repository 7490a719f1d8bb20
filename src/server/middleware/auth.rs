use axum::http::HeaderMap;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::token::extract_token,
    model::user::User,
    service::token::TokenService,
};

pub enum Permission {
    Admin,
}

/// Resolves the calling user from the request token and checks route permissions.
///
/// The user is reloaded from the database on every call so a deleted account or a
/// changed role takes effect immediately.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Authenticates the request and checks each permission in turn.
    ///
    /// Pass an empty slice for routes open to any signed-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding every permission
    /// - `Err(AuthError::TokenMissing)` - No bearer header or token cookie
    /// - `Err(AuthError::TokenInvalid)` - Token rejected or its user no longer exists
    /// - `Err(AuthError::AccessDenied)` - User lacks a required permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(token) = extract_token(self.headers) else {
            return Err(AuthError::TokenMissing.into());
        };

        let claims = self.tokens.verify(&token)?;

        let Some(user) = user_repo.find_by_id(claims.id).await? else {
            return Err(AuthError::TokenInvalid.into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(user.id).into());
                    }
                }
            }
        }

        Ok(user)
    }
}
