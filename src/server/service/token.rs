//! Bearer token issuing and verification.
//!
//! Tokens are HS256 JWTs carrying the user ID and role. They are stateless: nothing is
//! stored server-side, so logout only clears the client cookie.

use std::sync::Arc;

use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::UserRole;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, internal::InternalError, AppError};

/// Lifetime of an issued token.
pub const TOKEN_TTL_DAYS: i64 = 7;

/// Claims embedded in every token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub id: i32,
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

#[derive(Clone)]
pub struct TokenService {
    keys: Arc<Keys>,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            }),
        }
    }

    /// Signs a token for the user valid for [`TOKEN_TTL_DAYS`].
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(AppError::InternalErr(TokenSigning))` - Signing failed
    pub fn issue(&self, user_id: i32, role: UserRole) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            id: user_id,
            role,
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(|e| InternalError::TokenSigning(e).into())
    }

    /// Verifies signature and expiry and returns the claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::TokenInvalid)` - Bad signature, malformed or expired token
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.keys.decoding, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Rejected token: {}", e);
                AuthError::TokenInvalid
            })
    }
}
