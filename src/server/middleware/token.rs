//! Token transport: reading it from requests and writing it as a cookie.

use axum::http::{header, HeaderMap};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::server::service::token::TOKEN_TTL_DAYS;

pub const TOKEN_COOKIE: &str = "token";

/// Reads the token from `Authorization: Bearer <t>`, falling back to the `token` cookie.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());

    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    CookieJar::from_headers(headers)
        .get(TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

/// Attributes of the `token` cookie.
///
/// Production sets `Secure` with `SameSite=None` so a separately hosted client can send
/// it cross-site; otherwise `SameSite=Lax` over plain HTTP.
#[derive(Debug, Clone, Copy)]
pub struct CookiePolicy {
    secure: bool,
}

impl CookiePolicy {
    pub fn new(production: bool) -> Self {
        Self { secure: production }
    }

    fn base(&self, value: String) -> Cookie<'static> {
        Cookie::build((TOKEN_COOKIE, value))
            .http_only(true)
            .secure(self.secure)
            .same_site(if self.secure {
                SameSite::None
            } else {
                SameSite::Lax
            })
            .path("/")
            .build()
    }

    /// Cookie carrying a freshly issued token.
    pub fn token_cookie(&self, token: String) -> Cookie<'static> {
        let mut cookie = self.base(token);
        cookie.set_max_age(time::Duration::days(TOKEN_TTL_DAYS));
        cookie
    }

    /// Empty cookie with zero max-age, instructing the client to drop the token.
    pub fn cleared_cookie(&self) -> Cookie<'static> {
        let mut cookie = self.base(String::new());
        cookie.set_max_age(time::Duration::ZERO);
        cookie
    }
}
