use std::net::{Ipv4Addr, SocketAddr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://tripnest.sqlite?mode=rwc";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CLIENT_URL: &str = "http://localhost:5173";
const DEFAULT_APP_ENV: &str = "development";

/// Signing secret used outside production when `JWT_SECRET` is unset.
pub const DEV_JWT_SECRET: &str = "dev_tripnest_secret";

pub struct Config {
    pub database_url: String,
    pub port: u16,

    /// Allowed CORS origin of the browser client.
    pub client_url: String,

    pub app_env: String,
    pub jwt_secret: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a development default except `JWT_SECRET`, which is
    /// mandatory when `APP_ENV=production` and otherwise falls back to
    /// [`DEV_JWT_SECRET`] with a warning.
    ///
    /// # Returns
    /// - `Ok(Config)` - Loaded configuration
    /// - `Err(AppError::ConfigErr(InvalidValue))` - `PORT` is not a valid port number
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - `JWT_SECRET` unset in production
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let app_env = var("APP_ENV").unwrap_or_else(|| DEFAULT_APP_ENV.to_string());

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        let jwt_secret = match var("JWT_SECRET") {
            Some(secret) => secret,
            None if app_env == "production" => {
                return Err(ConfigError::MissingEnvVar("JWT_SECRET".to_string()).into())
            }
            None => {
                tracing::warn!(
                    "Using fallback JWT secret for development, set JWT_SECRET for improved security"
                );
                DEV_JWT_SECRET.to_string()
            }
        };

        Ok(Self {
            database_url: var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            port,
            client_url: var("CLIENT_URL").unwrap_or_else(|| DEFAULT_CLIENT_URL.to_string()),
            app_env,
            jwt_secret,
        })
    }

    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
