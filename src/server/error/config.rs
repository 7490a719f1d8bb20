use thiserror::Error;

/// Startup configuration failures. See `Config::from_lookup` for the variables read.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Only `JWT_SECRET` in production is mandatory.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value '{value}' for environment variable {key}")]
    InvalidValue { key: String, value: String },
}
