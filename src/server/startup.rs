use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the CORS layer allowing the configured client origin with credentials.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer restricted to `CLIENT_URL`
/// - `Err(AppError::ConfigErr(InvalidValue))` - `CLIENT_URL` is not a valid header value
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origin =
        HeaderValue::from_str(&config.client_url).map_err(|_| ConfigError::InvalidValue {
            key: "CLIENT_URL".to_string(),
            value: config.client_url.clone(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

/// Wraps the router with CORS, plus request tracing outside production.
pub fn apply_layers(router: Router, config: &Config) -> Result<Router, AppError> {
    let router = router.layer(cors_layer(config)?);

    if config.is_production() {
        return Ok(router);
    }

    Ok(router.layer(TraceLayer::new_for_http()))
}
