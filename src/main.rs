mod model;
mod server;

use tracing_subscriber::{fmt, EnvFilter};

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db, &config);

    let app = startup::apply_layers(router::router().with_state(state), &config)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), env = %config.app_env, "Starting server");

    axum::serve(listener, app).await?;

    Ok(())
}
