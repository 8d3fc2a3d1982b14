//! CargoTrack gateway server binary.

use anyhow::{Context, Result};
use cargotrack_backend::{
    app,
    auth::{JwtHandler, UserStore},
    config::Config,
    providers::{OpenCageClient, OpenWeatherClient},
    AppState,
};
use dotenv::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv();
    init_tracing();

    let config = Config::from_env()?;

    let user_store = Arc::new(UserStore::new().context("Failed to seed credential store")?);
    let jwt_handler = Arc::new(JwtHandler::new(
        config.jwt_secret.clone(),
        config.token_ttl_hours,
    ));

    info!(
        "Authentication initialized: {} users, {}h token validity",
        user_store.len(),
        config.token_ttl_hours
    );

    let state = AppState {
        user_store,
        jwt_handler,
        weather: OpenWeatherClient::new(config.openweather_api_key.clone())?,
        geocoder: OpenCageClient::new(config.opencage_api_key.clone())?,
    };

    let app = app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Gateway listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cargotrack_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
