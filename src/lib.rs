//! CargoTrack Gateway Library
//!
//! Exposes the route handlers, auth stack, and router assembly for the
//! server binary and the integration tests.

pub mod api;
pub mod auth;
pub mod config;
pub mod middleware;
pub mod providers;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use auth::{
    api as auth_api, auth_middleware, jwt::JwtHandler, models::UserRole, require_role, AuthState,
    UserStore,
};
use providers::{OpenCageClient, OpenWeatherClient};

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub user_store: Arc<UserStore>,
    pub jwt_handler: Arc<JwtHandler>,
    pub weather: OpenWeatherClient,
    pub geocoder: OpenCageClient,
}

/// Assemble the full application router.
///
/// `/health` and the login route are public; everything else sits behind
/// the token verifier, and `/api/admin-only` additionally behind the role
/// gate. The permissive CORS policy mirrors the dashboard deployment.
pub fn app(state: AppState) -> Router {
    let auth_router = Router::new()
        .route("/api/auth/login", post(auth_api::login))
        .with_state(AuthState::new(
            state.user_store.clone(),
            state.jwt_handler.clone(),
        ));

    let admin_routes = Router::new()
        .route("/api/admin-only", get(api::admin_only))
        .route_layer(axum_middleware::from_fn(require_role(UserRole::Admin)));

    let protected_routes = Router::new()
        .route("/api/air-shipments", get(api::shipments::air_shipments))
        .route("/api/ship-shipments", get(api::shipments::ship_shipments))
        .route("/api/road-shipments", get(api::shipments::road_shipments))
        .route("/api/rail-shipments", get(api::shipments::rail_shipments))
        .route("/api/all-shipments", get(api::shipments::all_shipments))
        .route("/api/weather", get(api::weather::get_weather))
        .route("/api/location/:shipment_id", get(api::location::get_location))
        .route("/api/ai/analyze", post(api::analyze::analyze))
        .merge(admin_routes)
        .route_layer(axum_middleware::from_fn_with_state(
            state.jwt_handler.clone(),
            auth_middleware,
        ))
        .with_state(state);

    let public_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(auth_router)
        .layer(axum_middleware::from_fn(middleware::request_logging))
        .layer(CorsLayer::permissive())
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "CargoTrack gateway operational"
}
