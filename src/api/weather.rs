//! Weather proxy route.

use crate::api::ApiError;
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::error;

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

/// GET /api/weather?lat=..&lon=..
///
/// Proxies OpenWeather current conditions for the coordinates, passing the
/// upstream JSON through untouched.
pub async fn get_weather(
    Query(params): Query<WeatherQuery>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let (Some(lat), Some(lon)) = (params.lat, params.lon) else {
        return Err(ApiError::MissingCoordinates);
    };

    match state.weather.current_weather(&lat, &lon).await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            error!("Weather route error: {:#}", e);
            Err(ApiError::WeatherUnavailable)
        }
    }
}
