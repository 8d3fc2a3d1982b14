//! HTTP route handlers for the gateway surface.
//!
//! Everything here runs behind the token verifier; the auth module owns the
//! login route itself.

pub mod analyze;
pub mod location;
pub mod shipments;
pub mod weather;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

/// GET /api/admin-only - demo payload for verifying the role gate
pub async fn admin_only() -> Json<Value> {
    Json(json!({ "secret": "only admin can see this" }))
}

/// Request-facing errors for the proxy routes
#[derive(Debug)]
pub enum ApiError {
    MissingCoordinates,
    WeatherUnavailable,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingCoordinates => {
                (StatusCode::BAD_REQUEST, "lat and lon are required")
            }
            ApiError::WeatherUnavailable => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch weather")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
