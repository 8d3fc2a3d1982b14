//! Shipment location route.

use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    pub shipment_id: String,
    pub lat: f64,
    pub lon: f64,
    pub current_city: String,
    pub timestamp: String,
}

/// GET /api/location/:shipment_id
///
/// Returns a simulated position near Chennai plus the reverse-geocoded city.
/// A failed geocode lookup is non-fatal; the city falls back to "Unknown".
pub async fn get_location(
    Path(shipment_id): Path<String>,
    State(state): State<AppState>,
) -> Json<LocationResponse> {
    // Simulated drift until a real GPS feed is wired in.
    let (lat, lon) = simulated_position();

    let current_city = match state.geocoder.city_for(lat, lon).await {
        Ok(city) => city,
        Err(e) => {
            warn!("OpenCage lookup failed, using fallback: {:#}", e);
            "Unknown".to_string()
        }
    };

    Json(LocationResponse {
        shipment_id,
        lat,
        lon,
        current_city,
        timestamp: Utc::now().to_rfc3339(),
    })
}

fn simulated_position() -> (f64, f64) {
    let mut rng = rand::thread_rng();
    let lat = 12.9 + rng.gen::<f64>() * 0.5; // ~12.9-13.4
    let lon = 80.0 + rng.gen::<f64>() * 0.5; // ~80.0-80.5
    (lat, lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_position_stays_in_bounds() {
        for _ in 0..200 {
            let (lat, lon) = simulated_position();
            assert!((12.9..13.4).contains(&lat));
            assert!((80.0..80.5).contains(&lon));
        }
    }
}
