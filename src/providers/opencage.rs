//! OpenCage Geocoding Client
//!
//! Reverse geocoding only: coordinates in, nearest settled place name out.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const OPENCAGE_API_BASE: &str = "https://api.opencagedata.com/geocode/v1";

#[derive(Clone)]
pub struct OpenCageClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    #[serde(default)]
    components: PlaceComponents,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PlaceComponents {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    suburb: Option<String>,
    state: Option<String>,
}

impl OpenCageClient {
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build OpenCageClient")?;

        Ok(Self {
            client,
            base_url: OPENCAGE_API_BASE.to_string(),
            api_key,
        })
    }

    /// Resolve a coordinate pair to a city name, falling back through
    /// progressively coarser place components.
    pub async fn city_for(&self, lat: f64, lon: f64) -> Result<String> {
        let url = format!("{}/json", self.base_url);
        let query = format!("{}+{}", lat, lon);

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("key", self.api_key.as_str()),
                ("limit", "1"),
            ])
            .send()
            .await
            .context("GET /geocode/v1/json failed")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("GET /geocode/v1/json {}: {}", status, text));
        }

        let geo = resp
            .json::<GeocodeResponse>()
            .await
            .context("Failed to parse geocode response")?;

        let components = geo
            .results
            .into_iter()
            .next()
            .map(|r| r.components)
            .unwrap_or_default();

        Ok(resolve_city(components))
    }
}

fn resolve_city(components: PlaceComponents) -> String {
    components
        .city
        .or(components.town)
        .or(components.village)
        .or(components.suburb)
        .or(components.state)
        .unwrap_or_else(|| "Unknown".to_string())
}
