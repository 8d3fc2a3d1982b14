//! OpenWeather REST API Client
//!
//! Thin proxy: the upstream JSON is passed through to callers untouched.

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

const OPENWEATHER_API_BASE: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Clone)]
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build OpenWeatherClient")?;

        Ok(Self {
            client,
            base_url: OPENWEATHER_API_BASE.to_string(),
            api_key,
        })
    }

    /// Current conditions for a coordinate pair, metric units.
    ///
    /// Coordinates are forwarded as received; the upstream API does its own
    /// validation.
    pub async fn current_weather(&self, lat: &str, lon: &str) -> Result<Value> {
        let url = format!("{}/weather", self.base_url);

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("lat", lat),
                ("lon", lon),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .context("GET /weather failed")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("GET /weather {}: {}", status, text));
        }

        resp.json::<Value>()
            .await
            .context("Failed to parse weather response")
    }
}
