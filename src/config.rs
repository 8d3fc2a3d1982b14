//! Environment-backed runtime configuration.

use anyhow::{bail, Result};
use std::env;

/// Gateway configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub openweather_api_key: String,
    pub opencage_api_key: String,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// A missing or empty `JWT_SECRET` aborts startup: a silent fallback key
    /// would let every deployment verify everyone else's tokens, and the
    /// resulting universal rejections are far harder to diagnose at request
    /// time than a refusal to boot.
    pub fn from_env() -> Result<Self> {
        let jwt_secret = env::var("JWT_SECRET").unwrap_or_default();
        if jwt_secret.trim().is_empty() {
            bail!("JWT_SECRET is not set; refusing to start with a default signing key");
        }

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(5000);

        let token_ttl_hours = env::var("TOKEN_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(8);

        let openweather_api_key = env::var("OPENWEATHER_API_KEY").unwrap_or_default();
        let opencage_api_key = env::var("OPENCAGE_API_KEY").unwrap_or_default();

        Ok(Self {
            port,
            jwt_secret,
            token_ttl_hours,
            openweather_api_key,
            opencage_api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-global, so both cases run inside one test to
    // avoid racing with parallel execution.
    #[test]
    fn test_missing_jwt_secret_is_a_startup_fault() {
        env::remove_var("JWT_SECRET");
        assert!(Config::from_env().is_err());

        env::set_var("JWT_SECRET", "   ");
        assert!(Config::from_env().is_err());

        env::set_var("JWT_SECRET", "unit-test-secret");
        let config = Config::from_env().unwrap();
        assert_eq!(config.jwt_secret, "unit-test-secret");
        assert_eq!(config.token_ttl_hours, 8);
        assert_eq!(config.port, 5000);

        env::remove_var("JWT_SECRET");
    }
}
