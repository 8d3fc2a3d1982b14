//! Outbound REST clients for third-party data providers.

pub mod opencage;
pub mod openweather;

pub use opencage::OpenCageClient;
pub use openweather::OpenWeatherClient;
