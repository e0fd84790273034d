//! Core library for the `weather-trends` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com client and typed response models
//! - Annual temperature/rainfall aggregation
//! - Trend chart rendering and raw forecast export
//!
//! It is used by `trends-cli`, but can also be reused by other binaries or services.

pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod provider;
pub mod summary;

pub use config::Config;
pub use error::WeatherError;
pub use model::{AnnualSummary, Forecast, ForecastBundle, TrendSeries};
pub use provider::{WeatherProvider, weatherapi::WeatherApiProvider};
