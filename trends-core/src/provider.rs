use crate::{error::WeatherError, model::ForecastBundle};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::fmt::Debug;

pub mod weatherapi;

/// Abstraction over the remote weather provider.
///
/// One concrete implementation talks to WeatherAPI.com; the trait keeps the
/// aggregation logic testable against canned data.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch the current conditions plus a `days`-long daily forecast.
    async fn fetch_forecast(
        &self,
        location: &str,
        days: u8,
    ) -> Result<ForecastBundle, WeatherError>;

    /// Fetch recorded weather for a single past date.
    async fn fetch_history(
        &self,
        location: &str,
        date: NaiveDate,
    ) -> Result<ForecastBundle, WeatherError>;
}
