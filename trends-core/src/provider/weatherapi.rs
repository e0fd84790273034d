use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::WeatherError,
    model::{Forecast, ForecastBundle},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Client for WeatherAPI.com's forecast and history endpoints.
///
/// Performs exactly one request per call: no retries, no backoff. Failures
/// come back as `WeatherError` values for the caller to absorb or report.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different base URL. Used by tests to target a
    /// mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    async fn get_bundle(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<ForecastBundle, WeatherError> {
        let url = format!("{}/{endpoint}", self.base_url);
        log::debug!("GET {url}");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            log::debug!("{endpoint} returned {status}");
            return Err(WeatherError::Provider {
                status: status.as_u16(),
                message: provider_message(&body),
            });
        }

        let raw: Value = serde_json::from_str(&body)?;
        let data = Forecast::deserialize(&raw)?;

        Ok(ForecastBundle { raw, data })
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn fetch_forecast(
        &self,
        location: &str,
        days: u8,
    ) -> Result<ForecastBundle, WeatherError> {
        let days = days.to_string();
        self.get_bundle("forecast.json", &[("q", location), ("days", days.as_str())]).await
    }

    async fn fetch_history(
        &self,
        location: &str,
        date: NaiveDate,
    ) -> Result<ForecastBundle, WeatherError> {
        let dt = date.format("%Y-%m-%d").to_string();
        self.get_bundle("history.json", &[("q", location), ("dt", dt.as_str())]).await
    }
}

/// Error payload shape: {"error": {"code": 1006, "message": "..."}}
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Pull the provider's own error message out of a failure body, falling back
/// to the (truncated) body itself when it isn't the documented shape.
fn provider_message(body: &str) -> String {
    serde_json::from_str::<ApiError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| truncate_body(body))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back up to a char boundary so multibyte bodies cannot panic the slice.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_message_prefers_the_documented_error_shape() {
        let body = r#"{"error":{"code":1006,"message":"No matching location found."}}"#;
        assert_eq!(provider_message(body), "No matching location found.");
    }

    #[test]
    fn provider_message_falls_back_to_raw_body() {
        assert_eq!(provider_message("<html>502</html>"), "<html>502</html>");
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(500);
        let msg = provider_message(&body);
        assert!(msg.len() <= 203);
        assert!(msg.ends_with("..."));
    }

    #[test]
    fn truncation_backs_up_to_a_char_boundary() {
        // 'é' spans bytes 199..201, straddling the truncation point.
        let body = format!("{}é{}", "x".repeat(199), "y".repeat(50));
        let msg = provider_message(&body);
        assert_eq!(msg, format!("{}...", "x".repeat(199)));
    }
}
