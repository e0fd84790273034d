use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

/// Typed view of a WeatherAPI.com forecast or history payload.
///
/// History responses carry no `current` section, so it is optional; the
/// `forecast.forecastday` list is required in both shapes and a payload
/// without it fails parsing with a typed error instead of an ad hoc lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub current: Option<Current>,
    pub forecast: ForecastDays,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Current {
    pub temp_c: f64,
    pub humidity: u8,
    pub wind_kph: f64,
    pub condition: Condition,
    /// Only present when the provider includes air quality data.
    #[serde(default)]
    pub air_quality: Option<AirQuality>,
    #[serde(default)]
    pub uv: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirQuality {
    #[serde(rename = "us-epa-index")]
    pub us_epa_index: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDays {
    #[serde(default)]
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub day: Day,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Day {
    pub avgtemp_c: f64,
    pub totalprecip_mm: f64,
    pub condition: Condition,
}

/// A fetched payload: the typed view plus the raw JSON, kept verbatim so the
/// optional raw-data export writes exactly what the provider sent.
#[derive(Debug, Clone)]
pub struct ForecastBundle {
    pub raw: Value,
    pub data: Forecast,
}

/// Three parallel sequences extracted from the forecast days, in provider
/// order. Feeds the dual-axis trend chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendSeries {
    pub dates: Vec<NaiveDate>,
    pub temps_c: Vec<f64>,
    pub rain_mm: Vec<f64>,
}

impl TrendSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Yearly averages computed from sampled months. Absent entirely (the caller
/// gets `None`) when no month yielded data; never zero-filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnualSummary {
    pub avg_temp_c: f64,
    /// Average monthly rainfall after the fixed estimation scaling.
    pub avg_rainfall_mm: f64,
}
