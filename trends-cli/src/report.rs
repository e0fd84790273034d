//! Console formatting for current conditions, forecast rows, and the annual
//! summary. Pure formatting over already-fetched data; the only side effect
//! is printing.

use trends_core::{
    AnnualSummary, Forecast, TrendSeries, WeatherError,
    model::Current,
};

/// Print the current conditions block. Air quality and UV lines appear only
/// when the payload carries them; their absence is not an error.
pub fn print_current(current: &Current, location: &str) {
    println!("\nWeather in {location}:");
    println!(
        "Temperature: {}°C, Humidity: {}%, Wind: {} kph",
        current.temp_c, current.humidity, current.wind_kph
    );
    println!("Condition: {}", current.condition.text);

    if let Some(air_quality) = &current.air_quality {
        println!("Air Quality Index (AQI): {}", air_quality.us_epa_index);
    }
    if let Some(uv) = current.uv {
        println!("UV Index: {uv}");
    }
}

/// Print one line per forecast day and hand back the parallel sequences the
/// chart needs, in the provider's day order.
pub fn print_forecast(forecast: &Forecast) -> TrendSeries {
    println!("\nForecast:");

    let mut series = TrendSeries::default();
    for day in &forecast.forecast.forecastday {
        println!(
            "{} - Avg Temp: {}°C, Condition: {}, Rain: {} mm",
            day.date, day.day.avgtemp_c, day.day.condition.text, day.day.totalprecip_mm
        );
        series.dates.push(day.date);
        series.temps_c.push(day.day.avgtemp_c);
        series.rain_mm.push(day.day.totalprecip_mm);
    }

    series
}

/// Report a failed forecast fetch: the provider's own message when it gave
/// one, a generic line otherwise.
pub fn print_fetch_failure(err: &WeatherError) {
    match err.provider_message() {
        Some(message) => println!("Error: {message}"),
        None => println!("Error: Unknown error ({err})"),
    }
}

/// Print the yearly averages, or explicit "no data" lines when no month
/// yielded anything.
pub fn print_annual_summary(summary: Option<&AnnualSummary>, location: &str, year: i32) {
    match summary {
        Some(summary) => {
            println!(
                "\nAverage Temperature in {location} for {year}: {:.2} °C",
                summary.avg_temp_c
            );
            println!(
                "Average Rainfall in {location} for {year}: {:.2} mm",
                summary.avg_rainfall_mm
            );
        }
        None => {
            println!("\nNo temperature data available for {year} in {location}.");
            println!("No rainfall data available for {year} in {location}.");
        }
    }
}
