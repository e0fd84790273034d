use anyhow::Result;
use chrono::{Datelike, Utc};
use clap::Parser;
use inquire::{Confirm, CustomType, Text};
use std::path::Path;
use trends_core::{Config, WeatherApiProvider, WeatherProvider, chart, export, summary};

use crate::report;

/// Default chart output file, written to the current working directory.
pub const CHART_FILE: &str = "weather_trends.png";
/// Default raw forecast export file.
pub const DATA_FILE: &str = "forecast.json";

const MIN_DAYS: u8 = 1;
const MAX_DAYS: u8 = 10;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-trends", version, about = "Weather lookup and trend reporting")]
pub struct Cli {
    /// Location to look up, e.g. a city name or postal code. Prompted for
    /// when omitted.
    pub location: Option<String>,

    /// Number of forecast days (1 to 10). Prompted for when omitted.
    #[arg(long)]
    pub days: Option<u8>,

    /// Save the trend chart to weather_trends.png without asking.
    #[arg(long)]
    pub save_chart: bool,

    /// Save the raw forecast payload to forecast.json without asking.
    #[arg(long)]
    pub save_data: bool,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;
        let provider = WeatherApiProvider::new(config.api_key);

        let location = match self.location {
            Some(location) => location,
            None => Text::new("Enter the location (e.g., city name or postal code):").prompt()?,
        };

        let days = match self.days {
            Some(days) => days,
            None => CustomType::<u8>::new("Enter the number of forecast days (1 to 10):")
                .with_error_message("Please enter a whole number")
                .prompt()?,
        };

        // Validated before any network call is made.
        validate_days(days)?;

        let bundle = match provider.fetch_forecast(&location, days).await {
            Ok(bundle) => bundle,
            Err(err) => {
                report::print_fetch_failure(&err);
                return Ok(());
            }
        };

        if let Some(current) = &bundle.data.current {
            report::print_current(current, &location);
        }

        let series = report::print_forecast(&bundle.data);

        if series.is_empty() {
            println!("No forecast days returned; skipping the trend chart.");
        } else {
            let save_chart = self.save_chart
                || Confirm::new("Do you want to save the weather trend plot?")
                    .with_default(false)
                    .prompt()?;
            let output = save_chart.then(|| Path::new(CHART_FILE));
            chart::render_trend_chart(&series, output)?;
            if save_chart {
                println!("Plot saved as '{CHART_FILE}'");
            }
        }

        let save_data = self.save_data
            || Confirm::new("Do you want to save the forecast data to a file?")
                .with_default(false)
                .prompt()?;
        if save_data {
            export::save_forecast_json(&bundle.raw, Path::new(DATA_FILE))?;
            println!("Forecast saved to '{DATA_FILE}'");
        }

        let year = Utc::now().year();
        let annual = summary::annual_summary(&provider, &location, year).await;
        report::print_annual_summary(annual.as_ref(), &location, year);

        Ok(())
    }
}

/// Reject out-of-range day counts before anything touches the network.
pub fn validate_days(days: u8) -> Result<()> {
    if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
        anyhow::bail!("Invalid input for days: must be between {MIN_DAYS} and {MAX_DAYS}.");
    }
    Ok(())
}
