use chrono::NaiveDate;

use crate::{model::AnnualSummary, provider::WeatherProvider};

/// Fixed estimation adjustment applied to the average monthly rainfall.
/// Inherited from the original report and kept verbatim.
pub const RAINFALL_SCALE: f64 = 70.0;

/// Sample day 1 of every month of `year` and fold the results into yearly
/// averages.
///
/// A failed or empty month is skipped, not zeroed; the twelve fetches run
/// sequentially. Returns `None` when no month yielded data, which the caller
/// must present as "no data", never as zero.
pub async fn annual_summary(
    provider: &dyn WeatherProvider,
    location: &str,
    year: i32,
) -> Option<AnnualSummary> {
    let mut total_temp = 0.0;
    let mut total_rain = 0.0;
    let mut counted = 0u32;

    for month in 1..=12u32 {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) else {
            continue;
        };

        let bundle = match provider.fetch_history(location, date).await {
            Ok(bundle) => bundle,
            Err(err) => {
                log::debug!("no history for {year}-{month:02}: {err}");
                continue;
            }
        };

        let days = &bundle.data.forecast.forecastday;
        let avg_temp = mean(days.iter().map(|d| d.day.avgtemp_c));
        let Some(avg) = avg_temp else {
            continue;
        };
        let rain: f64 = days.iter().map(|d| d.day.totalprecip_mm).sum();

        total_temp += avg;
        total_rain += rain;

        // Counting rule kept from the original report: a month counts when
        // it recorded rainfall or produced an average temperature.
        if rain > 0.0 || avg_temp.is_some() {
            counted += 1;
        }
    }

    if counted == 0 {
        return None;
    }

    Some(AnnualSummary {
        avg_temp_c: total_temp / f64::from(counted),
        avg_rainfall_mm: total_rain / f64::from(counted) * RAINFALL_SCALE,
    })
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0u32), |(s, c), v| (s + v, c + 1));
    (count > 0).then(|| sum / f64::from(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::WeatherError,
        model::{Condition, Day, Forecast, ForecastBundle, ForecastDay, ForecastDays},
    };
    use async_trait::async_trait;
    use serde_json::Value;
    use std::collections::HashMap;

    /// Provider stub that answers history fetches from a per-month script.
    /// Months missing from the script fail the fetch.
    #[derive(Debug, Default)]
    struct ScriptedProvider {
        // month -> (avgtemp_c, totalprecip_mm) per day
        months: HashMap<u32, Vec<(f64, f64)>>,
    }

    fn month_bundle(year: i32, month: u32, days: &[(f64, f64)]) -> ForecastBundle {
        let forecastday = days
            .iter()
            .enumerate()
            .map(|(i, (temp, rain))| ForecastDay {
                date: NaiveDate::from_ymd_opt(year, month, i as u32 + 1).unwrap(),
                day: Day {
                    avgtemp_c: *temp,
                    totalprecip_mm: *rain,
                    condition: Condition { text: "Cloudy".into() },
                },
            })
            .collect();

        ForecastBundle {
            raw: Value::Null,
            data: Forecast { current: None, forecast: ForecastDays { forecastday } },
        }
    }

    #[async_trait]
    impl WeatherProvider for ScriptedProvider {
        async fn fetch_forecast(
            &self,
            _location: &str,
            _days: u8,
        ) -> Result<ForecastBundle, WeatherError> {
            panic!("annual aggregation must not call the forecast endpoint");
        }

        async fn fetch_history(
            &self,
            _location: &str,
            date: NaiveDate,
        ) -> Result<ForecastBundle, WeatherError> {
            use chrono::Datelike;
            self.months
                .get(&date.month())
                .map(|days| month_bundle(date.year(), date.month(), days))
                .ok_or(WeatherError::Provider {
                    status: 400,
                    message: "no data for this date".into(),
                })
        }
    }

    #[tokio::test]
    async fn no_monthly_data_yields_no_summary() {
        let provider = ScriptedProvider::default();
        let summary = annual_summary(&provider, "Nowhere", 2026).await;
        assert!(summary.is_none());
    }

    #[tokio::test]
    async fn empty_month_payloads_yield_no_summary() {
        let mut provider = ScriptedProvider::default();
        for month in 1..=12 {
            provider.months.insert(month, Vec::new());
        }
        let summary = annual_summary(&provider, "Nowhere", 2026).await;
        assert!(summary.is_none());
    }

    #[tokio::test]
    async fn single_month_scales_rainfall_by_seventy() {
        let mut provider = ScriptedProvider::default();
        // avg temp (8 + 12) / 2 = 10, rainfall 1 + 2 = 3
        provider.months.insert(6, vec![(8.0, 1.0), (12.0, 2.0)]);

        let summary = annual_summary(&provider, "Paris", 2026).await.expect("one month counted");
        assert_eq!(summary.avg_temp_c, 10.0);
        assert_eq!(summary.avg_rainfall_mm, 3.0 * RAINFALL_SCALE);
    }

    #[tokio::test]
    async fn two_months_average_before_scaling() {
        let mut provider = ScriptedProvider::default();
        provider.months.insert(3, vec![(5.0, 10.0)]);
        provider.months.insert(9, vec![(15.0, 20.0)]);

        let summary = annual_summary(&provider, "Paris", 2026).await.expect("two months counted");
        assert_eq!(summary.avg_temp_c, 10.0);
        // (10 + 20) / 2 * 70 = 1050, exactly
        assert_eq!(summary.avg_rainfall_mm, 1050.0);
    }

    #[tokio::test]
    async fn dry_month_with_temperature_data_still_counts() {
        let mut provider = ScriptedProvider::default();
        provider.months.insert(7, vec![(20.0, 0.0)]);

        let summary = annual_summary(&provider, "Atacama", 2026).await.expect("month counted");
        assert_eq!(summary.avg_temp_c, 20.0);
        assert_eq!(summary.avg_rainfall_mm, 0.0);
    }

    #[tokio::test]
    async fn failed_months_do_not_abort_the_rest() {
        let mut provider = ScriptedProvider::default();
        // Only December answers; the other eleven fetches fail.
        provider.months.insert(12, vec![(2.0, 4.0)]);

        let summary = annual_summary(&provider, "Oslo", 2026).await.expect("december counted");
        assert_eq!(summary.avg_temp_c, 2.0);
        assert_eq!(summary.avg_rainfall_mm, 4.0 * RAINFALL_SCALE);
    }
}
