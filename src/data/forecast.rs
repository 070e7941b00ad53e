use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::weather::{CityInfo, ForecastSample, UtcOffset, WeatherReport};

const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// Number of samples requested per refresh.
const SAMPLE_COUNT: u8 = 10;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("forecast request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("forecast response carried no samples")]
    EmptySeries,
}

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ForecastClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(FORECAST_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherReport, ForecastError> {
        let payload: ForecastResponse = self
            .client
            .get(&self.base_url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("units", "metric".to_string()),
                ("cnt", SAMPLE_COUNT.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        into_report(payload)
    }
}

fn into_report(payload: ForecastResponse) -> Result<WeatherReport, ForecastError> {
    if payload.list.is_empty() {
        return Err(ForecastError::EmptySeries);
    }

    Ok(WeatherReport {
        city: CityInfo {
            name: payload.city.name,
            country: payload.city.country,
            utc_offset: UtcOffset::from_api_seconds(payload.city.timezone),
        },
        samples: payload.list.into_iter().map(into_sample).collect(),
        fetched_at: Utc::now(),
    })
}

fn into_sample(entry: EntryBlock) -> ForecastSample {
    let condition = entry.weather.into_iter().next();
    ForecastSample {
        timestamp: entry.dt,
        condition_code: condition.as_ref().map(|block| block.id),
        description: condition.map(|block| block.description),
        temperature_c: entry.main.temp,
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    city: CityBlock,
    list: Vec<EntryBlock>,
}

#[derive(Debug, Deserialize)]
struct CityBlock {
    name: String,
    country: String,
    timezone: i32,
}

#[derive(Debug, Deserialize)]
struct EntryBlock {
    dt: i64,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
    main: MainBlock,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    id: u16,
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(list: serde_json::Value) -> ForecastResponse {
        serde_json::from_value(serde_json::json!({
            "city": {"name": "Lisbon", "country": "PT", "timezone": 3600},
            "list": list,
        }))
        .expect("valid payload")
    }

    #[test]
    fn report_carries_city_and_offset_in_minutes() {
        let report = into_report(payload(serde_json::json!([
            {"dt": 1_700_000_000, "weather": [{"id": 800, "description": "clear sky"}], "main": {"temp": 21.5}},
        ])))
        .expect("report");

        assert_eq!(report.city.display_name(), "Lisbon, PT");
        assert_eq!(report.city.utc_offset.minutes(), 60);
        assert_eq!(report.samples.len(), 1);
        assert_eq!(report.samples[0].condition_code, Some(800));
        assert_eq!(report.samples[0].description.as_deref(), Some("clear sky"));
    }

    #[test]
    fn empty_series_is_rejected() {
        let err = into_report(payload(serde_json::json!([]))).expect_err("empty list");
        assert!(matches!(err, ForecastError::EmptySeries));
    }

    #[test]
    fn missing_condition_block_leaves_code_unset() {
        let report = into_report(payload(serde_json::json!([
            {"dt": 1_700_000_000, "weather": [], "main": {"temp": 3.0}},
            {"dt": 1_700_010_800, "main": {"temp": 4.0}},
        ])))
        .expect("report");

        assert_eq!(report.samples[0].condition_code, None);
        assert_eq!(report.samples[1].condition_code, None);
        assert_eq!(report.samples[1].description, None);
    }

    #[test]
    fn extra_condition_blocks_beyond_first_are_ignored() {
        let report = into_report(payload(serde_json::json!([
            {"dt": 0, "weather": [
                {"id": 500, "description": "light rain"},
                {"id": 701, "description": "mist"},
            ], "main": {"temp": 10.0}},
        ])))
        .expect("report");

        assert_eq!(report.samples[0].condition_code, Some(500));
    }
}
