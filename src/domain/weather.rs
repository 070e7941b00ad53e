pub mod presentation;
pub mod selection;

use chrono::{DateTime, Duration, Timelike, Utc};

/// Countries that render Fahrenheit on their signboards.
const FAHRENHEIT_COUNTRIES: [&str; 7] = ["US", "BS", "KY", "LR", "PW", "FM", "MH"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Celsius,
    Fahrenheit,
}

impl Units {
    #[must_use]
    pub fn for_country(country: &str) -> Self {
        if FAHRENHEIT_COUNTRIES.contains(&country) {
            Units::Fahrenheit
        } else {
            Units::Celsius
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Units::Celsius => "°C",
            Units::Fahrenheit => "°F",
        }
    }
}

/// Fixed UTC offset in minutes, as reported by the forecast provider.
/// Purely additive; daylight-saving transitions are not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    #[must_use]
    pub fn from_minutes(minutes: i32) -> Self {
        Self { minutes }
    }

    /// The provider reports the offset in seconds; the clock works in minutes.
    #[must_use]
    pub fn from_api_seconds(seconds: i32) -> Self {
        Self {
            minutes: seconds / 60,
        }
    }

    #[must_use]
    pub fn minutes(self) -> i32 {
        self.minutes
    }

    /// Wall-clock view of a Unix timestamp under this offset.
    #[must_use]
    pub fn localize(self, timestamp: i64) -> DateTime<Utc> {
        let utc = DateTime::from_timestamp(timestamp, 0).unwrap_or_default();
        utc + Duration::minutes(i64::from(self.minutes))
    }

    #[must_use]
    pub fn local_hour(self, timestamp: i64) -> u32 {
        self.localize(timestamp).hour()
    }
}

/// One timestamped entry of the forecast series. The provider may omit the
/// condition block, so code and description are optional; a missing code is
/// resolved to clear sky at presentation time.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    pub timestamp: i64,
    pub condition_code: Option<u16>,
    pub description: Option<String>,
    pub temperature_c: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CityInfo {
    pub name: String,
    pub country: String,
    pub utc_offset: UtcOffset,
}

impl CityInfo {
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

/// One full refresh from the upstream API.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city: CityInfo,
    pub samples: Vec<ForecastSample>,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct RefreshMetadata {
    pub last_success: Option<DateTime<Utc>>,
    pub last_attempt: Option<DateTime<Utc>>,
    pub consecutive_failures: u32,
}

impl RefreshMetadata {
    pub fn mark_success(&mut self) {
        let now = Utc::now();
        self.last_attempt = Some(now);
        self.last_success = Some(now);
        self.consecutive_failures = 0;
    }

    pub fn mark_failure(&mut self) {
        self.last_attempt = Some(Utc::now());
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
    }

    pub fn age_minutes(&self) -> Option<i64> {
        self.last_success.map(|ts| (Utc::now() - ts).num_minutes())
    }
}

#[must_use]
pub fn convert_temp(celsius: f32, units: Units) -> f32 {
    match units {
        Units::Celsius => celsius,
        Units::Fahrenheit => celsius * 1.8 + 32.0,
    }
}

#[must_use]
pub fn round_temp(value: f32) -> i32 {
    value.round() as i32
}

#[must_use]
pub fn display_temp(celsius: f32, units: Units) -> i32 {
    round_temp(convert_temp(celsius, units))
}
