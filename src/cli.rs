use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "signboard",
    version,
    about = "Always-on terminal weather signboard"
)]
pub struct Cli {
    /// Display latitude
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Display longitude
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// OpenWeatherMap API key (falls back to $OPENWEATHERMAP_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Clock locale tag, e.g. en-US (falls back to $LANGUAGE, then $LANG)
    #[arg(long)]
    pub locale: Option<String>,

    /// Temperature scale override (auto-detected from the city country)
    #[arg(long, value_enum)]
    pub units: Option<UnitsArg>,

    /// Clock redraw interval in seconds
    #[arg(long, default_value_t = 30)]
    pub clock_interval: u64,

    /// Forecast strip re-render interval in seconds (no re-fetch)
    #[arg(long, default_value_t = 600)]
    pub window_interval: u64,

    /// Full forecast re-fetch interval in seconds
    #[arg(long, default_value_t = 7200)]
    pub refresh_interval: u64,

    /// Forecast endpoint override
    #[arg(long, hide = true)]
    pub forecast_url: Option<String>,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(-90.0..=90.0).contains(&self.lat) {
            anyhow::bail!("--lat must be within -90..=90");
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            anyhow::bail!("--lon must be within -180..=180");
        }
        if self.clock_interval == 0 || self.window_interval == 0 || self.refresh_interval == 0 {
            anyhow::bail!("timer intervals must be at least one second");
        }
        Ok(())
    }

    pub fn resolved_api_key(&self) -> anyhow::Result<String> {
        if let Some(key) = &self.api_key {
            return Ok(key.clone());
        }
        std::env::var("OPENWEATHERMAP_API_KEY")
            .map_err(|_| anyhow::anyhow!("no API key: pass --api-key or set $OPENWEATHERMAP_API_KEY"))
    }
}
