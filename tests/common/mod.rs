use clap::Parser;
use signboard::cli::Cli;

/// Spacing of the upstream 3-hour forecast samples.
pub const STEP: i64 = 3 * 3600;

pub fn signboard_cli(forecast_url: Option<&str>) -> Cli {
    let mut argv = vec![
        "signboard".to_string(),
        "--lat".to_string(),
        "59.3293".to_string(),
        "--lon".to_string(),
        "18.0686".to_string(),
        "--api-key".to_string(),
        "test-key".to_string(),
    ];
    if let Some(url) = forecast_url {
        argv.push("--forecast-url".to_string());
        argv.push(url.to_string());
    }
    Cli::parse_from(argv)
}

/// Upstream-shaped JSON payload with ten samples starting at `start`.
pub fn mock_forecast_payload(start: i64, code: u16) -> serde_json::Value {
    let list: Vec<serde_json::Value> = (0..10)
        .map(|idx| {
            serde_json::json!({
                "dt": start + i64::from(idx) * STEP,
                "weather": [{"id": code, "description": "fixture sky"}],
                "main": {"temp": 5.0 + f64::from(idx)},
            })
        })
        .collect();

    serde_json::json!({
        "city": {"name": "Stockholm", "country": "SE", "timezone": 3600},
        "list": list,
    })
}
