use clap::Parser;
use tokio::sync::mpsc;

use super::*;
use crate::domain::weather::{CityInfo, ForecastSample, UtcOffset};

// 2026-02-12T00:00:00Z
const BASE: i64 = 1_770_854_400;
const THREE_HOURS: i64 = 3 * 3600;

fn test_cli(extra: &[&str]) -> Cli {
    let mut argv = vec![
        "signboard",
        "--lat",
        "59.33",
        "--lon",
        "18.07",
        "--api-key",
        "test-key",
    ];
    argv.extend_from_slice(extra);
    Cli::parse_from(argv)
}

fn test_state(cli: &Cli) -> AppState {
    let mut state = AppState::new(cli);
    state.locale = LocalePrefs { twelve_hour: false };
    state
}

fn report_with_codes(country: &str, offset_minutes: i32, codes: &[Option<u16>]) -> WeatherReport {
    WeatherReport {
        city: CityInfo {
            name: "Stockholm".to_string(),
            country: country.to_string(),
            utc_offset: UtcOffset::from_minutes(offset_minutes),
        },
        samples: codes
            .iter()
            .enumerate()
            .map(|(idx, &code)| ForecastSample {
                timestamp: BASE + idx as i64 * THREE_HOURS,
                condition_code: code,
                description: code.map(|_| "fixture sky".to_string()),
                temperature_c: 5.0 + idx as f32,
            })
            .collect(),
        fetched_at: Utc::now(),
    }
}

fn clear_report() -> WeatherReport {
    report_with_codes("SE", 60, &[Some(800); 10])
}

#[test]
fn rebuild_selects_nearest_sample_and_builds_strip() {
    let cli = test_cli(&[]);
    let mut state = test_state(&cli);
    state.report = Some(clear_report());

    // Ten minutes past the second sample: nearest is index 1.
    state.rebuild_view_at(BASE + THREE_HOURS + 600);

    let current = state.current.as_ref().expect("current slot");
    assert_eq!(current.temperature, 6);
    assert_eq!(current.scale, "°C");

    assert_eq!(state.strip.len(), 5);
    assert_eq!(state.strip[0].label, "Current");
    // Sample 2 sits at 06:00 UTC; the city offset is +60 minutes.
    assert_eq!(state.strip[1].label, "07:00");
    assert_eq!(state.strip[1].temperature, 7);
}

#[test]
fn background_only_swaps_when_the_code_changes() {
    let cli = test_cli(&[]);
    let mut state = test_state(&cli);
    state.report = Some(clear_report());

    // Noon: day variant of the clear background.
    state.rebuild_view_at(BASE + 4 * THREE_HOURS);
    let day_background = state.background.expect("background set");
    assert_eq!(day_background.to_string(), "clear");

    // Night rebuild with the same code: the stored background stays put.
    state.rebuild_view_at(BASE + 7 * THREE_HOURS + 600);
    assert_eq!(state.background, Some(day_background));

    // A different condition family finally swaps it.
    state.report = Some(report_with_codes("SE", 60, &[Some(500); 10]));
    state.rebuild_view_at(BASE + 4 * THREE_HOURS);
    assert_eq!(state.background.expect("rain background").to_string(), "rain");
}

#[test]
fn missing_code_keeps_previous_current_slot() {
    let cli = test_cli(&[]);
    let mut state = test_state(&cli);
    state.report = Some(clear_report());
    state.rebuild_view_at(BASE);
    let before = state.current.clone().expect("current slot");

    state.report = Some(report_with_codes("SE", 60, &[None; 10]));
    state.rebuild_view_at(BASE);

    assert_eq!(state.current, Some(before));
    // The strip still renders, falling back to clear-sky icons.
    assert_eq!(state.strip.len(), 5);
    assert!(state.strip[0].icon.is_some());
}

#[test]
fn empty_series_guard_skips_rebuild() {
    let cli = test_cli(&[]);
    let mut state = test_state(&cli);
    state.report = Some(WeatherReport {
        samples: Vec::new(),
        ..clear_report()
    });

    state.rebuild_view_at(BASE);

    assert!(state.current.is_none());
    assert!(state.strip.is_empty());
}

#[test]
fn clock_slots_follow_city_offset() {
    let cli = test_cli(&[]);
    let mut state = test_state(&cli);
    state.report = Some(clear_report());

    let now = DateTime::from_timestamp(BASE + 13 * 3600 + 7 * 60, 0).unwrap();
    state.refresh_clock_at(now);

    assert_eq!(state.time_slot, "14:07");
    assert_eq!(state.date_slot, "Thursday, Feb 12");
}

#[test]
fn units_toggle_pins_and_survives_refresh() {
    let cli = test_cli(&[]);
    let mut state = test_state(&cli);
    state.report = Some(clear_report());
    state.rebuild_view_at(BASE);

    state.pin_units(Units::Fahrenheit);
    state.rebuild_view_at(BASE);
    assert_eq!(state.current.as_ref().unwrap().scale, "°F");
    assert_eq!(state.current.as_ref().unwrap().temperature, 41);

    // A later refresh from a Celsius country must not unpin the choice.
    if !state.units_pinned {
        state.units = Units::for_country("SE");
    }
    assert_eq!(state.units, Units::Fahrenheit);
}

#[tokio::test]
async fn fetch_succeeded_populates_slots_and_units() {
    let cli = test_cli(&[]);
    let mut state = test_state(&cli);
    let (tx, _rx) = mpsc::channel(16);

    let report = report_with_codes("US", -5 * 60, &[Some(800); 10]);
    state
        .handle_event(AppEvent::FetchSucceeded(report), &tx, &cli)
        .await
        .unwrap();

    assert_eq!(state.mode, AppMode::Ready);
    assert_eq!(state.city_slot, "Stockholm, US");
    assert_eq!(state.units, Units::Fahrenheit);
    assert!(state.refresh_meta.last_success.is_some());
    assert!(!state.fetch_in_flight);
}

#[tokio::test]
async fn explicit_units_override_is_not_clobbered_by_country() {
    let cli = test_cli(&["--units", "celsius"]);
    let mut state = test_state(&cli);
    let (tx, _rx) = mpsc::channel(16);

    let report = report_with_codes("US", 0, &[Some(800); 10]);
    state
        .handle_event(AppEvent::FetchSucceeded(report), &tx, &cli)
        .await
        .unwrap();

    assert_eq!(state.units, Units::Celsius);
}

#[tokio::test]
async fn fetch_failed_keeps_previous_view() {
    let cli = test_cli(&[]);
    let mut state = test_state(&cli);
    let (tx, _rx) = mpsc::channel(16);

    state
        .handle_event(AppEvent::FetchSucceeded(clear_report()), &tx, &cli)
        .await
        .unwrap();
    let city_before = state.city_slot.clone();
    let strip_before = state.strip.clone();

    state
        .handle_event(
            AppEvent::FetchFailed("connection reset".to_string()),
            &tx,
            &cli,
        )
        .await
        .unwrap();

    assert_eq!(state.mode, AppMode::Ready);
    assert_eq!(state.city_slot, city_before);
    assert_eq!(state.strip, strip_before);
    assert!(state.report.is_some());
    assert_eq!(state.refresh_meta.consecutive_failures, 1);
}
