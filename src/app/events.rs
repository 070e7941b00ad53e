use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use rand::Rng;
use tokio::time::{interval, sleep};

use crate::domain::weather::WeatherReport;

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickClock,
    TickWindow,
    TickRefresh,
    Input(Event),
    FetchStarted,
    FetchSucceeded(WeatherReport),
    FetchFailed(String),
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

/// Clock redraw cadence: time and date slots only, no data work.
pub fn start_clock_task(tx: tokio::sync::mpsc::Sender<AppEvent>, interval_secs: u64) {
    start_tick_task(tx, interval_secs, || AppEvent::TickClock);
}

/// Strip re-render cadence: recomputes the current slot from the cached
/// series without touching the network.
pub fn start_window_task(tx: tokio::sync::mpsc::Sender<AppEvent>, interval_secs: u64) {
    start_tick_task(tx, interval_secs, || AppEvent::TickWindow);
}

fn start_tick_task(
    tx: tokio::sync::mpsc::Sender<AppEvent>,
    interval_secs: u64,
    event: impl Fn() -> AppEvent + Send + 'static,
) {
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(interval_secs.max(1)));
        loop {
            ticker.tick().await;
            if tx.send(event()).await.is_err() {
                break;
            }
        }
    });
}

/// Full re-fetch cadence, jittered ±10% so a fleet of displays doesn't hit
/// the API in lockstep.
pub fn start_refresh_task(tx: tokio::sync::mpsc::Sender<AppEvent>, refresh_secs: u64) {
    tokio::spawn(async move {
        let base = refresh_secs.max(10) as f32;
        loop {
            let jitter = {
                let mut rng = rand::rng();
                rng.random_range(0.9f32..1.1f32)
            };
            sleep(Duration::from_secs_f32((base * jitter).max(1.0))).await;
            if tx.send(AppEvent::TickRefresh).await.is_err() {
                break;
            }
        }
    });
}
