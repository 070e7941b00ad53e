use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::event::{Event, KeyCode, KeyEventKind};
use log::{info, warn};
use tokio::sync::mpsc;

use crate::{
    app::events::{AppEvent, start_clock_task, start_refresh_task, start_window_task},
    cli::{Cli, UnitsArg},
    data::forecast::ForecastClient,
    domain::{
        clock::{LocalePrefs, format_date, format_time},
        weather::{
            RefreshMetadata, Units, WeatherReport, display_temp,
            presentation::{BackgroundName, IconName, condition_presentation},
            selection::{select_current, strip_window},
        },
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Loading,
    Ready,
    Quit,
}

/// Content of the current-conditions slots.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentSlot {
    pub icon: Option<IconName>,
    pub description: Option<String>,
    pub temperature: i32,
    pub scale: &'static str,
}

/// One cell of the forecast strip.
#[derive(Debug, Clone, PartialEq)]
pub struct StripSlot {
    pub label: String,
    pub icon: Option<IconName>,
    pub temperature: i32,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub loading_message: String,
    pub locale: LocalePrefs,
    pub units: Units,
    units_pinned: bool,
    pub report: Option<WeatherReport>,
    pub time_slot: String,
    pub date_slot: String,
    pub city_slot: String,
    pub current: Option<CurrentSlot>,
    pub strip: Vec<StripSlot>,
    pub background: Option<BackgroundName>,
    last_condition_code: Option<u16>,
    pub refresh_meta: RefreshMetadata,
    pub fetch_in_flight: bool,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        let (units, units_pinned) = match cli.units {
            Some(UnitsArg::Celsius) => (Units::Celsius, true),
            Some(UnitsArg::Fahrenheit) => (Units::Fahrenheit, true),
            None => (Units::Celsius, false),
        };

        Self {
            mode: AppMode::Loading,
            loading_message: "Initializing...".to_string(),
            locale: LocalePrefs::detect(cli.locale.as_deref()),
            units,
            units_pinned,
            report: None,
            time_slot: String::new(),
            date_slot: String::new(),
            city_slot: String::new(),
            current: None,
            strip: Vec::new(),
            background: None,
            last_condition_code: None,
            refresh_meta: RefreshMetadata::default(),
            fetch_in_flight: false,
        }
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                cli.validate()?;
                start_clock_task(tx.clone(), cli.clock_interval);
                start_window_task(tx.clone(), cli.window_interval);
                start_refresh_task(tx.clone(), cli.refresh_interval);
                self.start_fetch(tx, cli).await?;
            }
            AppEvent::TickClock => self.refresh_clock_at(Utc::now()),
            AppEvent::TickWindow => self.rebuild_view_at(Utc::now().timestamp()),
            AppEvent::TickRefresh => self.start_fetch(tx, cli).await?,
            AppEvent::Input(event) => self.handle_input(event, tx, cli).await?,
            AppEvent::FetchStarted => {
                self.fetch_in_flight = true;
                if self.report.is_none() {
                    self.loading_message = "Fetching weather...".to_string();
                }
                self.refresh_meta.last_attempt = Some(Utc::now());
            }
            AppEvent::FetchSucceeded(report) => {
                self.fetch_in_flight = false;
                self.refresh_meta.mark_success();
                info!(
                    "forecast refreshed: {} samples for {}",
                    report.samples.len(),
                    report.city.display_name()
                );
                if !self.units_pinned {
                    self.units = Units::for_country(&report.city.country);
                }
                self.city_slot = report.city.display_name();
                self.report = Some(report);
                self.mode = AppMode::Ready;
                let now = Utc::now();
                self.refresh_clock_at(now);
                self.rebuild_view_at(now.timestamp());
            }
            AppEvent::FetchFailed(err) => {
                // Keep the previous view; the next scheduled refresh retries.
                self.fetch_in_flight = false;
                self.refresh_meta.mark_failure();
                warn!(
                    "forecast refresh failed (attempt {}): {err}",
                    self.refresh_meta.consecutive_failures
                );
            }
            AppEvent::Quit => self.mode = AppMode::Quit,
        }

        Ok(())
    }

    async fn handle_input(
        &mut self,
        event: Event,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => {
                    tx.send(AppEvent::Quit).await?;
                }
                KeyCode::Char('r') => {
                    self.start_fetch(tx, cli).await?;
                }
                KeyCode::Char('f') => self.pin_units(Units::Fahrenheit),
                KeyCode::Char('c') => self.pin_units(Units::Celsius),
                _ => {}
            },
            _ => {}
        }

        Ok(())
    }

    fn pin_units(&mut self, units: Units) {
        self.units = units;
        self.units_pinned = true;
        self.rebuild_view_at(Utc::now().timestamp());
    }

    async fn start_fetch(&mut self, tx: &mpsc::Sender<AppEvent>, cli: &Cli) -> Result<()> {
        if self.fetch_in_flight {
            return Ok(());
        }

        tx.send(AppEvent::FetchStarted).await?;

        let api_key = cli.resolved_api_key()?;
        let client = match &cli.forecast_url {
            Some(url) => ForecastClient::with_base_url(url.clone(), api_key),
            None => ForecastClient::new(api_key),
        };
        let (lat, lon) = (cli.lat, cli.lon);
        let tx2 = tx.clone();
        tokio::spawn(async move {
            match client.fetch(lat, lon).await {
                Ok(report) => {
                    let _ = tx2.send(AppEvent::FetchSucceeded(report)).await;
                }
                Err(err) => {
                    let _ = tx2.send(AppEvent::FetchFailed(err.to_string())).await;
                }
            }
        });

        Ok(())
    }

    /// Redraws the time and date slots for the given instant.
    pub fn refresh_clock_at(&mut self, now: DateTime<Utc>) {
        let offset = self
            .report
            .as_ref()
            .map(|report| report.city.utc_offset)
            .unwrap_or_default();
        let local = offset.localize(now.timestamp());
        self.time_slot = format_time(local, self.locale);
        self.date_slot = format_date(local);
    }

    /// Recomputes the current-conditions slots and the forecast strip from
    /// the cached report. No-op until a report is present; a report with an
    /// empty series never reaches this point (the data layer rejects it).
    pub fn rebuild_view_at(&mut self, now_utc: i64) {
        let Some(report) = &self.report else {
            return;
        };
        if report.samples.is_empty() {
            return;
        }

        let offset = report.city.utc_offset;
        let index = select_current(&report.samples, now_utc);
        let sample = &report.samples[index];
        let shown = condition_presentation(sample.condition_code, sample.timestamp, offset);

        if sample.condition_code.is_some() {
            // The background only swaps when the condition code changes, so a
            // steady sky never flickers between refreshes.
            if self.last_condition_code != sample.condition_code {
                self.background = shown.background;
                self.last_condition_code = sample.condition_code;
            }
            self.current = Some(CurrentSlot {
                icon: shown.icon,
                description: sample.description.clone(),
                temperature: display_temp(sample.temperature_c, self.units),
                scale: self.units.label(),
            });
        }

        self.strip = strip_window(&report.samples, index)
            .iter()
            .enumerate()
            .map(|(slot, item)| StripSlot {
                label: if slot == 0 {
                    "Current".to_string()
                } else {
                    format_time(offset.localize(item.timestamp), self.locale)
                },
                icon: condition_presentation(item.condition_code, item.timestamp, offset).icon,
                temperature: display_temp(item.temperature_c, self.units),
            })
            .collect();
    }
}

#[cfg(test)]
mod tests;
