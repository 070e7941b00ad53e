use ratatui::style::{Color, Style};

use crate::domain::weather::presentation::{BackgroundKind, BackgroundName};

/// Base style for the whole display. `None` keeps the neutral look that is
/// also shown before the first refresh and for codes without an asset.
#[must_use]
pub fn background_style(background: Option<BackgroundName>) -> Style {
    match background {
        Some(name) => {
            let (bg, fg) = palette(name.kind, name.night);
            Style::default().bg(bg).fg(fg)
        }
        None => Style::default().bg(Color::Black).fg(Color::White),
    }
}

const DARK_TEXT: Color = Color::Rgb(28, 32, 38);

fn palette(kind: BackgroundKind, night: bool) -> (Color, Color) {
    match (kind, night) {
        (BackgroundKind::Thunderstorm, false) => (Color::Rgb(54, 57, 94), Color::White),
        (BackgroundKind::Thunderstorm, true) => (Color::Rgb(24, 26, 48), Color::White),
        (BackgroundKind::Drizzle, false) => (Color::Rgb(86, 110, 139), Color::White),
        (BackgroundKind::Drizzle, true) => (Color::Rgb(38, 50, 66), Color::White),
        (BackgroundKind::Rain, false) => (Color::Rgb(61, 90, 128), Color::White),
        (BackgroundKind::Rain, true) => (Color::Rgb(27, 42, 63), Color::White),
        (BackgroundKind::Snow, false) => (Color::Rgb(197, 209, 222), DARK_TEXT),
        (BackgroundKind::Snow, true) => (Color::Rgb(104, 118, 138), Color::White),
        // The atmosphere family has no night assets; the day look stands in
        // around the clock.
        (BackgroundKind::Haze, _) => (Color::Rgb(160, 147, 125), DARK_TEXT),
        (BackgroundKind::Smoke, _) => (Color::Rgb(94, 96, 98), Color::White),
        (BackgroundKind::Sand, _) => (Color::Rgb(189, 167, 118), DARK_TEXT),
        (BackgroundKind::VolcanicAsh, _) => (Color::Rgb(72, 66, 66), Color::White),
        (BackgroundKind::Tornado, _) => (Color::Rgb(52, 48, 56), Color::White),
        (BackgroundKind::Clear, false) => (Color::Rgb(74, 144, 217), Color::White),
        (BackgroundKind::Clear, true) => (Color::Rgb(16, 24, 56), Color::White),
        (BackgroundKind::Cloudy, false) => (Color::Rgb(126, 138, 151), Color::White),
        (BackgroundKind::Cloudy, true) => (Color::Rgb(47, 53, 62), Color::White),
    }
}
