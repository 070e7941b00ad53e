use std::fmt;

use super::UtcOffset;

/// Code the mapper falls back to when a sample carries no condition block.
pub const CLEAR_SKY: u16 = 800;

/// Condition families with a visually distinct night background. Haze, smoke,
/// sand, ash and tornado reuse their day asset after dark.
const NIGHT_BACKGROUND_RANGES: [(u16, u16); 3] = [(200, 399), (500, 699), (800, 804)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Haze,
    Clear,
    PartiallyCloudy,
    MostlyCloudy,
}

impl IconKind {
    pub const ALL: [IconKind; 8] = [
        IconKind::Thunderstorm,
        IconKind::Drizzle,
        IconKind::Rain,
        IconKind::Snow,
        IconKind::Haze,
        IconKind::Clear,
        IconKind::PartiallyCloudy,
        IconKind::MostlyCloudy,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            IconKind::Thunderstorm => "thunderstorm",
            IconKind::Drizzle => "drizzle",
            IconKind::Rain => "rain",
            IconKind::Snow => "snow",
            IconKind::Haze => "haze",
            IconKind::Clear => "clear",
            IconKind::PartiallyCloudy => "partially-cloudy",
            IconKind::MostlyCloudy => "mostly-cloudy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundKind {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Haze,
    Smoke,
    Sand,
    VolcanicAsh,
    Tornado,
    Clear,
    Cloudy,
}

impl BackgroundKind {
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            BackgroundKind::Thunderstorm => "thunderstorm",
            BackgroundKind::Drizzle => "drizzle",
            BackgroundKind::Rain => "rain",
            BackgroundKind::Snow => "snow",
            BackgroundKind::Haze => "haze",
            BackgroundKind::Smoke => "smoke",
            BackgroundKind::Sand => "sand",
            BackgroundKind::VolcanicAsh => "volcanic-ash",
            BackgroundKind::Tornado => "tornado",
            BackgroundKind::Clear => "clear",
            BackgroundKind::Cloudy => "cloudy",
        }
    }
}

/// Resolved icon asset name, e.g. `clear` or `clear-night`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconName {
    pub kind: IconKind,
    pub night: bool,
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.night {
            write!(f, "{}-night", self.kind.slug())
        } else {
            f.write_str(self.kind.slug())
        }
    }
}

/// Resolved background theme name, e.g. `rain` or `rain-night`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackgroundName {
    pub kind: BackgroundKind,
    pub night: bool,
}

impl fmt::Display for BackgroundName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.night {
            write!(f, "{}-night", self.kind.slug())
        } else {
            f.write_str(self.kind.slug())
        }
    }
}

/// What the display should show for one condition code. Either field may be
/// absent: the mapping table has deliberate gaps, and callers degrade by
/// leaving the previous asset in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Presentation {
    pub icon: Option<IconName>,
    pub background: Option<BackgroundName>,
}

/// Night spans local 20:00 through 05:59.
#[must_use]
pub fn is_night(timestamp: i64, offset: UtcOffset) -> bool {
    let hour = offset.local_hour(timestamp);
    hour <= 5 || hour >= 20
}

/// Maps a condition code plus sample timestamp to the icon and background the
/// signboard renders, switching to night variants after local dark. A missing
/// code is treated as clear sky; an unrecognized one yields empty fields.
#[must_use]
pub fn condition_presentation(
    code: Option<u16>,
    timestamp: i64,
    offset: UtcOffset,
) -> Presentation {
    let code = code.unwrap_or(CLEAR_SKY);
    let night = is_night(timestamp, offset);
    let (icon, background) = base_lookup(code);

    Presentation {
        icon: icon.map(|kind| IconName { kind, night }),
        background: background.map(|kind| BackgroundName {
            kind,
            night: night && has_night_background(code),
        }),
    }
}

fn has_night_background(code: u16) -> bool {
    NIGHT_BACKGROUND_RANGES
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&code))
}

// Code table: https://openweathermap.org/weather-conditions
fn base_lookup(code: u16) -> (Option<IconKind>, Option<BackgroundKind>) {
    match code {
        200..=299 => (Some(IconKind::Thunderstorm), Some(BackgroundKind::Thunderstorm)),
        300..=399 => (Some(IconKind::Drizzle), Some(BackgroundKind::Drizzle)),
        500..=599 => (Some(IconKind::Rain), Some(BackgroundKind::Rain)),
        600..=699 => (Some(IconKind::Snow), Some(BackgroundKind::Snow)),
        700..=799 => (Some(IconKind::Haze), haze_background(code)),
        800 => (Some(IconKind::Clear), Some(BackgroundKind::Clear)),
        801 => (Some(IconKind::PartiallyCloudy), Some(BackgroundKind::Cloudy)),
        802..=804 => (Some(IconKind::MostlyCloudy), Some(BackgroundKind::Cloudy)),
        _ => (None, None),
    }
}

// The atmosphere band keys its background off the exact code; codes without
// an assigned asset fall through with no background at all.
fn haze_background(code: u16) -> Option<BackgroundKind> {
    match code {
        701 | 721 | 741 => Some(BackgroundKind::Haze),
        711 => Some(BackgroundKind::Smoke),
        731 | 751 | 761 => Some(BackgroundKind::Sand),
        762 | 771 => Some(BackgroundKind::VolcanicAsh),
        781 => Some(BackgroundKind::Tornado),
        _ => None,
    }
}
