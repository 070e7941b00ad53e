use chrono::{DateTime, Utc};

/// What the clock actually needs from a locale: whether to render a 12-hour
/// dial. English-speaking locales do, with the UK as the notable exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalePrefs {
    pub twelve_hour: bool,
}

impl LocalePrefs {
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().to_ascii_lowercase().replace('_', "-");
        let twelve_hour = tag == "en" || (tag.starts_with("en-") && tag != "en-gb");
        Self { twelve_hour }
    }

    /// Resolution order: explicit override, then the first entry of the
    /// host's language preference list, then plain English.
    #[must_use]
    pub fn detect(override_tag: Option<&str>) -> Self {
        match override_tag
            .map(str::to_owned)
            .or_else(first_preferred_language)
        {
            Some(tag) => Self::from_tag(&tag),
            None => Self::from_tag("en"),
        }
    }
}

// $LANGUAGE holds a colon-separated preference list; $LANG a single tag with
// an optional encoding suffix ("en_US.UTF-8").
fn first_preferred_language() -> Option<String> {
    let raw = std::env::var("LANGUAGE")
        .ok()
        .and_then(|list| list.split(':').next().map(str::to_owned))
        .filter(|tag| !tag.is_empty())
        .or_else(|| std::env::var("LANG").ok())?;

    let tag = raw.split('.').next().unwrap_or("").to_owned();
    (!tag.is_empty()).then_some(tag)
}

#[must_use]
pub fn format_time(local: DateTime<Utc>, prefs: LocalePrefs) -> String {
    if prefs.twelve_hour {
        local.format("%-I:%M %p").to_string()
    } else {
        local.format("%H:%M").to_string()
    }
}

/// `Thursday, Feb 12` — weekday, short month, zero-padded day.
#[must_use]
pub fn format_date(local: DateTime<Utc>) -> String {
    local.format("%A, %b %d").to_string()
}
