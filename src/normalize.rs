//! Numeric helpers shared by every score component.
//!
//! All helpers are pure and map raw metrics into `[0.0, 1.0]`. Time-based
//! signals work on calendar months (`year * 12 + month`), not elapsed days.

use chrono::{DateTime, Datelike, Utc};

/// Inclusive range used by the linear normalizers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Clamp `value` into `[min, max]`. NaN collapses to `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.max(min).min(max)
}

/// Shorthand for `clamp(value, 0.0, 1.0)`.
pub fn clamp01(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

/// Linear map of `value` from `range` onto `[0, 1]`.
/// Below `min` gives 0, above `max` gives 1; a degenerate range gives 0.
pub fn normalize(value: f64, range: Range) -> f64 {
    if range.max == range.min {
        return 0.0;
    }
    clamp01((value - range.min) / (range.max - range.min))
}

/// Inverse of [`normalize`], for metrics where lower raw values are better.
pub fn normalize_inverse(value: f64, range: Range) -> f64 {
    1.0 - normalize(value, range)
}

/// Logarithmic normalization for heavy-tailed counts (stars, token limits).
pub fn normalize_log(value: f64, max: f64) -> f64 {
    if value <= 0.0 {
        return 0.0;
    }
    let log_max = (max + 1.0).log10();
    if log_max <= 0.0 {
        return 0.0;
    }
    clamp01((value + 1.0).log10() / log_max)
}

/// Calendar month index of an instant (`year * 12 + zero-based month`).
pub fn month_index(date: &DateTime<Utc>) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// Calendar-month delta `from - to`.
/// Positive when `from` falls in a later month than `to`.
pub fn months_between(from: &DateTime<Utc>, to: &DateTime<Utc>) -> i64 {
    month_index(from) - month_index(to)
}

/// Round to two decimals (half away from zero).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
