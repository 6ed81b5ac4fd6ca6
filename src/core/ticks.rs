use chrono::{DateTime, Datelike, Days, Months, NaiveDate, Utc, Weekday};

use crate::core::axis::AxisType;

/// Horizontal pixels per X tick.
pub const MAX_TICK_VARIANCE: f64 = 100.0;
/// Lower bound on the X tick count.
pub const MIN_TICKS: f64 = 2.0;
/// Vertical pixels per Y/Y2 tick.
pub const DEFAULT_Y_AXIS_SPACING: f64 = 25.0;
/// Tick count of the throwaway axis stubs used for measurement.
pub const AXIS_STUB_TICK_COUNT: usize = 10;

/// Requested X tick count for an axis `width` pixels wide.
#[must_use]
pub fn x_tick_count(width: f64) -> f64 {
    let count = width / MAX_TICK_VARIANCE;
    if count.is_finite() {
        count.max(MIN_TICKS)
    } else {
        MIN_TICKS
    }
}

/// Requested Y/Y2 tick count for an axis `height` pixels tall.
#[must_use]
pub fn y_tick_count(height: f64) -> f64 {
    let count = height / DEFAULT_Y_AXIS_SPACING;
    if count.is_finite() { count.max(0.0) } else { 0.0 }
}

/// Rounded tick values covering `[lower, upper]`, roughly `count` of them.
///
/// Values are multiples of a 1/2/5 step and never leave the domain.
#[must_use]
pub fn nice_ticks(lower: f64, upper: f64, count: f64) -> Vec<f64> {
    if !lower.is_finite() || !upper.is_finite() || !count.is_finite() || count < 1.0 {
        return Vec::new();
    }
    let (lower, upper) = if lower <= upper {
        (lower, upper)
    } else {
        (upper, lower)
    };
    if lower == upper {
        return vec![lower];
    }

    let step = nice_step((upper - lower) / count);
    if step == 0.0 {
        return vec![lower, upper];
    }

    let first = (lower / step).ceil();
    let last = (upper / step).floor();
    let n = (last - first).max(0.0).min(10_000.0) as u64;
    (0..=n)
        .map(|i| (first + i as f64) * step)
        .filter(|value| *value >= lower && *value <= upper)
        .collect()
}

/// Tick values for an axis of `axis_type`: calendar-aligned on time-series
/// axes, 1/2/5 steps otherwise.
#[must_use]
pub fn axis_ticks(axis_type: AxisType, lower: f64, upper: f64, count: f64) -> Vec<f64> {
    match axis_type {
        AxisType::Default => nice_ticks(lower, upper, count),
        AxisType::TimeSeries => time_ticks(lower, upper, count),
    }
}

const SECOND_MS: f64 = 1_000.0;
const MINUTE_MS: f64 = 60.0 * SECOND_MS;
const HOUR_MS: f64 = 60.0 * MINUTE_MS;
const DAY_MS: f64 = 24.0 * HOUR_MS;
const WEEK_MS: f64 = 7.0 * DAY_MS;
const MONTH_MS: f64 = 30.0 * DAY_MS;
const YEAR_MS: f64 = 365.0 * DAY_MS;
const MAX_TIME_TICKS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CalendarUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl CalendarUnit {
    const fn approx_ms(self) -> f64 {
        match self {
            Self::Second => SECOND_MS,
            Self::Minute => MINUTE_MS,
            Self::Hour => HOUR_MS,
            Self::Day => DAY_MS,
            Self::Week => WEEK_MS,
            Self::Month => MONTH_MS,
            Self::Year => YEAR_MS,
        }
    }

    /// Units of constant length in UTC, aligned on multiples of the epoch.
    const fn is_fixed(self) -> bool {
        matches!(self, Self::Second | Self::Minute | Self::Hour)
    }
}

/// Candidate tick intervals, shortest first.
const TIME_INTERVALS: [(CalendarUnit, u32); 18] = [
    (CalendarUnit::Second, 1),
    (CalendarUnit::Second, 5),
    (CalendarUnit::Second, 15),
    (CalendarUnit::Second, 30),
    (CalendarUnit::Minute, 1),
    (CalendarUnit::Minute, 5),
    (CalendarUnit::Minute, 15),
    (CalendarUnit::Minute, 30),
    (CalendarUnit::Hour, 1),
    (CalendarUnit::Hour, 3),
    (CalendarUnit::Hour, 6),
    (CalendarUnit::Hour, 12),
    (CalendarUnit::Day, 1),
    (CalendarUnit::Day, 2),
    (CalendarUnit::Week, 1),
    (CalendarUnit::Month, 1),
    (CalendarUnit::Month, 3),
    (CalendarUnit::Year, 1),
];

fn interval_ms((unit, step): (CalendarUnit, u32)) -> f64 {
    unit.approx_ms() * f64::from(step)
}

/// Interval closest (by ratio) to `target_ms`, or `None` below one second.
fn time_interval(target_ms: f64) -> Option<(CalendarUnit, u32)> {
    let index = TIME_INTERVALS.partition_point(|interval| interval_ms(*interval) <= target_ms);
    if index == 0 {
        return None;
    }
    if index == TIME_INTERVALS.len() {
        let years = nice_step(target_ms / YEAR_MS).clamp(1.0, f64::from(u32::MAX));
        return Some((CalendarUnit::Year, years as u32));
    }
    let below = TIME_INTERVALS[index - 1];
    let above = TIME_INTERVALS[index];
    if target_ms / interval_ms(below) < interval_ms(above) / target_ms {
        Some(below)
    } else {
        Some(above)
    }
}

/// Time-series ticks in epoch milliseconds, roughly `count` of them,
/// aligned to UTC calendar boundaries (whole seconds to whole years).
///
/// Intervals below one second fall back to [`nice_ticks`].
#[must_use]
pub fn time_ticks(lower: f64, upper: f64, count: f64) -> Vec<f64> {
    if !lower.is_finite() || !upper.is_finite() || !count.is_finite() || count < 1.0 {
        return Vec::new();
    }
    let (lower, upper) = if lower <= upper {
        (lower, upper)
    } else {
        (upper, lower)
    };
    if lower == upper {
        return vec![lower];
    }

    let Some((unit, step)) = time_interval((upper - lower) / count) else {
        return nice_ticks(lower, upper, count);
    };
    if unit.is_fixed() {
        let interval = unit.approx_ms() * f64::from(step);
        let first = (lower / interval).ceil();
        let last = (upper / interval).floor();
        let n = (last - first).max(0.0).min(MAX_TIME_TICKS as f64) as u64;
        return (0..=n)
            .map(|i| (first + i as f64) * interval)
            .filter(|value| *value >= lower && *value <= upper)
            .collect();
    }
    calendar_ticks(lower, upper, unit, step).unwrap_or_else(|| nice_ticks(lower, upper, count))
}

fn midnight_ms(date: NaiveDate) -> Option<f64> {
    date.and_hms_opt(0, 0, 0)
        .map(|time| time.and_utc().timestamp_millis() as f64)
}

/// Day, week, month and year ticks. `None` when the domain leaves the
/// calendar range chrono can represent.
fn calendar_ticks(lower: f64, upper: f64, unit: CalendarUnit, step: u32) -> Option<Vec<f64>> {
    let step = step.max(1);
    let mut date = DateTime::<Utc>::from_timestamp_millis(lower.floor() as i64)?.date_naive();
    if midnight_ms(date)? < lower {
        date = date.succ_opt()?;
    }

    match unit {
        CalendarUnit::Week => {
            while date.weekday() != Weekday::Sun {
                date = date.succ_opt()?;
            }
        }
        CalendarUnit::Month => {
            if date.day() != 1 {
                date = date.with_day(1)?.checked_add_months(Months::new(1))?;
            }
            while date.month0() % step != 0 {
                date = date.checked_add_months(Months::new(1))?;
            }
        }
        CalendarUnit::Year => {
            if date.ordinal() != 1 {
                date = NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)?;
            }
            while date.year().rem_euclid(i32::try_from(step).ok()?) != 0 {
                date = NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)?;
            }
        }
        _ => {}
    }

    let mut ticks = Vec::new();
    while ticks.len() < MAX_TIME_TICKS {
        let value = midnight_ms(date)?;
        if value > upper {
            break;
        }
        // Multi-day steps restart on the first of every month.
        if unit != CalendarUnit::Day || date.day0() % step == 0 {
            ticks.push(value);
        }
        date = match unit {
            CalendarUnit::Week => date.checked_add_days(Days::new(7))?,
            CalendarUnit::Month => date.checked_add_months(Months::new(step))?,
            CalendarUnit::Year => {
                NaiveDate::from_ymd_opt(date.year().checked_add(i32::try_from(step).ok()?)?, 1, 1)?
            }
            _ => date.succ_opt()?,
        };
    }
    Some(ticks)
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}
