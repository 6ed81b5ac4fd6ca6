use std::sync::Arc;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, Timelike, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::core::AxisType;
use crate::error::{ChartError, ChartResult};

/// Formats one raw tick value (number, or epoch milliseconds for time axes).
pub type TickFormatFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Source of tick formatters, keyed by format string and axis type.
///
/// The engine never formats values itself; it asks the provider once per
/// axis and layout pass.
pub trait TickFormatProvider {
    fn formatter(&self, format: Option<&str>, axis_type: AxisType) -> ChartResult<TickFormatFn>;
}

/// Locale used for separators in numeric tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisLabelLocale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "es-ES")]
    EsEs,
}

impl AxisLabelLocale {
    const fn separators(self) -> (char, char) {
        match self {
            Self::EnUs => ('.', ','),
            Self::EsEs => (',', '.'),
        }
    }
}

/// Explicit formatting configuration handed to the assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormattingConfig {
    #[serde(default)]
    pub locale: AxisLabelLocale,
}

/// Built-in provider: `strftime` patterns for time-series axes and a small
/// numeric pattern language (`[,][.precision][f|d|%]`) for the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocaleTickFormatProvider {
    config: FormattingConfig,
}

impl LocaleTickFormatProvider {
    #[must_use]
    pub const fn new(config: FormattingConfig) -> Self {
        Self { config }
    }
}

impl TickFormatProvider for LocaleTickFormatProvider {
    fn formatter(&self, format: Option<&str>, axis_type: AxisType) -> ChartResult<TickFormatFn> {
        let format = format.filter(|pattern| !pattern.is_empty());
        let locale = self.config.locale;
        match (axis_type, format) {
            (AxisType::TimeSeries, None) => Ok(Arc::new(format_time_default)),
            (AxisType::TimeSeries, Some(pattern)) => {
                validate_time_pattern(pattern)?;
                let pattern = pattern.to_owned();
                Ok(Arc::new(move |value| format_time_with(value, &pattern)))
            }
            (AxisType::Default, None) => {
                let spec = NumberFormatSpec::default();
                Ok(Arc::new(move |value| spec.format(value, locale)))
            }
            (AxisType::Default, Some(pattern)) => {
                let spec = NumberFormatSpec::parse(pattern)?;
                Ok(Arc::new(move |value| spec.format(value, locale)))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberKind {
    /// Trailing zeros trimmed.
    General,
    Fixed,
    Integer,
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumberFormatSpec {
    grouping: bool,
    precision: Option<u32>,
    kind: NumberKind,
}

impl Default for NumberFormatSpec {
    fn default() -> Self {
        Self {
            grouping: false,
            precision: None,
            kind: NumberKind::General,
        }
    }
}

impl NumberFormatSpec {
    const DEFAULT_PRECISION: u32 = 6;
    const MAX_PRECISION: u32 = 20;

    fn parse(pattern: &str) -> ChartResult<Self> {
        let invalid = || ChartError::Format(format!("unsupported number format `{pattern}`"));
        let mut rest = pattern;
        let mut spec = Self::default();

        if let Some(stripped) = rest.strip_prefix(',') {
            spec.grouping = true;
            rest = stripped;
        }
        if let Some(stripped) = rest.strip_prefix('.') {
            let digits_len = stripped
                .find(|ch: char| !ch.is_ascii_digit())
                .unwrap_or(stripped.len());
            let precision: u32 = stripped[..digits_len].parse().map_err(|_| invalid())?;
            if precision > Self::MAX_PRECISION {
                return Err(invalid());
            }
            spec.precision = Some(precision);
            rest = &stripped[digits_len..];
        }
        spec.kind = match rest {
            "" => NumberKind::General,
            "f" => NumberKind::Fixed,
            "d" => NumberKind::Integer,
            "%" => NumberKind::Percent,
            _ => return Err(invalid()),
        };
        Ok(spec)
    }

    fn format(self, value: f64, locale: AxisLabelLocale) -> String {
        let scaled = if self.kind == NumberKind::Percent {
            value * 100.0
        } else {
            value
        };
        let Some(decimal) = Decimal::from_f64(scaled) else {
            return format!("{value}");
        };

        let text = match self.kind {
            NumberKind::Integer => decimal.round_dp(0).normalize().to_string(),
            NumberKind::General => decimal
                .round_dp(self.precision.unwrap_or(Self::DEFAULT_PRECISION))
                .normalize()
                .to_string(),
            NumberKind::Fixed | NumberKind::Percent => {
                let precision = self.precision.unwrap_or(match self.kind {
                    NumberKind::Percent => 0,
                    _ => Self::DEFAULT_PRECISION,
                });
                let mut rounded = decimal.round_dp(precision);
                rounded.rescale(precision);
                rounded.to_string()
            }
        };

        let mut localized = localize_number(&text, self.grouping, locale);
        if self.kind == NumberKind::Percent {
            localized.push('%');
        }
        localized
    }
}

fn localize_number(text: &str, grouping: bool, locale: AxisLabelLocale) -> String {
    let (decimal_separator, group_separator) = locale.separators();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) if rest.chars().any(|ch| ch != '0' && ch != '.') => ("-", rest),
        Some(rest) => ("", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(text.len() + integer.len() / 3 + 1);
    out.push_str(sign);
    if grouping {
        let digits = integer.len();
        for (index, ch) in integer.chars().enumerate() {
            if index > 0 && (digits - index) % 3 == 0 {
                out.push(group_separator);
            }
            out.push(ch);
        }
    } else {
        out.push_str(integer);
    }
    if let Some(fraction) = fraction {
        out.push(decimal_separator);
        out.push_str(fraction);
    }
    out
}

fn validate_time_pattern(pattern: &str) -> ChartResult<()> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ChartError::Format(format!(
            "unsupported time format `{pattern}`"
        )));
    }
    Ok(())
}

fn to_datetime(epoch_millis: f64) -> Option<DateTime<Utc>> {
    if !epoch_millis.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(epoch_millis.round() as i64)
}

fn format_time_with(epoch_millis: f64, pattern: &str) -> String {
    match to_datetime(epoch_millis) {
        Some(time) => time.format(pattern).to_string(),
        None => format!("{epoch_millis}"),
    }
}

/// Multi-scale default: the coarsest pattern that still distinguishes the
/// value from its enclosing calendar unit.
fn format_time_default(epoch_millis: f64) -> String {
    let Some(time) = to_datetime(epoch_millis) else {
        return format!("{epoch_millis}");
    };
    let pattern = if time.timestamp_subsec_millis() != 0 {
        ".%3f"
    } else if time.second() != 0 {
        ":%S"
    } else if time.minute() != 0 {
        "%I:%M"
    } else if time.hour() != 0 {
        "%I %p"
    } else if time.day() != 1 {
        "%b %d"
    } else if time.month() != 1 {
        "%B"
    } else {
        "%Y"
    };
    time.format(pattern).to_string()
}

#[cfg(test)]
mod tests {
    use super::{AxisLabelLocale, NumberFormatSpec, NumberKind, localize_number};

    #[test]
    fn parse_accepts_grouping_precision_and_kind() {
        let spec = NumberFormatSpec::parse(",.2f").expect("valid pattern");
        assert!(spec.grouping);
        assert_eq!(spec.precision, Some(2));
        assert_eq!(spec.kind, NumberKind::Fixed);
    }

    #[test]
    fn parse_rejects_unknown_suffix() {
        assert!(NumberFormatSpec::parse(".2x").is_err());
        assert!(NumberFormatSpec::parse(".f").is_err());
    }

    #[test]
    fn grouping_inserts_locale_separators() {
        assert_eq!(
            localize_number("-1234567.5", true, AxisLabelLocale::EnUs),
            "-1,234,567.5"
        );
        assert_eq!(
            localize_number("1234.5", true, AxisLabelLocale::EsEs),
            "1.234,5"
        );
    }

    #[test]
    fn negative_zero_loses_its_sign() {
        assert_eq!(localize_number("-0.00", false, AxisLabelLocale::EnUs), "0.00");
    }
}
