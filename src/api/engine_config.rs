use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::{
    AxisDefinition, AxisDomain, AxisId, AxisOrientation, AxisSet, AxisType, Padding, TickPolicy,
    TransitionSettings, Viewport,
};
use crate::error::{ChartError, ChartResult};

use super::tick_format::{AxisLabelLocale, FormattingConfig};

/// Chart family. Decides X semantics and the default left padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    /// Time-series X axis, track labels on the left.
    Gantt,
    #[default]
    Cartesian,
}

/// An axis limit or tick value: a number, or a date string for
/// time-series axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LimitValue {
    Number(f64),
    Text(String),
}

impl LimitValue {
    /// Epoch milliseconds of a date string (RFC 3339, or a naive ISO 8601
    /// date/date-time read as UTC).
    #[must_use]
    pub fn parse_date(text: &str) -> Option<f64> {
        if let Ok(time) = DateTime::parse_from_rfc3339(text) {
            return Some(time.timestamp_millis() as f64);
        }
        if let Ok(time) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(time.and_utc().timestamp_millis() as f64);
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|time| time.and_utc().timestamp_millis() as f64)
    }

    /// Numeric value on an axis of `axis_type`. Date strings are only
    /// accepted on time-series axes; numbers on time-series axes are epoch
    /// milliseconds.
    pub fn resolve(&self, axis_type: AxisType) -> ChartResult<f64> {
        let value = match (self, axis_type) {
            (Self::Number(value), _) => *value,
            (Self::Text(text), AxisType::TimeSeries) => Self::parse_date(text).ok_or_else(|| {
                ChartError::InvalidConfig(format!("`{text}` is not a valid date"))
            })?,
            (Self::Text(text), AxisType::Default) => {
                return Err(ChartError::InvalidConfig(format!(
                    "`{text}` is not valid on a non time-series axis"
                )));
            }
        };
        if !value.is_finite() {
            return Err(ChartError::InvalidConfig(
                "axis values must be finite".to_owned(),
            ));
        }
        Ok(value)
    }
}

impl From<f64> for LimitValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LimitValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickInput {
    #[serde(default)]
    pub values: Vec<LimitValue>,
    #[serde(default)]
    pub format: Option<String>,
}

/// Raw per-axis input as supplied by the host.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisInput {
    #[serde(default)]
    pub lower_limit: Option<LimitValue>,
    #[serde(default)]
    pub upper_limit: Option<LimitValue>,
    #[serde(default)]
    pub show: Option<bool>,
    #[serde(default, rename = "type")]
    pub axis_type: Option<AxisType>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub ticks: TickInput,
    #[serde(default)]
    pub range_rounding: Option<bool>,
    /// Only meaningful for X: `top` or `bottom`.
    #[serde(default)]
    pub orientation: Option<AxisOrientation>,
}

impl AxisInput {
    #[must_use]
    pub fn with_limits(lower: impl Into<LimitValue>, upper: impl Into<LimitValue>) -> Self {
        Self {
            lower_limit: Some(lower.into()),
            upper_limit: Some(upper.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = Some(show);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: TickInput) -> Self {
        self.ticks = ticks;
        self
    }

    #[must_use]
    pub fn with_type(mut self, axis_type: AxisType) -> Self {
        self.axis_type = Some(axis_type);
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: AxisOrientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    #[must_use]
    pub fn with_range_rounding(mut self, range_rounding: bool) -> Self {
        self.range_rounding = Some(range_rounding);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxesInput {
    pub x: AxisInput,
    #[serde(default)]
    pub y: Option<AxisInput>,
    #[serde(default)]
    pub y2: Option<AxisInput>,
}

/// Host-supplied padding; missing sides fall back to the chart defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PaddingInput {
    #[serde(default)]
    pub top: Option<f64>,
    #[serde(default)]
    pub bottom: Option<f64>,
    #[serde(default)]
    pub left: Option<f64>,
    #[serde(default)]
    pub right: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SettingsInput {
    #[serde(default)]
    pub transition: TransitionSettings,
}

/// Public engine bootstrap configuration, deserializable from the chart's
/// input JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(default)]
    pub kind: ChartKind,
    pub viewport: Viewport,
    pub axis: AxesInput,
    #[serde(default)]
    pub padding: Option<PaddingInput>,
    #[serde(default = "default_show_label")]
    pub show_label: bool,
    #[serde(default)]
    pub locale: AxisLabelLocale,
    /// Texts of the secondary label row drawn opposite the X axis.
    #[serde(default)]
    pub axis_info_row_labels: Vec<String>,
    #[serde(default)]
    pub settings: SettingsInput,
}

fn default_show_label() -> bool {
    true
}

impl ChartConfig {
    /// Creates a minimal cartesian config with a `[0, 1]` Y domain.
    #[must_use]
    pub fn new(
        viewport: Viewport,
        x_lower: impl Into<LimitValue>,
        x_upper: impl Into<LimitValue>,
    ) -> Self {
        Self {
            kind: ChartKind::Cartesian,
            viewport,
            axis: AxesInput {
                x: AxisInput::with_limits(x_lower, x_upper),
                y: Some(AxisInput::with_limits(0.0, 1.0)),
                y2: None,
            },
            padding: None,
            show_label: default_show_label(),
            locale: AxisLabelLocale::default(),
            axis_info_row_labels: Vec::new(),
            settings: SettingsInput::default(),
        }
    }

    pub fn from_json(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidConfig(format!("malformed chart config: {err}")))
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ChartKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, axis: AxisInput) -> Self {
        self.axis.x = axis;
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis: AxisInput) -> Self {
        self.axis.y = Some(axis);
        self
    }

    #[must_use]
    pub fn with_y2_axis(mut self, axis: AxisInput) -> Self {
        self.axis.y2 = Some(axis);
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: PaddingInput) -> Self {
        self.padding = Some(padding);
        self
    }

    #[must_use]
    pub fn with_show_label(mut self, show_label: bool) -> Self {
        self.show_label = show_label;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: AxisLabelLocale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_axis_info_row_labels(mut self, labels: Vec<String>) -> Self {
        self.axis_info_row_labels = labels;
        self
    }

    #[must_use]
    pub fn with_transition(mut self, transition: TransitionSettings) -> Self {
        self.settings.transition = transition;
        self
    }

    #[must_use]
    pub fn formatting(&self) -> FormattingConfig {
        FormattingConfig {
            locale: self.locale,
        }
    }

    /// Gantt charts are always time-series on X.
    #[must_use]
    pub fn x_axis_type(&self) -> AxisType {
        match self.kind {
            ChartKind::Gantt => AxisType::TimeSeries,
            ChartKind::Cartesian => self.axis.x.axis_type.unwrap_or_default(),
        }
    }

    /// Resolves padding: supplied sides win, missing ones use the chart
    /// default, and the left side of a Gantt chart defaults to the track
    /// label width.
    #[must_use]
    pub fn resolve_padding(&self) -> Padding {
        let defaults = match self.kind {
            ChartKind::Gantt => Padding::track_default(),
            ChartKind::Cartesian => Padding::chart_default(),
        };
        match self.padding {
            Some(input) => Padding {
                top: input.top.unwrap_or(defaults.top),
                bottom: input.bottom.unwrap_or(defaults.bottom),
                left: input.left.unwrap_or(defaults.left),
                right: input.right.unwrap_or(defaults.right),
                has_custom_padding: true,
            },
            None => defaults,
        }
    }

    /// Builds the axis store from validated input.
    pub fn resolve_axes(&self) -> ChartResult<AxisSet> {
        let x_type = self.x_axis_type();
        let x_input = &self.axis.x;
        let x_orientation = match x_input.orientation {
            Some(AxisOrientation::Top) => AxisOrientation::Top,
            _ => AxisOrientation::Bottom,
        };
        let x_domain = resolve_domain(AxisId::X, x_input, x_type)?;
        let x = AxisDefinition::new(x_type, x_domain, x_orientation)
            .with_show(x_input.show.unwrap_or(true))
            .with_ticks(resolve_ticks(&x_input.ticks, x_type)?)
            .with_range_rounding(x_input.range_rounding.unwrap_or(true))
            .with_label(x_input.label.clone());

        let y = match &self.axis.y {
            Some(input) if self.kind == ChartKind::Gantt && has_no_limits(input) => {
                vertical_axis_with_domain(input, TRACK_BAND_DOMAIN, AxisOrientation::Left)?
            }
            Some(input) => vertical_axis(AxisId::Y, input, AxisOrientation::Left)?,
            None => AxisDefinition::new(
                AxisType::Default,
                TRACK_BAND_DOMAIN,
                AxisOrientation::Left,
            )
            .with_range_rounding(false),
        };

        let y2 = self
            .axis
            .y2
            .as_ref()
            .map(|input| vertical_axis(AxisId::Y2, input, AxisOrientation::Right))
            .transpose()?;

        Ok(AxisSet { x, y, y2 })
    }
}

/// Y domain of a Gantt chart without explicit limits: one unit track band.
const TRACK_BAND_DOMAIN: AxisDomain = AxisDomain::new(0.0, 1.0);

fn has_no_limits(input: &AxisInput) -> bool {
    input.lower_limit.is_none() && input.upper_limit.is_none()
}

fn vertical_axis(
    id: AxisId,
    input: &AxisInput,
    orientation: AxisOrientation,
) -> ChartResult<AxisDefinition> {
    let domain = resolve_domain(id, input, AxisType::Default)?;
    vertical_axis_with_domain(input, domain, orientation)
}

/// A supplied vertical axis rounds its range unless told otherwise.
fn vertical_axis_with_domain(
    input: &AxisInput,
    domain: AxisDomain,
    orientation: AxisOrientation,
) -> ChartResult<AxisDefinition> {
    Ok(AxisDefinition::new(AxisType::Default, domain, orientation)
        .with_show(input.show.unwrap_or(true))
        .with_ticks(resolve_ticks(&input.ticks, AxisType::Default)?)
        .with_range_rounding(input.range_rounding.unwrap_or(true))
        .with_label(input.label.clone()))
}

pub(super) fn resolve_domain(
    id: AxisId,
    input: &AxisInput,
    axis_type: AxisType,
) -> ChartResult<AxisDomain> {
    let (Some(lower), Some(upper)) = (&input.lower_limit, &input.upper_limit) else {
        return Err(ChartError::InvalidConfig(format!(
            "axis.{} lowerLimit and upperLimit must be provided",
            id.as_str()
        )));
    };
    Ok(AxisDomain::new(
        lower.resolve(axis_type)?,
        upper.resolve(axis_type)?,
    ))
}

pub(super) fn resolve_ticks(input: &TickInput, axis_type: AxisType) -> ChartResult<TickPolicy> {
    let values = if input.values.is_empty() {
        None
    } else {
        Some(
            input
                .values
                .iter()
                .map(|value| value.resolve(axis_type))
                .collect::<ChartResult<Vec<f64>>>()?,
        )
    };
    Ok(TickPolicy {
        values,
        format: input.format.clone().filter(|format| !format.is_empty()),
    })
}
