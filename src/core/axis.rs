use serde::{Deserialize, Serialize};

use crate::core::content::ValueExtent;
use crate::core::data_range::DataRange;
use crate::core::outlier::{StretchFactor, stretch_domain};

/// Identifies one of the three chart axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisId {
    X,
    Y,
    Y2,
}

impl AxisId {
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Y | Self::Y2)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Y2 => "y2",
        }
    }
}

/// Domain semantics of an axis. Time-series values are epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisType {
    #[default]
    Default,
    TimeSeries,
}

/// Side of the plot an axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrientation {
    Top,
    Bottom,
    Left,
    Right,
}

impl AxisOrientation {
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Value bounds of an axis.
///
/// Validated input guarantees `lower_limit <= upper_limit`; nothing in the
/// engine re-checks it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    pub lower_limit: f64,
    pub upper_limit: f64,
}

impl AxisDomain {
    #[must_use]
    pub const fn new(lower_limit: f64, upper_limit: f64) -> Self {
        Self {
            lower_limit,
            upper_limit,
        }
    }

    #[must_use]
    pub fn midpoint(self) -> f64 {
        self.lower_limit + (self.upper_limit - self.lower_limit) / 2.0
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.upper_limit - self.lower_limit
    }

    /// True when zero lies strictly inside the domain.
    #[must_use]
    pub fn straddles_zero(self) -> bool {
        let min = self.lower_limit.min(self.upper_limit);
        let max = self.lower_limit.max(self.upper_limit);
        min < 0.0 && max > 0.0
    }

    #[must_use]
    pub fn contains(self, extent: ValueExtent) -> bool {
        self.lower_limit <= extent.min && extent.max <= self.upper_limit
    }
}

/// Explicit tick configuration. `None` values mean "derive from layout".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TickPolicy {
    pub values: Option<Vec<f64>>,
    pub format: Option<String>,
}

impl TickPolicy {
    #[must_use]
    pub fn explicit_values(&self) -> Option<&[f64]> {
        self.values.as_deref().filter(|values| !values.is_empty())
    }
}

/// Per-axis state: configuration plus the tracked data range.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisDefinition {
    pub show: bool,
    pub axis_type: AxisType,
    /// Configured bounds. Never mutated after construction.
    pub domain: AxisDomain,
    /// Bounds actually rendered, after outlier stretch.
    pub rendering_domain: AxisDomain,
    pub data_range: DataRange,
    pub ticks: TickPolicy,
    pub range_rounding: bool,
    pub label: Option<String>,
    pub orientation: AxisOrientation,
}

impl AxisDefinition {
    #[must_use]
    pub fn new(axis_type: AxisType, domain: AxisDomain, orientation: AxisOrientation) -> Self {
        Self {
            show: true,
            axis_type,
            domain,
            rendering_domain: domain,
            data_range: DataRange::default(),
            ticks: TickPolicy::default(),
            range_rounding: true,
            label: None,
            orientation,
        }
    }

    #[must_use]
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: TickPolicy) -> Self {
        self.ticks = ticks;
        self
    }

    #[must_use]
    pub fn with_range_rounding(mut self, range_rounding: bool) -> Self {
        self.range_rounding = range_rounding;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = label.filter(|text| !text.is_empty());
        self
    }
}

/// The X, Y and optional Y2 axes of one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSet {
    pub x: AxisDefinition,
    pub y: AxisDefinition,
    pub y2: Option<AxisDefinition>,
}

impl AxisSet {
    /// Y2 takes part in layout only when it is configured and shown.
    #[must_use]
    pub fn has_y2_axis(&self) -> bool {
        self.y2.as_ref().is_some_and(|axis| axis.show)
    }

    /// Returns the axis, or `None` for an absent or hidden Y2.
    #[must_use]
    pub fn get(&self, id: AxisId) -> Option<&AxisDefinition> {
        match id {
            AxisId::X => Some(&self.x),
            AxisId::Y => Some(&self.y),
            AxisId::Y2 => self.y2.as_ref().filter(|axis| axis.show),
        }
    }

    pub fn get_mut(&mut self, id: AxisId) -> Option<&mut AxisDefinition> {
        match id {
            AxisId::X => Some(&mut self.x),
            AxisId::Y => Some(&mut self.y),
            AxisId::Y2 => self.y2.as_mut().filter(|axis| axis.show),
        }
    }

    /// Derives the rendering domain of Y and Y2 from a shared stretch
    /// factor. Each axis stretches around its own midpoint.
    pub fn apply_stretch(&mut self, factor: StretchFactor) {
        self.y.rendering_domain = stretch_domain(self.y.domain, factor);
        if let Some(y2) = self.y2.as_mut().filter(|axis| axis.show) {
            y2.rendering_domain = stretch_domain(y2.domain, factor);
        }
    }
}
