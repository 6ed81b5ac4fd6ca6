use serde::Serialize;

use crate::core::{
    AxisDomain, AxisId, AxisOrientation, AxisType, LayoutMetrics, Point, TransitionSettings,
    Viewport,
};
use crate::error::{ChartError, ChartResult};

/// One tick of an axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub value: f64,
    /// Pixel offset along the axis, measured from the axis origin.
    pub offset: f64,
    pub label: String,
}

/// Resolved axis: where it is drawn, what it spans and its ticks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisFrame {
    pub id: AxisId,
    pub show: bool,
    pub axis_type: AxisType,
    pub orientation: AxisOrientation,
    pub origin: Point,
    /// Pixel range `(start, end)` the domain maps onto.
    pub range: (f64, f64),
    pub domain: AxisDomain,
    /// Domain actually drawn, after outlier stretch.
    pub rendering_domain: AxisDomain,
    pub range_rounding: bool,
    pub ticks: Vec<AxisTick>,
}

/// Axis title with its rotation and, for vertical axes, the origin of its
/// legend shape group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabelPlacement {
    pub axis: AxisId,
    pub text: String,
    pub position: Point,
    pub rotation_deg: f64,
    pub shape_origin: Option<Point>,
}

/// Horizontal line at value zero of a vertical axis, spanning the X domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceLine {
    pub axis: AxisId,
    pub start: Point,
    pub end: Point,
    /// Only drawn while the rendering domain straddles zero.
    pub visible: bool,
}

/// Tick-less secondary label row opposite the X axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisInfoRowFrame {
    pub orientation: AxisOrientation,
    pub origin: Point,
    pub range: (f64, f64),
    pub labels: Vec<String>,
    /// Always empty; the row carries labels, not data ticks.
    pub tick_values: Vec<f64>,
    /// Excluded from assistive-technology traversal.
    pub aria_hidden: bool,
}

/// Everything a backend needs to draw the axes without re-deriving any
/// geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutFrame {
    pub viewport: Viewport,
    pub metrics: LayoutMetrics,
    pub x_axis: AxisFrame,
    pub y_axis: AxisFrame,
    pub y2_axis: Option<AxisFrame>,
    pub axis_info_row: Option<AxisInfoRowFrame>,
    pub labels: Vec<AxisLabelPlacement>,
    pub reference_lines: Vec<ReferenceLine>,
    pub transition: TransitionSettings,
}

impl LayoutFrame {
    pub fn axes(&self) -> impl Iterator<Item = &AxisFrame> {
        [&self.x_axis, &self.y_axis]
            .into_iter()
            .chain(self.y2_axis.as_ref())
    }

    #[must_use]
    pub fn axis(&self, id: AxisId) -> Option<&AxisFrame> {
        match id {
            AxisId::X => Some(&self.x_axis),
            AxisId::Y => Some(&self.y_axis),
            AxisId::Y2 => self.y2_axis.as_ref(),
        }
    }

    #[must_use]
    pub fn label(&self, id: AxisId) -> Option<&AxisLabelPlacement> {
        self.labels.iter().find(|label| label.axis == id)
    }

    #[must_use]
    pub fn reference_line(&self, id: AxisId) -> Option<&ReferenceLine> {
        self.reference_lines.iter().find(|line| line.axis == id)
    }

    /// Total tick count across all axes.
    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.axes().map(|axis| axis.ticks.len()).sum()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for axis in self.axes() {
            validate_axis(axis)?;
        }
        for label in &self.labels {
            if !label.position.is_finite() || label.shape_origin.is_some_and(|p| !p.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "label of axis {} has a non-finite position",
                    label.axis.as_str()
                )));
            }
        }
        for line in &self.reference_lines {
            if !line.start.is_finite() || !line.end.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "reference line of axis {} has non-finite endpoints",
                    line.axis.as_str()
                )));
            }
        }
        if let Some(row) = &self.axis_info_row {
            if !row.origin.is_finite() || !row.range.0.is_finite() || !row.range.1.is_finite() {
                return Err(ChartError::InvalidData(
                    "axis info row has non-finite geometry".to_owned(),
                ));
            }
        }

        Ok(())
    }
}

fn validate_axis(axis: &AxisFrame) -> ChartResult<()> {
    let finite_range = axis.range.0.is_finite() && axis.range.1.is_finite();
    if !axis.origin.is_finite() || !finite_range {
        return Err(ChartError::InvalidData(format!(
            "axis {} has non-finite geometry",
            axis.id.as_str()
        )));
    }
    if axis.ticks.iter().any(|tick| !tick.offset.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "axis {} has a non-finite tick offset",
            axis.id.as_str()
        )));
    }
    Ok(())
}
