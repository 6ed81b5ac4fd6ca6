use serde::{Deserialize, Serialize};

use crate::core::types::Padding;

/// Bands reserved for each axis: X height, Y and Y2 widths.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisSizes {
    pub x: f64,
    pub y: f64,
    pub y2: f64,
}

/// Footprint of the axis titles: X title height, Y/Y2 title widths, and the
/// tallest axis info row label.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisLabelSizes {
    pub x_height: f64,
    pub y_width: f64,
    pub y2_width: f64,
    pub info_row_height: f64,
}

/// Everything the position resolver needs besides the axes themselves.
///
/// Always recomputed as a whole; never patched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    pub padding: Padding,
    pub label_sizes: AxisLabelSizes,
    pub axis_sizes: AxisSizes,
}
