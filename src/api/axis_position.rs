//! Pixel placement of axes, axis titles, title shapes and the info row.
//!
//! Every function here is a pure function of a [`LayoutContext`]; nothing
//! is cached, so a resize only has to rebuild the context.

use serde::{Deserialize, Serialize};

use crate::core::{
    AxisId, AxisLabelSizes, AxisOrientation, AxisSizes, LayoutMetrics, Padding, Viewport,
};

/// Offset between an axis title and its legend shapes.
pub const BASE_LABEL_ICON_HEIGHT_PADDING: f64 = 6.0;

/// Snapshot of every size the position functions depend on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutContext {
    pub viewport: Viewport,
    pub padding: Padding,
    pub label_sizes: AxisLabelSizes,
    pub axis_sizes: AxisSizes,
    pub x_orientation: AxisOrientation,
}

impl LayoutContext {
    #[must_use]
    pub fn new(viewport: Viewport, metrics: LayoutMetrics, x_orientation: AxisOrientation) -> Self {
        Self {
            viewport,
            padding: metrics.padding,
            label_sizes: metrics.label_sizes,
            axis_sizes: metrics.axis_sizes,
            x_orientation,
        }
    }

    fn is_x_top(&self) -> bool {
        self.x_orientation == AxisOrientation::Top
    }
}

/// Space above the plot when X sits on top (room for the X title), or the
/// bottom padding otherwise.
#[must_use]
pub fn vertical_padding(ctx: &LayoutContext) -> f64 {
    if !ctx.is_x_top() {
        ctx.padding.bottom
    } else if ctx.label_sizes.x_height == 0.0 {
        ctx.padding.top
    } else {
        ctx.label_sizes.x_height * 2.0 + ctx.padding.top
    }
}

/// Left edge of the plot: Y band plus Y title.
#[must_use]
pub fn x_axis_x(ctx: &LayoutContext) -> f64 {
    ctx.axis_sizes.y + ctx.label_sizes.y_width
}

#[must_use]
pub fn x_axis_y(ctx: &LayoutContext) -> f64 {
    if ctx.is_x_top() {
        vertical_padding(ctx)
    } else {
        y_axis_height(ctx) + vertical_padding(ctx)
    }
}

/// The info row sits on the side of the plot opposite to the X axis.
#[must_use]
pub fn axis_info_row_y(ctx: &LayoutContext) -> f64 {
    if ctx.is_x_top() {
        y_axis_height(ctx) + vertical_padding(ctx)
    } else {
        vertical_padding(ctx)
    }
}

#[must_use]
pub fn y_axis_x(ctx: &LayoutContext) -> f64 {
    x_axis_x(ctx)
}

#[must_use]
pub fn y_axis_y(ctx: &LayoutContext) -> f64 {
    vertical_padding(ctx)
}

#[must_use]
pub fn y2_axis_x(ctx: &LayoutContext) -> f64 {
    y_axis_x(ctx) + x_axis_width(ctx)
}

#[must_use]
pub fn y2_axis_y(ctx: &LayoutContext) -> f64 {
    vertical_padding(ctx)
}

/// Canvas width left for the plot once both vertical axes and their titles
/// are reserved. Also drives the X tick density.
#[must_use]
pub fn x_axis_width(ctx: &LayoutContext) -> f64 {
    ctx.viewport.width
        - ctx.axis_sizes.y
        - ctx.axis_sizes.y2
        - ctx.label_sizes.y_width
        - ctx.label_sizes.y2_width
}

#[must_use]
pub fn y_axis_height(ctx: &LayoutContext) -> f64 {
    ctx.viewport.height
}

#[must_use]
pub fn x_axis_range(ctx: &LayoutContext) -> (f64, f64) {
    (0.0, x_axis_width(ctx))
}

/// Inverted so that larger values are drawn higher.
#[must_use]
pub fn y_axis_range(ctx: &LayoutContext) -> (f64, f64) {
    (y_axis_height(ctx), 0.0)
}

/// Horizontal center of the plot.
#[must_use]
pub fn x_axis_label_x(ctx: &LayoutContext) -> f64 {
    x_axis_x(ctx) + x_axis_width(ctx) / 2.0
}

#[must_use]
pub fn x_axis_label_y(ctx: &LayoutContext) -> f64 {
    let label_height = ctx.label_sizes.x_height;
    if ctx.is_x_top() {
        vertical_padding(ctx) - label_height * 2.0
    } else {
        x_axis_y(ctx)
            + label_height * 2.0
            + (ctx.padding.bottom - ctx.label_sizes.info_row_height) * 2.0
    }
}

#[must_use]
pub fn y_axis_label_x(ctx: &LayoutContext) -> f64 {
    ctx.padding.left - ctx.label_sizes.y_width
}

#[must_use]
pub fn y_axis_label_y(ctx: &LayoutContext) -> f64 {
    y_axis_y(ctx) + (y_axis_height(ctx) - ctx.padding.left / 2.0) / 2.0
}

#[must_use]
pub fn y2_axis_label_x(ctx: &LayoutContext) -> f64 {
    y2_axis_x(ctx) + ctx.padding.right + ctx.label_sizes.y2_width
}

#[must_use]
pub fn y_axis_label_shape_x(ctx: &LayoutContext) -> f64 {
    y_axis_label_x(ctx) + BASE_LABEL_ICON_HEIGHT_PADDING
}

/// Shapes below the rotated Y title, shifted by the number of shapes so the
/// group stays centered on the plot.
#[must_use]
pub fn y_axis_label_shape_y(ctx: &LayoutContext, shape_count: usize) -> f64 {
    y_axis_label_y(ctx) + shape_offset(shape_count)
}

#[must_use]
pub fn y2_axis_label_shape_x(ctx: &LayoutContext) -> f64 {
    y2_axis_label_x(ctx) - BASE_LABEL_ICON_HEIGHT_PADDING
}

/// Mirror of [`y_axis_label_shape_y`]; the Y2 title reads top to bottom.
#[must_use]
pub fn y2_axis_label_shape_y(ctx: &LayoutContext, shape_count: usize) -> f64 {
    y_axis_label_y(ctx) - shape_offset(shape_count)
}

fn shape_offset(shape_count: usize) -> f64 {
    shape_count as f64 * BASE_LABEL_ICON_HEIGHT_PADDING / 1.5
}

/// Rotation of an axis title in degrees.
#[must_use]
pub const fn rotation_for_axis(axis: AxisId) -> f64 {
    match axis {
        AxisId::Y => -90.0,
        AxisId::Y2 => 90.0,
        AxisId::X => 0.0,
    }
}

#[must_use]
pub const fn axis_info_row_orientation(x_orientation: AxisOrientation) -> AxisOrientation {
    match x_orientation {
        AxisOrientation::Top => AxisOrientation::Bottom,
        _ => AxisOrientation::Top,
    }
}
