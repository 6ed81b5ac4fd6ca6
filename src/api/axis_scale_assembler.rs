use tracing::debug;

use crate::core::{
    AxisDefinition, AxisId, ContentItem, LinearScale, Point, TransitionSettings, Viewport,
    axis_ticks, x_tick_count, y_tick_count,
};
use crate::error::ChartResult;
use crate::render::{
    AxisFrame, AxisInfoRowFrame, AxisLabelPlacement, AxisTick, LayoutFrame, ReferenceLine,
    TextMeasurer,
};

use super::axis_position::{
    LayoutContext, axis_info_row_orientation, axis_info_row_y, rotation_for_axis, x_axis_label_x,
    x_axis_label_y, x_axis_range, x_axis_width, x_axis_x, x_axis_y, y_axis_height,
    y_axis_label_shape_x, y_axis_label_shape_y, y_axis_label_x, y_axis_label_y, y_axis_range,
    y_axis_x, y_axis_y, y2_axis_label_shape_x, y2_axis_label_shape_y, y2_axis_label_x, y2_axis_x,
    y2_axis_y,
};
use super::axis_sizing::{SizingInput, size_axes, size_labels};
use super::tick_format::TickFormatProvider;

/// Inputs of one layout pass.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyInput<'a> {
    pub viewport: Viewport,
    pub sizing: SizingInput<'a>,
    /// Loaded content, used to count the legend shapes next to each title.
    pub content: &'a [ContentItem],
    pub transition: TransitionSettings,
}

/// Runs one full layout pass.
///
/// Label sizes are measured first, axis bands second; positions are then
/// resolved from both and scales are only built from resolved positions.
pub fn assemble_layout<M: TextMeasurer + ?Sized>(
    input: &AssemblyInput<'_>,
    measurer: &mut M,
) -> ChartResult<LayoutFrame> {
    let sizing = &input.sizing;
    let axes = sizing.axes;

    let label_sizes = size_labels(sizing, measurer)?;
    let metrics = size_axes(sizing, label_sizes, measurer)?;
    let ctx = LayoutContext::new(input.viewport, metrics, axes.x.orientation);

    let x_scale = axis_scale(&axes.x, x_axis_range(&ctx))?;
    let x_axis = axis_frame(
        AxisId::X,
        &axes.x,
        x_scale,
        Point::new(x_axis_x(&ctx), x_axis_y(&ctx)),
        x_tick_count(x_axis_width(&ctx)),
        sizing.formats,
    )?;

    let y_count = y_tick_count(y_axis_height(&ctx));
    let y_scale = axis_scale(&axes.y, y_axis_range(&ctx))?;
    let y_axis = axis_frame(
        AxisId::Y,
        &axes.y,
        y_scale,
        Point::new(y_axis_x(&ctx), y_axis_y(&ctx)),
        y_count,
        sizing.formats,
    )?;

    let mut reference_lines = vec![reference_line(&y_axis, y_scale, &x_axis, x_scale)];

    let y2_axis = match axes.get(AxisId::Y2) {
        Some(y2) => {
            let y2_scale = axis_scale(y2, y_axis_range(&ctx))?;
            let frame = axis_frame(
                AxisId::Y2,
                y2,
                y2_scale,
                Point::new(y2_axis_x(&ctx), y2_axis_y(&ctx)),
                y_count,
                sizing.formats,
            )?;
            reference_lines.push(reference_line(&frame, y2_scale, &x_axis, x_scale));
            Some(frame)
        }
        None => None,
    };

    let axis_info_row = if sizing.axis_info_row_labels.is_empty() {
        None
    } else {
        Some(AxisInfoRowFrame {
            orientation: axis_info_row_orientation(axes.x.orientation),
            origin: Point::new(x_axis_x(&ctx), axis_info_row_y(&ctx)),
            range: x_axis_range(&ctx),
            labels: sizing.axis_info_row_labels.to_vec(),
            tick_values: Vec::new(),
            aria_hidden: true,
        })
    };

    let labels = if sizing.show_label {
        label_placements(&ctx, input, y2_axis.is_some())
    } else {
        Vec::new()
    };

    let frame = LayoutFrame {
        viewport: input.viewport,
        metrics,
        x_axis,
        y_axis,
        y2_axis,
        axis_info_row,
        labels,
        reference_lines,
        transition: input.transition,
    };
    debug!(
        x_axis_width = x_axis_width(&ctx),
        ticks = frame.tick_count(),
        labels = frame.labels.len(),
        has_y2 = frame.y2_axis.is_some(),
        "assembled axis layout"
    );
    Ok(frame)
}

fn axis_scale(axis: &AxisDefinition, range: (f64, f64)) -> ChartResult<LinearScale> {
    LinearScale::new(axis.rendering_domain, range, axis.range_rounding)
}

fn axis_frame(
    id: AxisId,
    axis: &AxisDefinition,
    scale: LinearScale,
    origin: Point,
    tick_count: f64,
    formats: &dyn TickFormatProvider,
) -> ChartResult<AxisFrame> {
    let ticks = if axis.show {
        let format = formats.formatter(axis.ticks.format.as_deref(), axis.axis_type)?;
        let values = match axis.ticks.explicit_values() {
            Some(values) => values.to_vec(),
            None => axis_ticks(
                axis.axis_type,
                axis.rendering_domain.lower_limit,
                axis.rendering_domain.upper_limit,
                tick_count,
            ),
        };
        values
            .into_iter()
            .map(|value| AxisTick {
                value,
                offset: scale.map(value),
                label: format(value),
            })
            .collect()
    } else {
        Vec::new()
    };

    Ok(AxisFrame {
        id,
        show: axis.show,
        axis_type: axis.axis_type,
        orientation: axis.orientation,
        origin,
        range: scale.range(),
        domain: axis.domain,
        rendering_domain: axis.rendering_domain,
        range_rounding: axis.range_rounding,
        ticks,
    })
}

fn reference_line(
    vertical: &AxisFrame,
    vertical_scale: LinearScale,
    x_axis: &AxisFrame,
    x_scale: LinearScale,
) -> ReferenceLine {
    let y = vertical.origin.y + vertical_scale.map(0.0);
    let (x_start, x_end) = x_scale.domain();
    ReferenceLine {
        axis: vertical.id,
        start: Point::new(x_axis.origin.x + x_scale.map(x_start), y),
        end: Point::new(x_axis.origin.x + x_scale.map(x_end), y),
        visible: vertical.show && vertical.rendering_domain.straddles_zero(),
    }
}

fn label_placements(
    ctx: &LayoutContext,
    input: &AssemblyInput<'_>,
    has_y2: bool,
) -> Vec<AxisLabelPlacement> {
    let axes = input.sizing.axes;
    let shape_count = |axis: AxisId| {
        input
            .content
            .iter()
            .filter(|item| item.axis == axis)
            .count()
    };
    let mut labels = Vec::with_capacity(3);

    if let Some(text) = &axes.x.label {
        labels.push(AxisLabelPlacement {
            axis: AxisId::X,
            text: text.clone(),
            position: Point::new(x_axis_label_x(ctx), x_axis_label_y(ctx)),
            rotation_deg: rotation_for_axis(AxisId::X),
            shape_origin: None,
        });
    }
    if let Some(text) = &axes.y.label {
        labels.push(AxisLabelPlacement {
            axis: AxisId::Y,
            text: text.clone(),
            position: Point::new(y_axis_label_x(ctx), y_axis_label_y(ctx)),
            rotation_deg: rotation_for_axis(AxisId::Y),
            shape_origin: Some(Point::new(
                y_axis_label_shape_x(ctx),
                y_axis_label_shape_y(ctx, shape_count(AxisId::Y)),
            )),
        });
    }
    let y2_label = axes
        .y2
        .as_ref()
        .filter(|_| has_y2)
        .and_then(|axis| axis.label.as_ref());
    if let Some(text) = y2_label {
        labels.push(AxisLabelPlacement {
            axis: AxisId::Y2,
            text: text.clone(),
            position: Point::new(y2_axis_label_x(ctx), y_axis_label_y(ctx)),
            rotation_deg: rotation_for_axis(AxisId::Y2),
            shape_origin: Some(Point::new(
                y2_axis_label_shape_x(ctx),
                y2_axis_label_shape_y(ctx, shape_count(AxisId::Y2)),
            )),
        });
    }

    labels
}
