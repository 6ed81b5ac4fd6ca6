use tracing::{debug, trace};

use crate::core::ticks::AXIS_STUB_TICK_COUNT;
use crate::core::{
    AxisDefinition, AxisId, AxisLabelSizes, AxisSet, AxisSizes, LayoutMetrics, Padding, axis_ticks,
};
use crate::error::ChartResult;
use crate::render::{MeasureRequest, TextExtent, TextMeasurer, measure_scoped};

use super::axis_position::rotation_for_axis;
use super::tick_format::TickFormatProvider;

/// Reserved Y2 footprint when no Y2 axis is drawn.
pub const Y2_FALLBACK_WIDTH: f64 = 20.0;

/// Everything the sizing pipeline reads.
#[derive(Clone, Copy)]
pub struct SizingInput<'a> {
    pub axes: &'a AxisSet,
    pub padding: Padding,
    pub show_label: bool,
    pub axis_info_row_labels: &'a [String],
    pub formats: &'a dyn TickFormatProvider,
}

impl std::fmt::Debug for SizingInput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SizingInput")
            .field("padding", &self.padding)
            .field("show_label", &self.show_label)
            .field("axis_info_row_labels", &self.axis_info_row_labels)
            .finish_non_exhaustive()
    }
}

/// Measures the axis titles and the info row.
///
/// With labels hidden every title footprint is zero and nothing is
/// measured for them. The info row is independent of `show_label`.
pub fn size_labels<M: TextMeasurer + ?Sized>(
    input: &SizingInput<'_>,
    measurer: &mut M,
) -> ChartResult<AxisLabelSizes> {
    let mut sizes = AxisLabelSizes::default();

    if input.show_label {
        let axes = input.axes;
        if let Some(text) = axes.x.label.as_deref() {
            sizes.x_height = measure_scoped(
                measurer,
                &MeasureRequest::label(text, rotation_for_axis(AxisId::X)),
            )?
            .height;
        }
        if let Some(text) = axes.y.label.as_deref() {
            sizes.y_width = measure_scoped(
                measurer,
                &MeasureRequest::label(text, rotation_for_axis(AxisId::Y)),
            )?
            .width;
        }
        let y2_label = axes
            .get(AxisId::Y2)
            .and_then(|axis| axis.label.as_deref());
        if let Some(text) = y2_label {
            sizes.y2_width = measure_scoped(
                measurer,
                &MeasureRequest::label(text, rotation_for_axis(AxisId::Y2)),
            )?
            .width;
        }
    }

    for text in input
        .axis_info_row_labels
        .iter()
        .filter(|text| !text.is_empty())
    {
        let extent = measure_scoped(measurer, &MeasureRequest::label(text, 0.0))?;
        sizes.info_row_height = sizes.info_row_height.max(extent.height);
    }

    debug!(
        show_label = input.show_label,
        x_height = sizes.x_height,
        y_width = sizes.y_width,
        y2_width = sizes.y2_width,
        info_row_height = sizes.info_row_height,
        "sized axis labels"
    );
    Ok(sizes)
}

/// Sizes the axis bands on top of already measured label sizes.
///
/// Custom padding short-circuits measurement: the bands are read from
/// `left`, `right` and `bottom`.
pub fn size_axes<M: TextMeasurer + ?Sized>(
    input: &SizingInput<'_>,
    label_sizes: AxisLabelSizes,
    measurer: &mut M,
) -> ChartResult<LayoutMetrics> {
    let padding = input.padding;
    let axis_sizes = if padding.has_custom_padding {
        trace!("axis sizes taken from custom padding");
        AxisSizes {
            x: padding.bottom,
            y: padding.left,
            y2: padding.right,
        }
    } else {
        let axes = input.axes;
        let y = stub_extent(&axes.y, input.formats, measurer)?.width + padding.left;
        let y2 = match axes.get(AxisId::Y2) {
            Some(axis) => stub_extent(axis, input.formats, measurer)?.width,
            None => Y2_FALLBACK_WIDTH,
        } + padding.right;
        let x = stub_extent(&axes.x, input.formats, measurer)?.height;
        AxisSizes { x, y, y2 }
    };

    debug!(
        custom_padding = padding.has_custom_padding,
        x = axis_sizes.x,
        y = axis_sizes.y,
        y2 = axis_sizes.y2,
        "sized axes"
    );
    Ok(LayoutMetrics {
        padding,
        label_sizes,
        axis_sizes,
    })
}

/// Footprint of an axis line with its default tick labels. Hidden axes
/// occupy no space and are not measured.
fn stub_extent<M: TextMeasurer + ?Sized>(
    axis: &AxisDefinition,
    formats: &dyn TickFormatProvider,
    measurer: &mut M,
) -> ChartResult<TextExtent> {
    if !axis.show {
        return Ok(TextExtent::default());
    }
    let labels = stub_tick_labels(axis, formats)?;
    measure_scoped(
        measurer,
        &MeasureRequest::axis_stub(axis.orientation, &labels),
    )
}

fn stub_tick_labels(
    axis: &AxisDefinition,
    formats: &dyn TickFormatProvider,
) -> ChartResult<Vec<String>> {
    let format = formats.formatter(axis.ticks.format.as_deref(), axis.axis_type)?;
    let values = match axis.ticks.explicit_values() {
        Some(values) => values.to_vec(),
        None => axis_ticks(
            axis.axis_type,
            axis.rendering_domain.lower_limit,
            axis.rendering_domain.upper_limit,
            AXIS_STUB_TICK_COUNT as f64,
        ),
    };
    Ok(values.into_iter().map(|value| format(value)).collect())
}
