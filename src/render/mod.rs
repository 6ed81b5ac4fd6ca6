mod frame;
mod measure;
mod null_renderer;

pub use frame::{
    AxisFrame, AxisInfoRowFrame, AxisLabelPlacement, AxisTick, LayoutFrame, ReferenceLine,
};
pub use measure::{
    HeuristicTextMeasurer, MeasureContent, MeasureRequest, MeasurementScope, TextExtent,
    TextMeasurer, estimate_text_width_px, measure_scoped,
};
pub use null_renderer::NullRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully resolved `LayoutFrame` so drawing code never
/// re-derives axis geometry.
pub trait Renderer {
    fn render(&mut self, frame: &LayoutFrame) -> ChartResult<()>;
}
