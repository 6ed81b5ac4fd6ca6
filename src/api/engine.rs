use std::sync::Arc;

use tracing::debug;

use crate::core::{AxisSet, ContentItem, Padding, StretchFactor, TransitionSettings, Viewport};
use crate::error::ChartResult;
use crate::render::{LayoutFrame, NullRenderer, Renderer, TextMeasurer};

use super::axis_scale_assembler::{AssemblyInput, assemble_layout};
use super::axis_sizing::SizingInput;
use super::engine_config::ChartKind;
use super::tick_format::TickFormatProvider;

/// Shared tick formatting collaborator.
pub type SharedTickFormatProvider = Arc<dyn TickFormatProvider + Send + Sync>;

/// Mutable chart state owned by one engine.
#[derive(Debug, Clone)]
pub(super) struct AxisEngineState {
    pub(super) kind: ChartKind,
    pub(super) viewport: Viewport,
    pub(super) padding: Padding,
    pub(super) show_label: bool,
    pub(super) axes: AxisSet,
    pub(super) content: Vec<ContentItem>,
    pub(super) axis_info_row_labels: Vec<String>,
    pub(super) transition: TransitionSettings,
    pub(super) stretch: StretchFactor,
}

/// Axis layout facade consumed by host applications.
///
/// `AxisEngine` owns the axis store and the loaded content, keeps data
/// ranges and the outlier stretch current on every content change, and
/// runs the full sizing and positioning pipeline on every layout pass.
pub struct AxisEngine<M: TextMeasurer, R: Renderer = NullRenderer> {
    pub(super) measurer: M,
    pub(super) renderer: R,
    pub(super) formats: SharedTickFormatProvider,
    pub(super) state: AxisEngineState,
}

impl<M: TextMeasurer, R: Renderer> AxisEngine<M, R> {
    /// Computes the layout frame for the current state.
    ///
    /// Every call re-runs the whole pipeline; nothing is carried over from
    /// previous passes.
    pub fn layout(&mut self) -> ChartResult<LayoutFrame> {
        let state = &self.state;
        let input = AssemblyInput {
            viewport: state.viewport,
            sizing: SizingInput {
                axes: &state.axes,
                padding: state.padding,
                show_label: state.show_label,
                axis_info_row_labels: &state.axis_info_row_labels,
                formats: self.formats.as_ref(),
            },
            content: &state.content,
            transition: state.transition,
        };
        assemble_layout(&input, &mut self.measurer)
    }

    /// Lays out and hands the frame to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.layout()?;
        debug!(ticks = frame.tick_count(), "render axis layout");
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

impl<M: TextMeasurer + std::fmt::Debug, R: Renderer + std::fmt::Debug> std::fmt::Debug
    for AxisEngine<M, R>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AxisEngine")
            .field("measurer", &self.measurer)
            .field("renderer", &self.renderer)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
