use tracing::debug;

use crate::core::{AxisDomain, AxisId, AxisSet, ContentItem, Padding, StretchFactor, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Renderer, TextMeasurer};

use super::AxisEngine;
use super::engine_config::ChartKind;

impl<M: TextMeasurer, R: Renderer> AxisEngine<M, R> {
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.state.kind
    }

    #[must_use]
    pub fn axes(&self) -> &AxisSet {
        &self.state.axes
    }

    #[must_use]
    pub fn content(&self) -> &[ContentItem] {
        &self.state.content
    }

    #[must_use]
    pub fn padding(&self) -> Padding {
        self.state.padding
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.state.viewport
    }

    /// Updates the canvas size. The next layout pass picks it up; reference
    /// line visibility is re-derived then as well.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        debug!(
            width = viewport.width,
            height = viewport.height,
            "resize axis engine"
        );
        self.state.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn show_label(&self) -> bool {
        self.state.show_label
    }

    pub fn set_show_label(&mut self, show_label: bool) {
        self.state.show_label = show_label;
    }

    /// Stretch currently applied to the vertical axes.
    #[must_use]
    pub fn stretch_factor(&self) -> StretchFactor {
        self.state.stretch
    }

    /// Domain drawn for `axis`, or `None` for an absent or hidden Y2.
    #[must_use]
    pub fn rendering_domain(&self, axis: AxisId) -> Option<AxisDomain> {
        self.state
            .axes
            .get(axis)
            .map(|definition| definition.rendering_domain)
    }

    #[must_use]
    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    pub fn measurer_mut(&mut self) -> &mut M {
        &mut self.measurer
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
