use std::sync::Arc;

use tracing::debug;

use crate::core::StretchFactor;
use crate::error::ChartResult;
use crate::render::{Renderer, TextMeasurer};

use super::engine::{AxisEngineState, SharedTickFormatProvider};
use super::tick_format::LocaleTickFormatProvider;
use super::validation::validate_config;
use super::{AxisEngine, ChartConfig};

impl<M: TextMeasurer, R: Renderer> AxisEngine<M, R> {
    /// Creates an engine from validated chart input.
    ///
    /// Tick labels are formatted with the built-in locale provider until
    /// another one is installed with [`Self::with_tick_format_provider`].
    pub fn new(renderer: R, measurer: M, config: ChartConfig) -> ChartResult<Self> {
        validate_config(&config)?;

        let axes = config.resolve_axes()?;
        let padding = config.resolve_padding();
        debug!(
            kind = ?config.kind,
            width = config.viewport.width,
            height = config.viewport.height,
            has_y2 = axes.has_y2_axis(),
            custom_padding = padding.has_custom_padding,
            "create axis engine"
        );

        Ok(Self {
            measurer,
            renderer,
            formats: Arc::new(LocaleTickFormatProvider::new(config.formatting())),
            state: AxisEngineState {
                kind: config.kind,
                viewport: config.viewport,
                padding,
                show_label: config.show_label,
                axes,
                content: Vec::new(),
                axis_info_row_labels: config.axis_info_row_labels,
                transition: config.settings.transition,
                stretch: StretchFactor::IDENTITY,
            },
        })
    }

    #[must_use]
    pub fn with_tick_format_provider(mut self, provider: SharedTickFormatProvider) -> Self {
        self.formats = provider;
        self
    }
}
