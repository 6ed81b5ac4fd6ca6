use tracing::{debug, trace, warn};

use crate::core::{AxisId, ContentItem, compute_stretch, update_axis_data_range};
use crate::error::{ChartError, ChartResult};
use crate::render::{Renderer, TextMeasurer};

use super::AxisEngine;

const TRACKED_AXES: [AxisId; 3] = [AxisId::X, AxisId::Y, AxisId::Y2];

impl<M: TextMeasurer, R: Renderer> AxisEngine<M, R> {
    /// Adds a content item and refreshes data ranges and the stretch.
    ///
    /// Returns whether any axis range changed shape, i.e. whether the host
    /// should run a new layout pass.
    pub fn load_content(&mut self, item: ContentItem) -> ChartResult<bool> {
        if self
            .state
            .content
            .iter()
            .any(|existing| existing.key == item.key)
        {
            warn!(key = %item.key, "rejecting duplicate content key");
            return Err(ChartError::InvalidData(format!(
                "content key `{}` is already loaded",
                item.key
            )));
        }

        debug!(key = %item.key, axis = item.axis.as_str(), group = ?item.group(), "load content");
        self.state.content.push(item);
        Ok(self.refresh_ranges())
    }

    /// Loads several items; stops at the first rejected one.
    pub fn load_contents(
        &mut self,
        items: impl IntoIterator<Item = ContentItem>,
    ) -> ChartResult<bool> {
        let mut modified = false;
        for item in items {
            modified |= self.load_content(item)?;
        }
        Ok(modified)
    }

    /// Removes the content item with `key`.
    ///
    /// Tracked ranges never shrink, so the rendering domain stays stable;
    /// the returned flag is usually false.
    pub fn unload_content(&mut self, key: &str) -> ChartResult<bool> {
        let Some(index) = self.state.content.iter().position(|item| item.key == key) else {
            return Err(ChartError::InvalidData(format!(
                "content key `{key}` is not loaded"
            )));
        };
        let removed = self.state.content.remove(index);
        debug!(key = %removed.key, remaining = self.state.content.len(), "unload content");
        Ok(self.refresh_ranges())
    }

    fn refresh_ranges(&mut self) -> bool {
        let state = &mut self.state;
        let mut modified = false;
        for axis in TRACKED_AXES {
            modified |= update_axis_data_range(&mut state.axes, axis, &state.content);
        }

        let stretch = compute_stretch(&state.axes);
        state.axes.apply_stretch(stretch);
        if stretch != state.stretch {
            trace!(
                lower = stretch.lower_limit,
                upper = stretch.upper_limit,
                "outlier stretch changed"
            );
        }
        state.stretch = stretch;
        modified
    }
}
