use crate::error::ChartResult;
use crate::render::{LayoutFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_tick_count: usize,
    pub last_label_count: usize,
    pub last_visible_reference_lines: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &LayoutFrame) -> ChartResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_tick_count = frame.tick_count();
        self.last_label_count = frame.labels.len();
        self.last_visible_reference_lines = frame
            .reference_lines
            .iter()
            .filter(|line| line.visible)
            .count();
        Ok(())
    }
}
