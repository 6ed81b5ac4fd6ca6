use serde::{Deserialize, Serialize};

/// Canvas dimensions in pixels.
///
/// `width` is the full canvas width shared by both vertical axes and the
/// plot; `height` is the plotted height (the span of the vertical axes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// A pixel position on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Resolved canvas padding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    /// Set when the host supplied padding explicitly. Axis sizes are then
    /// read from the padding instead of being measured.
    pub has_custom_padding: bool,
}

impl Padding {
    pub const DEFAULT_TOP: f64 = 10.0;
    pub const DEFAULT_BOTTOM: f64 = 5.0;
    pub const DEFAULT_LEFT: f64 = 30.0;
    pub const DEFAULT_RIGHT: f64 = 50.0;
    /// Left padding reserved for Gantt track labels.
    pub const TRACK_LABEL_WIDTH: f64 = 250.0;

    /// Generic chart padding.
    #[must_use]
    pub const fn chart_default() -> Self {
        Self {
            top: Self::DEFAULT_TOP,
            bottom: Self::DEFAULT_BOTTOM,
            left: Self::DEFAULT_LEFT,
            right: Self::DEFAULT_RIGHT,
            has_custom_padding: false,
        }
    }

    /// Gantt padding: same as the generic default except the left side,
    /// which reserves the track label column.
    #[must_use]
    pub const fn track_default() -> Self {
        Self {
            left: Self::TRACK_LABEL_WIDTH,
            ..Self::chart_default()
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::chart_default()
    }
}

/// Animation timing. Opaque to layout; carried through to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionSettings {
    pub duration_ms: u64,
    pub delay_ms: u64,
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            duration_ms: 250,
            delay_ms: 0,
        }
    }
}
