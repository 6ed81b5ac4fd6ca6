//! Measurement capability used by the sizing pipeline.
//!
//! The engine decides what has to be measured (an axis title, an axis stub
//! with its tick labels) and when; backends answer with a pixel footprint.
//! Backends that render into a throwaway surface acquire it in
//! [`TextMeasurer::acquire_surface`] and drop it in
//! [`TextMeasurer::release_surface`]; the engine only measures through a
//! [`MeasurementScope`], which releases on every path including errors.

use crate::core::AxisOrientation;
use crate::error::ChartResult;

/// Pixel footprint of a measured element (its axis-aligned bounding box).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

impl TextExtent {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Bounding box of this extent rotated by `rotation_deg`.
    #[must_use]
    pub fn rotated(self, rotation_deg: f64) -> Self {
        let radians = rotation_deg.to_radians();
        let (sin, cos) = (radians.sin().abs(), radians.cos().abs());
        Self {
            width: self.width * cos + self.height * sin,
            height: self.width * sin + self.height * cos,
        }
    }
}

/// What to render on the measurement surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureContent<'a> {
    /// An axis title.
    Label { text: &'a str },
    /// An axis line with ticks and the given formatted tick labels.
    AxisStub {
        orientation: AxisOrientation,
        tick_labels: &'a [String],
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureRequest<'a> {
    pub content: MeasureContent<'a>,
    /// Rotation applied to the content before reading its bounding box.
    pub rotation_deg: f64,
}

impl<'a> MeasureRequest<'a> {
    #[must_use]
    pub const fn label(text: &'a str, rotation_deg: f64) -> Self {
        Self {
            content: MeasureContent::Label { text },
            rotation_deg,
        }
    }

    #[must_use]
    pub const fn axis_stub(orientation: AxisOrientation, tick_labels: &'a [String]) -> Self {
        Self {
            content: MeasureContent::AxisStub {
                orientation,
                tick_labels,
            },
            rotation_deg: 0.0,
        }
    }
}

/// Contract implemented by any measurement backend.
pub trait TextMeasurer {
    /// Footprint of `request` rendered invisibly on the current surface.
    fn measure(&mut self, request: &MeasureRequest<'_>) -> ChartResult<TextExtent>;

    fn acquire_surface(&mut self) -> ChartResult<()> {
        Ok(())
    }

    fn release_surface(&mut self) {}
}

/// A measurement surface held for the lifetime of the scope.
pub struct MeasurementScope<'a, M: TextMeasurer + ?Sized> {
    measurer: &'a mut M,
}

impl<'a, M: TextMeasurer + ?Sized> MeasurementScope<'a, M> {
    pub fn acquire(measurer: &'a mut M) -> ChartResult<Self> {
        measurer.acquire_surface()?;
        Ok(Self { measurer })
    }

    pub fn measure(&mut self, request: &MeasureRequest<'_>) -> ChartResult<TextExtent> {
        self.measurer.measure(request)
    }
}

impl<M: TextMeasurer + ?Sized> Drop for MeasurementScope<'_, M> {
    fn drop(&mut self) {
        self.measurer.release_surface();
    }
}

impl<M: TextMeasurer + ?Sized> std::fmt::Debug for MeasurementScope<'_, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeasurementScope").finish_non_exhaustive()
    }
}

/// Measures `request` on a freshly acquired surface that is released before
/// returning.
pub fn measure_scoped<M: TextMeasurer + ?Sized>(
    measurer: &mut M,
    request: &MeasureRequest<'_>,
) -> ChartResult<TextExtent> {
    let mut scope = MeasurementScope::acquire(measurer)?;
    scope.measure(request)
}

/// Deterministic, backend-free measurer based on per-glyph width classes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicTextMeasurer {
    pub label_font_size_px: f64,
    pub tick_font_size_px: f64,
    pub tick_size_px: f64,
    pub tick_padding_px: f64,
    pub line_height: f64,
}

impl Default for HeuristicTextMeasurer {
    fn default() -> Self {
        Self {
            label_font_size_px: 12.0,
            tick_font_size_px: 10.0,
            tick_size_px: 6.0,
            tick_padding_px: 3.0,
            line_height: 1.2,
        }
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&mut self, request: &MeasureRequest<'_>) -> ChartResult<TextExtent> {
        let extent = match request.content {
            MeasureContent::Label { text } => TextExtent::new(
                estimate_text_width_px(text, self.label_font_size_px),
                self.label_font_size_px * self.line_height,
            ),
            MeasureContent::AxisStub {
                orientation,
                tick_labels,
            } => {
                let line_px = self.tick_font_size_px * self.line_height;
                let tick_band = self.tick_size_px + self.tick_padding_px;
                let widest = tick_labels
                    .iter()
                    .map(|label| estimate_text_width_px(label, self.tick_font_size_px))
                    .fold(0.0, f64::max);
                if orientation.is_horizontal() {
                    let total_width = tick_labels
                        .iter()
                        .map(|label| estimate_text_width_px(label, self.tick_font_size_px))
                        .sum();
                    TextExtent::new(total_width, tick_band + line_px)
                } else {
                    TextExtent::new(tick_band + widest, line_px * tick_labels.len() as f64)
                }
            }
        };
        Ok(extent.rotated(request.rotation_deg))
    }
}

/// Width estimate for `text` at `font_size_px`, independent of any font
/// backend.
#[must_use]
pub fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' | ':' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}
