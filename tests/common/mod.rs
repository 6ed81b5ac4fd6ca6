#![allow(dead_code)]

use chart_axes::core::{AxisId, ContentItem, ValueExtent, ValuesRange};
use chart_axes::error::{ChartError, ChartResult};
use chart_axes::render::{MeasureContent, MeasureRequest, TextExtent, TextMeasurer};

pub const LABEL_CHAR_WIDTH: f64 = 7.0;
pub const LINE_HEIGHT: f64 = 12.0;
pub const VERTICAL_STUB_WIDTH: f64 = 40.0;
pub const HORIZONTAL_STUB_HEIGHT: f64 = 20.0;

/// Measurer with fixed, easy-to-predict metrics that records every call and
/// tracks surface acquisition.
#[derive(Debug, Default)]
pub struct RecordingMeasurer {
    pub measure_calls: usize,
    pub acquired: usize,
    pub released: usize,
    pub fail_on_call: Option<usize>,
    pub requests: Vec<String>,
}

impl RecordingMeasurer {
    pub fn failing_on(call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            ..Self::default()
        }
    }

    pub fn open_surfaces(&self) -> usize {
        self.acquired - self.released
    }
}

impl TextMeasurer for RecordingMeasurer {
    fn measure(&mut self, request: &MeasureRequest<'_>) -> ChartResult<TextExtent> {
        self.measure_calls += 1;
        if self.fail_on_call == Some(self.measure_calls) {
            return Err(ChartError::Measurement("surface lost".to_owned()));
        }
        let extent = match request.content {
            MeasureContent::Label { text } => {
                self.requests.push(format!("label:{text}"));
                TextExtent::new(text.chars().count() as f64 * LABEL_CHAR_WIDTH, LINE_HEIGHT)
            }
            MeasureContent::AxisStub {
                orientation,
                tick_labels,
            } => {
                self.requests.push(format!("stub:{orientation:?}"));
                if orientation.is_horizontal() {
                    TextExtent::new(tick_labels.len() as f64 * 30.0, HORIZONTAL_STUB_HEIGHT)
                } else {
                    TextExtent::new(VERTICAL_STUB_WIDTH, tick_labels.len() as f64 * LINE_HEIGHT)
                }
            }
        };
        Ok(extent.rotated(request.rotation_deg))
    }

    fn acquire_surface(&mut self) -> ChartResult<()> {
        self.acquired += 1;
        Ok(())
    }

    fn release_surface(&mut self) {
        self.released += 1;
    }
}

pub fn simple(key: &str, axis: AxisId, min: f64, max: f64) -> ContentItem {
    ContentItem::simple(
        key,
        axis,
        ValuesRange::new().with(axis, ValueExtent::new(min, max)),
    )
}

pub fn grouped(key: &str, axis: AxisId, group: &str, min: f64, max: f64) -> ContentItem {
    ContentItem::grouped(
        key,
        axis,
        group,
        ValuesRange::new().with(axis, ValueExtent::new(min, max)),
    )
}
