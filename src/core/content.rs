use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::axis::AxisId;

/// Observed value extent of a content item on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueExtent {
    pub min: f64,
    pub max: f64,
}

impl ValueExtent {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Smallest extent enclosing both.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// True when `other` lies inside `self`, bounds included.
    #[must_use]
    pub fn encloses(self, other: Self) -> bool {
        self.min <= other.min && other.max <= self.max
    }
}

/// Precomputed per-axis extents of one content item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValuesRange(IndexMap<AxisId, ValueExtent>);

impl ValuesRange {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, axis: AxisId, extent: ValueExtent) -> Self {
        self.0.insert(axis, extent);
        self
    }

    pub fn insert(&mut self, axis: AxisId, extent: ValueExtent) {
        self.0.insert(axis, extent);
    }

    /// Extent on `axis`; non-finite extents count as missing.
    #[must_use]
    pub fn get(&self, axis: AxisId) -> Option<ValueExtent> {
        self.0.get(&axis).copied().filter(|extent| extent.is_finite())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Whether a content item stacks with others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ContentKind {
    /// Stacked series: items with the same group sum their extents.
    Grouped { group: String },
    Simple,
}

/// One chart series as seen by the axis engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub key: String,
    /// Vertical axis the series is plotted against.
    pub axis: AxisId,
    pub kind: ContentKind,
    #[serde(default)]
    pub values_range: ValuesRange,
}

impl ContentItem {
    #[must_use]
    pub fn simple(key: impl Into<String>, axis: AxisId, values_range: ValuesRange) -> Self {
        Self {
            key: key.into(),
            axis,
            kind: ContentKind::Simple,
            values_range,
        }
    }

    #[must_use]
    pub fn grouped(
        key: impl Into<String>,
        axis: AxisId,
        group: impl Into<String>,
        values_range: ValuesRange,
    ) -> Self {
        Self {
            key: key.into(),
            axis,
            kind: ContentKind::Grouped {
                group: group.into(),
            },
            values_range,
        }
    }

    #[must_use]
    pub fn group(&self) -> Option<&str> {
        match &self.kind {
            ContentKind::Grouped { group } => Some(group),
            ContentKind::Simple => None,
        }
    }
}
