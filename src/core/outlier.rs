//! Symmetric outlier stretch for the vertical axes.
//!
//! When data escapes the configured bounds of Y or Y2, the rendered domain
//! grows proportionally around the configured midpoint. Both vertical axes
//! share the largest factor so they stay visually comparable. X is never
//! stretched.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::axis::{AxisDefinition, AxisDomain, AxisSet};

/// Multipliers applied to the half-spans below and above an axis midpoint.
///
/// Both factors are always `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StretchFactor {
    pub lower_limit: f64,
    pub upper_limit: f64,
}

impl StretchFactor {
    pub const IDENTITY: Self = Self {
        lower_limit: 1.0,
        upper_limit: 1.0,
    };

    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }
}

impl Default for StretchFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Ratio of the outlier distance to the bound distance, both measured from
/// the midpoint. Degenerate ratios (zero half-span, NaN) clamp to 1.
fn stretch_ratio(outlier_distance: f64, bound_distance: f64) -> f64 {
    let ratio = (outlier_distance / bound_distance).abs();
    if ratio.is_finite() && ratio > 1.0 {
        ratio
    } else {
        1.0
    }
}

/// Stretch factor of one axis from its configured domain and data range.
#[must_use]
pub fn axis_stretch(axis: &AxisDefinition) -> StretchFactor {
    let domain = axis.domain;
    let midpoint = domain.midpoint();

    let lower_limit = axis.data_range.min.map_or(1.0, |data_min| {
        let min = data_min.min(domain.lower_limit);
        stretch_ratio(midpoint - min, midpoint - domain.lower_limit)
    });
    let upper_limit = axis.data_range.max.map_or(1.0, |data_max| {
        let max = data_max.max(domain.upper_limit);
        stretch_ratio(max - midpoint, domain.upper_limit - midpoint)
    });

    StretchFactor {
        lower_limit,
        upper_limit,
    }
}

/// Shared stretch factor for Y and, when present, Y2: the largest lower and
/// the largest upper factor across both axes.
#[must_use]
pub fn compute_stretch(axes: &AxisSet) -> StretchFactor {
    let mut factors: SmallVec<[StretchFactor; 2]> = SmallVec::new();
    factors.push(axis_stretch(&axes.y));
    if let Some(y2) = axes.y2.as_ref().filter(|_| axes.has_y2_axis()) {
        factors.push(axis_stretch(y2));
    }

    let largest = |pick: fn(&StretchFactor) -> f64| {
        factors
            .iter()
            .map(|factor| OrderedFloat(pick(factor)))
            .max()
            .map_or(1.0, |value| value.into_inner())
    };
    let factor = StretchFactor {
        lower_limit: largest(|factor| factor.lower_limit),
        upper_limit: largest(|factor| factor.upper_limit),
    };
    trace!(
        lower = factor.lower_limit,
        upper = factor.upper_limit,
        axes = factors.len(),
        "computed outlier stretch"
    );
    factor
}

/// Applies `factor` around the midpoint of `domain`.
#[must_use]
pub fn stretch_domain(domain: AxisDomain, factor: StretchFactor) -> AxisDomain {
    let midpoint = domain.midpoint();
    AxisDomain::new(
        midpoint - (midpoint - domain.lower_limit) * factor.lower_limit,
        midpoint + (domain.upper_limit - midpoint) * factor.upper_limit,
    )
}
