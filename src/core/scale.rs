use serde::{Deserialize, Serialize};

use crate::core::axis::AxisDomain;
use crate::error::{ChartError, ChartResult};

/// Linear mapping from an axis domain to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    round: bool,
}

impl LinearScale {
    pub fn new(domain: AxisDomain, range: (f64, f64), round: bool) -> ChartResult<Self> {
        if !domain.lower_limit.is_finite() || !domain.upper_limit.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.lower_limit,
            domain_end: domain.upper_limit,
            range_start: range.0,
            range_end: range.1,
            round,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value to pixels. A zero-width domain maps every value
    /// to the range start.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = if span == 0.0 {
            0.0
        } else {
            (value - self.domain_start) / span
        };
        let pixel = self.range_start + normalized * (self.range_end - self.range_start);
        if self.round { pixel.round() } else { pixel }
    }

    /// Maps a pixel back to the domain. A zero-width range maps every pixel
    /// to the domain start.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        let normalized = if span == 0.0 {
            0.0
        } else {
            (pixel - self.range_start) / span
        };
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}
