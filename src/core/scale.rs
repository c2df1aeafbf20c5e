use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Affine mapping from a numeric domain onto a pixel range.
///
/// The range may be inverted (`extent -> 0`) for vertical axes because pixel
/// space grows downward. A degenerate domain (`start == end`) maps every input
/// to the midpoint of the range instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Left-to-right scale over `[0, extent]`.
    pub fn horizontal(domain_start: f64, domain_end: f64, extent: f64) -> ChartResult<Self> {
        Self::new((domain_start, domain_end), (0.0, extent))
    }

    /// Bottom-to-top scale over `[extent, 0]`.
    pub fn vertical(domain_start: f64, domain_end: f64, extent: f64) -> ChartResult<Self> {
        Self::new((domain_start, domain_end), (extent, 0.0))
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    #[must_use]
    pub fn range_midpoint(self) -> f64 {
        (self.range_start + self.range_end) * 0.5
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return self.range_midpoint();
        }
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if self.is_degenerate() || span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}

/// Evenly spaced slots over a pixel range, one per category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    count: usize,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// `padding` is applied both between bands and at both outer edges, as a
    /// ratio of the step in `[0, 1)`.
    pub fn new(count: usize, range: (f64, f64), padding: f64) -> ChartResult<Self> {
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }
        let (range_start, range_end) = range;
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "band range must be finite".to_owned(),
            ));
        }

        let n = count as f64;
        let span = range_end - range_start;
        let step = span / (n - padding + padding * 2.0).max(1.0);
        let start = range_start + (span - step * (n - padding)) * 0.5;
        Ok(Self {
            count,
            start,
            step,
            bandwidth: step * (1.0 - padding),
        })
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn step(self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn bandwidth(self) -> f64 {
        self.bandwidth
    }

    /// Leading edge of band `index`.
    #[must_use]
    pub fn position(self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }

    #[must_use]
    pub fn center(self, index: usize) -> f64 {
        self.position(index) + self.bandwidth * 0.5
    }
}

/// How a chart derives its value domain from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum ValueDomain {
    /// Snapshot minimum to snapshot maximum.
    #[default]
    Data,
    /// Always includes zero, so bars grow from a shared baseline.
    ZeroBased,
    Fixed { min: f64, max: f64 },
}

impl ValueDomain {
    #[must_use]
    pub fn resolve(self, extent: Option<(f64, f64)>) -> (f64, f64) {
        match self {
            Self::Data => extent.unwrap_or((0.0, 0.0)),
            Self::ZeroBased => {
                let (min, max) = extent.unwrap_or((0.0, 0.0));
                (min.min(0.0), max.max(0.0))
            }
            Self::Fixed { min, max } => (min, max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BandScale, LinearScale, ValueDomain};

    #[test]
    fn vertical_scale_is_inverted() {
        let scale = LinearScale::vertical(0.0, 1.0, 360.0).expect("scale");
        assert_eq!(scale.map(0.0), 360.0);
        assert_eq!(scale.map(1.0), 0.0);
    }

    #[test]
    fn band_scale_matches_unpadded_layout() {
        let band = BandScale::new(4, (0.0, 400.0), 0.0).expect("band");
        assert_eq!(band.step(), 100.0);
        assert_eq!(band.bandwidth(), 100.0);
        assert_eq!(band.position(2), 200.0);
        assert_eq!(band.center(0), 50.0);
    }

    #[test]
    fn zero_based_domain_includes_baseline() {
        assert_eq!(ValueDomain::ZeroBased.resolve(Some((5.0, 9.0))), (0.0, 9.0));
        assert_eq!(ValueDomain::Data.resolve(None), (0.0, 0.0));
    }
}
