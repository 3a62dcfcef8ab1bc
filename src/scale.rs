//! Scale functions mapping data-space coordinates to device pixels.
//!
//! A pair of linear scales (one per axis) forms the coordinate mapper the
//! signal renderers consult; both must be monotonic for the decimated
//! renderer's point-ordering heuristic to pay off visually.

use crate::error::{Error, Result};

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

/// Linear scale for continuous-to-continuous mapping.
///
/// Values outside the domain extrapolate linearly; the renderers rely on
/// that when projecting samples that sit left or right of the viewport.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// # Errors
    ///
    /// Returns an error if `domain_min` equals `domain_max`.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Result<Self> {
        if (domain.0 - domain.1).abs() < f64::EPSILON {
            return Err(Error::ScaleDomain(
                "Domain min and max cannot be equal".to_string(),
            ));
        }

        Ok(Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        })
    }

    /// Invert the scale (range to domain).
    #[must_use]
    pub fn invert(&self, value: f64) -> f64 {
        let t = (value - self.range_min) / (self.range_max - self.range_min);
        self.domain_min + t * (self.domain_max - self.domain_min)
    }
}

impl Scale<f64, f64> for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 1.0)).expect("operation should succeed");
        assert!((scale.scale(0.0) - 0.0).abs() < 0.001);
        assert!((scale.scale(50.0) - 0.5).abs() < 0.001);
        assert!((scale.scale(100.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_linear_scale_invert() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 1.0)).expect("operation should succeed");
        assert!((scale.invert(0.5) - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_linear_scale_extrapolates() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0)).expect("operation should succeed");
        assert!((scale.scale(-5.0) - -50.0).abs() < 0.001);
        assert!((scale.scale(20.0) - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_inverted_range() {
        // Pixel y axes grow downward, so the y scale maps with a flipped range.
        let scale = LinearScale::new((0.0, 1.0), (100.0, 0.0)).expect("operation should succeed");
        assert!((scale.scale(0.0) - 100.0).abs() < 0.001);
        assert!((scale.scale(1.0) - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_linear_scale_domain_range() {
        let scale =
            LinearScale::new((10.0, 20.0), (100.0, 200.0)).expect("operation should succeed");
        assert_eq!(scale.domain(), (10.0, 20.0));
        assert_eq!(scale.range(), (100.0, 200.0));
    }

    #[test]
    fn test_linear_scale_equal_domain_error() {
        let result = LinearScale::new((5.0, 5.0), (0.0, 1.0));
        assert!(result.is_err());
    }
}
