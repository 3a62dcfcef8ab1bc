//! Uniformly-sampled signal data.
//!
//! A [`Series`] owns an immutable sample array plus the geometry that places
//! it in data space: a sample rate (spacing of consecutive samples in the
//! independent variable) and x/y offsets. Visual attributes (color, stroke
//! width, marker size) ride along for the drawing layer and never influence
//! the rendering math.

use std::fmt;
use std::sync::Arc;

use crate::color::Rgba;
use crate::error::{Error, Result};

/// Axis-aligned bounding box of a full series in data space.
///
/// Produced by [`Series::limits`]; used by owning plots for auto-scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesLimits {
    /// Left edge: the series x offset.
    pub x_min: f64,
    /// Right edge: `sample_interval * len + x_offset`.
    pub x_max: f64,
    /// Smallest sample value plus the y offset.
    pub y_min: f64,
    /// Largest sample value plus the y offset.
    pub y_max: f64,
}

/// An ordered, uniformly-spaced sequence of real-valued samples.
///
/// The backing array is immutable for the lifetime of the value; replace it
/// wholesale with [`Series::replace_values`] between render calls. Sample `i`
/// lives at data coordinate `(i * sample_interval + x_offset, values[i] + y_offset)`.
#[derive(Debug, Clone)]
pub struct Series {
    pub(crate) values: Arc<[f64]>,
    pub(crate) sample_rate: f64,
    pub(crate) sample_interval: f64,
    pub(crate) x_offset: f64,
    pub(crate) y_offset: f64,
    pub(crate) label: String,
    pub(crate) color: Rgba,
    pub(crate) line_width: f32,
    pub(crate) marker_size: f32,
}

impl Series {
    /// Create a series from a sample array and a sample rate.
    ///
    /// The sample interval is derived as `1 / sample_rate`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] for a zero-length array and
    /// [`Error::InvalidSampleRate`] when the rate is not a positive finite
    /// number; a non-positive rate would otherwise yield an infinite or
    /// negative sample interval and nonsensical geometry downstream.
    pub fn new(values: impl Into<Arc<[f64]>>, sample_rate: f64) -> Result<Self> {
        let values = values.into();
        if values.is_empty() {
            return Err(Error::EmptyData);
        }
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(Error::InvalidSampleRate(sample_rate));
        }

        Ok(Self {
            values,
            sample_rate,
            sample_interval: 1.0 / sample_rate,
            x_offset: 0.0,
            y_offset: 0.0,
            label: String::new(),
            color: Rgba::BLUE,
            line_width: 1.0,
            marker_size: 3.0,
        })
    }

    /// Set the horizontal translation applied to every sample.
    #[must_use]
    pub fn x_offset(mut self, offset: f64) -> Self {
        self.x_offset = offset;
        self
    }

    /// Set the vertical translation applied to every sample.
    #[must_use]
    pub fn y_offset(mut self, offset: f64) -> Self {
        self.y_offset = offset;
        self
    }

    /// Set the series label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the stroke and marker color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Set the stroke width in pixels.
    #[must_use]
    pub fn line_width(mut self, width: f32) -> Self {
        self.line_width = width.max(0.5);
        self
    }

    /// Set the marker diameter in pixels.
    #[must_use]
    pub fn marker_size(mut self, size: f32) -> Self {
        self.marker_size = size.max(0.0);
        self
    }

    /// Replace the backing array, keeping geometry and visual attributes.
    ///
    /// Must not race with an in-flight render of this series; the caller
    /// owns that discipline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] for a zero-length replacement.
    pub fn replace_values(&mut self, values: impl Into<Arc<[f64]>>) -> Result<()> {
        let values = values.into();
        if values.is_empty() {
            return Err(Error::EmptyData);
        }
        self.values = values;
        Ok(())
    }

    /// The backing sample array.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no samples. Construction forbids this, so
    /// the method exists only to satisfy the `len`/`is_empty` convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Samples per unit of the independent variable.
    #[must_use]
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Spacing between consecutive samples (`1 / sample_rate`).
    #[must_use]
    pub fn sample_interval(&self) -> f64 {
        self.sample_interval
    }

    /// Data-space x coordinate of sample `i`.
    #[must_use]
    pub fn sample_x(&self, i: usize) -> f64 {
        i as f64 * self.sample_interval + self.x_offset
    }

    /// Axis-aligned bounding box of the whole series.
    ///
    /// Pure function of the series; ignores any viewport. O(N).
    #[must_use]
    pub fn limits(&self) -> SeriesLimits {
        let mut y_min = self.values[0];
        let mut y_max = self.values[0];
        for &v in self.values.iter() {
            if v < y_min {
                y_min = v;
            }
            if v > y_max {
                y_max = v;
            }
        }

        SeriesLimits {
            x_min: self.x_offset,
            x_max: self.sample_interval * self.values.len() as f64 + self.x_offset,
            y_min: y_min + self.y_offset,
            y_max: y_max + self.y_offset,
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.label.is_empty() {
            write!(f, "Series with {} points", self.len())
        } else {
            write!(f, "Series \"{}\" with {} points", self.label, self.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_rejected() {
        let result = Series::new(Vec::<f64>::new(), 1.0);
        assert!(matches!(result, Err(Error::EmptyData)));
    }

    #[test]
    fn test_zero_sample_rate_rejected() {
        assert!(matches!(
            Series::new(vec![1.0], 0.0),
            Err(Error::InvalidSampleRate(_))
        ));
    }

    #[test]
    fn test_negative_sample_rate_rejected() {
        assert!(Series::new(vec![1.0], -44100.0).is_err());
    }

    #[test]
    fn test_non_finite_sample_rate_rejected() {
        assert!(Series::new(vec![1.0], f64::NAN).is_err());
        assert!(Series::new(vec![1.0], f64::INFINITY).is_err());
    }

    #[test]
    fn test_sample_interval_from_rate() {
        let series = Series::new(vec![0.0; 10], 100.0).unwrap();
        assert!((series.sample_interval() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_sample_x_positions() {
        let series = Series::new(vec![0.0; 4], 2.0).unwrap().x_offset(10.0);
        assert!((series.sample_x(0) - 10.0).abs() < 1e-12);
        assert!((series.sample_x(3) - 11.5).abs() < 1e-12);
    }

    #[test]
    fn test_limits_brackets_data() {
        let series = Series::new(vec![3.0, -2.0, 5.0, 0.0], 1.0)
            .unwrap()
            .x_offset(100.0)
            .y_offset(1.0);

        let limits = series.limits();
        assert!((limits.x_min - 100.0).abs() < 1e-12);
        assert!((limits.x_max - 104.0).abs() < 1e-12);
        assert!((limits.y_min - -1.0).abs() < 1e-12);
        assert!((limits.y_max - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_limits_single_sample() {
        let series = Series::new(vec![7.0], 4.0).unwrap();
        let limits = series.limits();
        assert!((limits.x_min - 0.0).abs() < 1e-12);
        assert!((limits.x_max - 0.25).abs() < 1e-12);
        assert!((limits.y_min - 7.0).abs() < 1e-12);
        assert!((limits.y_max - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_replace_values() {
        let mut series = Series::new(vec![1.0, 2.0], 1.0).unwrap();
        series.replace_values(vec![5.0, 6.0, 7.0]).unwrap();
        assert_eq!(series.len(), 3);
        assert!(series.replace_values(Vec::<f64>::new()).is_err());
    }

    #[test]
    fn test_display() {
        let series = Series::new(vec![0.0; 8], 1.0).unwrap();
        assert_eq!(series.to_string(), "Series with 8 points");

        let labeled = Series::new(vec![0.0; 8], 1.0).unwrap().label("ch0");
        assert_eq!(labeled.to_string(), "Series \"ch0\" with 8 points");
    }

    #[test]
    fn test_builder_attributes() {
        let series = Series::new(vec![0.0], 1.0)
            .unwrap()
            .color(Rgba::RED)
            .line_width(2.0)
            .marker_size(5.0);

        assert_eq!(series.color, Rgba::RED);
        assert!((series.line_width - 2.0).abs() < f32::EPSILON);
        assert!((series.marker_size - 5.0).abs() < f32::EPSILON);
    }
}
