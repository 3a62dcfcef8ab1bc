//! Adaptive multi-resolution signal rendering.
//!
//! One draw call classifies the series/viewport combination into one of
//! three regimes and dispatches to exactly one renderer:
//!
//! - **Single-column**: the whole series projects to at most one horizontal
//!   pixel; draw one vertical segment spanning the global extrema.
//! - **Low-density**: fewer than one sample per pixel column; draw every
//!   visible sample as a polyline vertex with a marker.
//! - **High-density**: multiple samples per pixel column; reduce each
//!   column's window to its extrema and draw a single connected polyline,
//!   bounding the work at O(canvas width) regardless of sample count.
//!
//! The decimated path orders each column's two points to minimize direction
//! reversals between adjacent columns, which keeps the connected polyline
//! free of crossing artifacts.

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::reduce::{LinearScanReducer, RangeReducer};
use crate::render::{draw_point, draw_polyline};
use crate::series::Series;
use crate::viewport::{PixelMapper, Viewport};

// ============================================================================
// Density Classification
// ============================================================================

/// The rendering regime chosen for one draw call, with its parameters.
///
/// Transient: computed from a series/viewport pair at the start of a render
/// call and discarded when the call returns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderPlan {
    /// The series' projected horizontal span is at most one pixel.
    SingleColumn,
    /// Fewer than one sample per pixel column; every visible sample is drawn.
    LowDensity {
        /// Sample index under the viewport's left edge (may be negative).
        index1: i64,
        /// Sample index just past the viewport's right edge.
        index2: i64,
    },
    /// More than one sample per pixel column; decimate to column extrema.
    HighDensity {
        /// Fractional sample index under the viewport's left edge.
        offset_points: f64,
        /// Average number of samples covered by one pixel column.
        column_point_count: f64,
    },
}

/// Choose the rendering regime for one series/viewport combination.
///
/// The decision is made in priority order: a series whose projected width
/// collapses to a single pixel is drawn as one vertical segment no matter
/// how many samples it holds; otherwise the sample-per-column ratio picks
/// between the decimated and the per-sample path.
#[must_use]
pub fn classify(series: &Series, viewport: &Viewport, mapper: &PixelMapper) -> RenderPlan {
    let n = series.len();
    let width_px = f64::from(viewport.width_px);

    let data_span = n as f64 * series.sample_interval;
    let column_span = viewport.data_width() / width_px;
    let column_point_count = (column_span / data_span) * n as f64;
    let offset_points = (viewport.x_min - series.x_offset) / series.sample_interval;

    let index1 = offset_points.floor() as i64;
    let index2 = (offset_points + column_point_count * (width_px + 1.0)).floor() as i64;
    let points_per_px_column = index2.saturating_sub(index1) as f64 / width_px;

    let first = mapper.project_x(series.sample_x(0));
    let last = mapper.project_x(series.sample_x(n - 1));
    let data_width_px = f64::from(last - first);

    if data_width_px <= 1.0 {
        RenderPlan::SingleColumn
    } else if points_per_px_column > 1.0 {
        RenderPlan::HighDensity {
            offset_points,
            column_point_count,
        }
    } else {
        RenderPlan::LowDensity { index1, index2 }
    }
}

// ============================================================================
// Signal Plot
// ============================================================================

/// Renderer for one uniformly-sampled series.
///
/// Holds the series and the range-reduction strategy; the viewport arrives
/// fresh on every [`SignalPlot::render`] call. Rendering is synchronous and
/// touches no state outside the target framebuffer, so repeated calls with
/// the same inputs produce bit-identical output.
#[derive(Debug)]
pub struct SignalPlot {
    series: Series,
    reducer: Box<dyn RangeReducer>,
}

impl SignalPlot {
    /// Create a plot for the given series with the linear-scan reducer.
    #[must_use]
    pub fn new(series: Series) -> Self {
        Self {
            series,
            reducer: Box::new(LinearScanReducer),
        }
    }

    /// Replace the range-reduction strategy.
    ///
    /// Any implementation returning the linear scan's exact results for
    /// every window is a drop-in substitute; see
    /// [`BlockedReducer`](crate::reduce::BlockedReducer) for the
    /// precomputed option suited to repeated renders of large series.
    #[must_use]
    pub fn reducer(mut self, reducer: impl RangeReducer + 'static) -> Self {
        self.reducer = Box::new(reducer);
        self
    }

    /// The series being rendered.
    #[must_use]
    pub fn series(&self) -> &Series {
        &self.series
    }

    /// Compute the regime this plot would use for the given viewport.
    ///
    /// # Errors
    ///
    /// Returns an error if the viewport's data ranges are degenerate.
    pub fn plan(&self, viewport: &Viewport) -> Result<RenderPlan> {
        let mapper = viewport.mapper()?;
        Ok(classify(&self.series, viewport, &mapper))
    }

    /// Render the series onto a framebuffer through the given viewport.
    ///
    /// Exactly one regime runs per call. A viewport panned entirely away
    /// from the data degrades to drawing nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the viewport's data ranges are degenerate.
    pub fn render(&self, fb: &mut Framebuffer, viewport: &Viewport) -> Result<()> {
        let mapper = viewport.mapper()?;

        match classify(&self.series, viewport, &mapper) {
            RenderPlan::SingleColumn => self.render_single_column(fb, &mapper),
            RenderPlan::LowDensity { index1, index2 } => {
                self.render_low_density(fb, &mapper, index1, index2);
            }
            RenderPlan::HighDensity {
                offset_points,
                column_point_count,
            } => {
                self.render_high_density(fb, viewport, &mapper, offset_points, column_point_count);
            }
        }

        Ok(())
    }

    /// Render to a new white framebuffer sized from the viewport.
    ///
    /// # Errors
    ///
    /// Returns an error if the framebuffer cannot be created or the
    /// viewport's data ranges are degenerate.
    pub fn to_framebuffer(&self, viewport: &Viewport) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(viewport.width_px, viewport.height_px)?;
        fb.clear(Rgba::WHITE);
        self.render(&mut fb, viewport)?;
        Ok(fb)
    }

    // ------------------------------------------------------------------------
    // Regime renderers
    // ------------------------------------------------------------------------

    /// The whole series occupies at most one horizontal pixel: draw one
    /// vertical segment spanning the global extrema. Horizontal structure
    /// does not survive this regime.
    fn render_single_column(&self, fb: &mut Framebuffer, mapper: &PixelMapper) {
        let mut lowest = self.series.values[0];
        let mut highest = self.series.values[0];
        for &v in self.series.values.iter() {
            if v < lowest {
                lowest = v;
            }
            if v > highest {
                highest = v;
            }
        }

        let p1 = mapper.project(self.series.x_offset, lowest + self.series.y_offset);
        let p2 = mapper.project(self.series.x_offset, highest + self.series.y_offset);
        draw_polyline(fb, &[p1, p2], self.series.line_width, self.series.color);
    }

    /// Individual samples are resolvable: project every visible sample,
    /// draw one polyline through them, then a marker on each vertex.
    fn render_low_density(
        &self,
        fb: &mut Framebuffer,
        mapper: &PixelMapper,
        index1: i64,
        index2: i64,
    ) {
        let n = self.series.len() as i64;

        // One trailing sample is included so the last visible segment still
        // connects; the clamp to n-2 leaves room for it.
        let i1 = index1.max(0);
        let i2 = index2.min(n - 2);

        if i2 + 1 < i1 {
            return;
        }

        let mut points = Vec::with_capacity((i2 + 2 - i1) as usize);
        for i in i1..=(i2 + 1) {
            let idx = i as usize;
            points.push(mapper.project(
                self.series.sample_x(idx),
                self.series.values[idx] + self.series.y_offset,
            ));
        }

        if points.len() > 1 {
            draw_polyline(fb, &points, self.series.line_width, self.series.color);
            for point in &points {
                draw_point(
                    fb,
                    point.x,
                    point.y,
                    self.series.marker_size,
                    self.series.color,
                );
            }
        }
    }

    /// Multiple samples per pixel column: reduce each column's index window
    /// to its extrema and emit two points per column, ordered to minimize
    /// direction reversals, then draw everything as one connected polyline.
    fn render_high_density(
        &self,
        fb: &mut Framebuffer,
        viewport: &Viewport,
        mapper: &PixelMapper,
        offset_points: f64,
        column_point_count: f64,
    ) {
        let values = &self.series.values;
        let n = values.len() as i64;
        let width_px = viewport.width_px;

        let mut points: Vec<Point> = Vec::with_capacity(width_px as usize * 2 + 1);

        for x_px in 0..width_px {
            // Sample-index window covering this pixel column
            let index1 = (offset_points + column_point_count * f64::from(x_px)).floor() as i64;
            let index2 =
                (offset_points + column_point_count * f64::from(x_px + 1)).floor() as i64;

            // Window wholly outside the data
            if index2 < 0 || index1 > n - 1 {
                continue;
            }
            let index1 = index1.max(0) as usize;
            let index2 = index2.min(n - 1) as usize;

            let (lowest, highest) = self.reducer.reduce(values, index1, index2);
            let y_bottom = mapper.project_y(lowest + self.series.y_offset);
            let y_top = mapper.project_y(highest + self.series.y_offset);

            push_column_points(&mut points, x_px as f32, y_top, y_bottom);
        }

        if !points.is_empty() {
            draw_polyline(fb, &points, self.series.line_width, self.series.color);
        }
    }
}

/// Append one column's extrema pair, ordered to reduce crossings.
///
/// When the column's top point sits above the previously emitted point the
/// pair is appended top-first, otherwise bottom-first, so adjacent columns'
/// vertical spans chain head-to-tail instead of zigzagging.
fn push_column_points(points: &mut Vec<Point>, x_px: f32, y_top: f32, y_bottom: f32) {
    let top_first = match points.last() {
        Some(last) if points.len() >= 2 => y_top < last.y,
        _ => true,
    };

    if top_first {
        points.push(Point::new(x_px, y_top));
        points.push(Point::new(x_px, y_bottom));
    } else {
        points.push(Point::new(x_px, y_bottom));
        points.push(Point::new(x_px, y_top));
    }
}

// ============================================================================
// Tests
// ============================================================================
