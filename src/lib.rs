//! # Waveplot
//!
//! Adaptive multi-resolution rendering of uniformly-sampled signals onto a
//! fixed-size pixel canvas.
//!
//! A series with millions of samples and a series with a handful both render
//! in bounded time: every draw call classifies the series/viewport pair into
//! one of three regimes and dispatches accordingly.
//!
//! - **Single-column**: the projection collapses horizontally; one vertical
//!   segment spans the global extrema.
//! - **Low-density**: individual samples are resolvable; every visible
//!   sample becomes a polyline vertex with a marker.
//! - **High-density**: many samples share each pixel column; each column is
//!   reduced to its (min, max) pair and the pairs join into one connected
//!   polyline, preserving visual peaks at O(canvas width) cost.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use waveplot::prelude::*;
//!
//! let samples: Vec<f64> = (0..1_000_000).map(|i| (i as f64 * 0.001).sin()).collect();
//! let series = Series::new(samples, 48_000.0)?;
//!
//! let limits = series.limits();
//! let viewport = Viewport::new(
//!     (limits.x_min, limits.x_max),
//!     (limits.y_min, limits.y_max),
//!     1280,
//!     720,
//! )?;
//!
//! let fb = SignalPlot::new(series).to_framebuffer(&viewport)?;
//! PngEncoder::write_to_file(&fb, "signal.png")?;
//! ```
//!
//! ## References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types for strokes and markers.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, lines).
pub mod geometry;

/// Scale functions for data-to-pixel mappings.
pub mod scale;

// ============================================================================
// Signal Modules
// ============================================================================

/// Uniformly-sampled series data and bounds.
pub mod series;

/// Visible data window and its pixel projection.
pub mod viewport;

/// Min/max reduction over sample windows.
pub mod reduce;

/// High-level plot types.
pub mod plots;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization of lines, polylines, and markers.
pub mod render;

/// Output encoders (PNG, CSV).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for waveplot operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use waveplot::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Line, Point};
    pub use crate::output::{CsvExporter, PngEncoder};
    pub use crate::plots::{classify, RenderPlan, SignalPlot};
    pub use crate::reduce::{BlockedReducer, LinearScanReducer, RangeReducer};
    pub use crate::scale::{LinearScale, Scale};
    pub use crate::series::{Series, SeriesLimits};
    pub use crate::viewport::{PixelMapper, Viewport};
}
