//! High-level plot types.

mod signal;

pub use signal::{classify, RenderPlan, SignalPlot};
