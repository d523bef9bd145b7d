//! chart-geometry: pure charting geometry.
//!
//! Turns data series into drawable 2-D geometry: coordinate scales, axis
//! ticks, pie/donut arcs, radar polygons, line/area curves, stacked series
//! and bar-sizing constraints. Every function is synchronous and
//! side-effect free; path builders return SVG path strings that callers
//! splice into their own rendering surface.

pub mod config;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use config::ChartGeometryConfig;
pub use error::{ChartError, ChartResult};
