//! chart-axes: axis domain and layout engine for Gantt and X/Y/Y2 charts.
//!
//! The crate decides what value range each axis covers, how that range
//! grows when content with outliers is loaded, and where every axis, tick,
//! title and reference line lands on the canvas. Drawing and text
//! measurement are delegated to backends through the [`render::Renderer`]
//! and [`render::TextMeasurer`] traits.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{AxisEngine, ChartConfig};
pub use error::{ChartError, ChartResult};
