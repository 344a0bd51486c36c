//! blockline: line and block chart layout with a ratcheting value axis.
//!
//! Data values are mapped into a fixed-size surface under a value-axis
//! ceiling. When a draw exceeds the ceiling, the ceiling grows to the new
//! maximum and geometry retained from earlier draws is compressed so the
//! whole chart stays proportional. Finished frames are handed to a
//! [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine, DrawOutcome};
pub use error::{ChartError, ChartResult};
