// File: crates/dash-render/src/lib.rs
// Summary: Renderer entry point; lays out derived chart data and rasterizes it to PNG.

pub mod axis;
pub mod bins;
pub mod chart;
pub mod grid;
pub mod theme;
pub mod types;

pub use axis::Axis;
pub use bins::{bin_values, Bin};
pub use chart::{BarMark, Chart, Marks, RenderOptions};
pub use theme::Theme;
pub use types::Insets;
