// File: crates/dash-core/src/lib.rs
// Summary: Kernel entry point; exports series generation, statistics, and chart data derivation.

pub mod error;
pub mod series;
pub mod stats;
pub mod derive;

pub use error::{DashError, Result};
pub use series::{generate_default, generate_series, GeneratorParams, TimeSeries, PREVIEW_ROWS};
pub use stats::{summarize, SummaryStats};
pub use derive::{
    derive_chart_data, derive_chart_data_for_label, ChartData, ChartSelection, HistogramData,
    LagPair, MonthlyBucket, HISTOGRAM_BINS,
};
