// File: crates/dash-core/src/stats.rs
// Summary: Descriptive statistics over the value column of a series.

use std::fmt;

use crate::error::{DashError, Result};
use crate::series::TimeSeries;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SummaryStats {
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator). NaN for a single value.
    pub stddev: f64,
    pub min: f64,
    pub max: f64,
}

/// Mean, sample standard deviation, min and max of `series` values.
pub fn summarize(series: &TimeSeries) -> Result<SummaryStats> {
    summarize_values(&series.values())
}

fn summarize_values(values: &[f64]) -> Result<SummaryStats> {
    if values.is_empty() {
        return Err(DashError::EmptySeries);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let stddev = if values.len() < 2 {
        f64::NAN
    } else {
        let ss = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
        (ss / (n - 1.0)).sqrt()
    };
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    Ok(SummaryStats { mean, stddev, min, max })
}

impl fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mean:   {:.2}", self.mean)?;
        writeln!(f, "stddev: {:.2}", self.stddev)?;
        writeln!(f, "min:    {:.2}", self.min)?;
        write!(f, "max:    {:.2}", self.max)
    }
}
