// File: crates/dash-core/src/derive.rs
// Summary: Chart selection and the per-kind derivation of plot-ready data.
// Notes:
// - Each kind maps to exactly one derivation; every derivation only reads the input series.
// - Histogram bucketing is left to the renderer; the kernel only fixes the bin count.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::{DashError, Result};
use crate::series::TimeSeries;

/// Bin count handed to the renderer for histograms.
pub const HISTOGRAM_BINS: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartSelection {
    Line,
    Bar,
    Scatter,
    Histogram,
}

impl ChartSelection {
    pub const ALL: [ChartSelection; 4] =
        [ChartSelection::Line, ChartSelection::Bar, ChartSelection::Scatter, ChartSelection::Histogram];

    pub fn label(&self) -> &'static str {
        match self {
            ChartSelection::Line => "line",
            ChartSelection::Bar => "bar",
            ChartSelection::Scatter => "scatter",
            ChartSelection::Histogram => "histogram",
        }
    }

    /// Sidebar label of the original page.
    pub fn page_label(&self) -> &'static str {
        match self {
            ChartSelection::Line => "折れ線グラフ",
            ChartSelection::Bar => "棒グラフ",
            ChartSelection::Scatter => "散布図",
            ChartSelection::Histogram => "ヒストグラム",
        }
    }
}

impl fmt::Display for ChartSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChartSelection {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        ChartSelection::ALL
            .into_iter()
            .find(|k| k.label().eq_ignore_ascii_case(wanted) || k.page_label() == wanted)
            .ok_or_else(|| DashError::UnsupportedChartKind(s.to_string()))
    }
}

/// Mean of all values whose date falls in one calendar month.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonthlyBucket {
    /// Last day of the month (the resample boundary).
    pub month_end: NaiveDate,
    pub mean: f64,
    pub count: usize,
}

/// A value paired with its immediate predecessor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LagPair {
    pub date: NaiveDate,
    pub lag: f64,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HistogramData {
    pub values: Vec<f64>,
    pub bins: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartData {
    Line(TimeSeries),
    Bar(Vec<MonthlyBucket>),
    Scatter(Vec<LagPair>),
    Histogram(HistogramData),
}

impl ChartData {
    pub fn kind(&self) -> ChartSelection {
        match self {
            ChartData::Line(_) => ChartSelection::Line,
            ChartData::Bar(_) => ChartSelection::Bar,
            ChartData::Scatter(_) => ChartSelection::Scatter,
            ChartData::Histogram(_) => ChartSelection::Histogram,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartData::Line(_) => "Time series",
            ChartData::Bar(_) => "Monthly mean",
            ChartData::Scatter(_) => "Lag-1 autocorrelation",
            ChartData::Histogram(_) => "Value distribution",
        }
    }
}

/// Compute the data plotted for `kind`.
pub fn derive_chart_data(series: &TimeSeries, kind: ChartSelection) -> Result<ChartData> {
    let data = match kind {
        ChartSelection::Line => ChartData::Line(series.clone()),
        ChartSelection::Bar => ChartData::Bar(monthly_means(series)),
        ChartSelection::Scatter => ChartData::Scatter(lag_pairs(series)),
        ChartSelection::Histogram => {
            ChartData::Histogram(HistogramData { values: series.values(), bins: HISTOGRAM_BINS })
        }
    };
    log::debug!("derived {} chart data from {} points", kind, series.len());
    Ok(data)
}

/// Parse a selection label, then derive. Unknown labels fail with `UnsupportedChartKind`.
pub fn derive_chart_data_for_label(series: &TimeSeries, label: &str) -> Result<ChartData> {
    derive_chart_data(series, label.parse()?)
}

/// Calendar-month buckets in chronological order; months without observations are omitted.
fn monthly_means(series: &TimeSeries) -> Vec<MonthlyBucket> {
    // (first date of the group, sum, count)
    let mut groups: Vec<(NaiveDate, f64, usize)> = Vec::new();
    for &(date, value) in series.points() {
        match groups.last_mut() {
            Some((first, sum, count)) if (first.year(), first.month()) == (date.year(), date.month()) => {
                *sum += value;
                *count += 1;
            }
            _ => groups.push((date, value, 1)),
        }
    }
    groups
        .into_iter()
        .map(|(first, sum, count)| MonthlyBucket { month_end: month_end(first), mean: sum / count as f64, count })
        .collect()
}

/// Last calendar day of `date`'s month, found without stepping into the next month
/// (December of the final representable year has none).
fn month_end(date: NaiveDate) -> NaiveDate {
    (28..=31)
        .rev()
        .find_map(|d| date.with_day(d))
        .unwrap_or(date)
}

/// Lag-1 pairs; the first point has no predecessor and is dropped.
fn lag_pairs(series: &TimeSeries) -> Vec<LagPair> {
    series
        .points()
        .windows(2)
        .map(|w| LagPair { date: w[1].0, lag: w[0].1, value: w[1].1 })
        .collect()
}
