// File: crates/dashboard/src/report.rs
// Summary: Plain-text panels printed by the dashboard (data preview, statistics).

use dash_core::{SummaryStats, TimeSeries, PREVIEW_ROWS};

pub const TITLE: &str = "Sample Dashboard";

/// Title banner with a rule underneath.
pub fn banner() -> String {
    format!("{TITLE}\n{}", "-".repeat(40))
}

/// First rows of the series as an indexed two-column table.
pub fn preview_table(series: &TimeSeries) -> String {
    let mut out = format!("Data preview\n{:>3}  {:<10}  {:>10}\n", "", "date", "value");
    for (i, (date, value)) in series.head(PREVIEW_ROWS).iter().enumerate() {
        out.push_str(&format!("{:>3}  {:<10}  {:>10.6}\n", i, date.format("%Y-%m-%d").to_string(), value));
    }
    out
}

pub fn stats_panel(stats: &SummaryStats) -> String {
    format!("Statistics\n{stats}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn preview_shows_five_rows() {
        let s = dash_core::generate_default().unwrap();
        let table = preview_table(&s);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 2 + 5);
        assert!(lines[2].contains("2023-01-01"));
        assert!(lines[6].contains("2023-01-05"));
    }

    #[test]
    fn preview_header_layout() {
        let empty = TimeSeries::from_points(Vec::new()).unwrap();
        assert_eq!(preview_table(&empty), "Data preview\n     date             value\n");
    }

    #[test]
    fn preview_of_short_series() {
        let d = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let s = TimeSeries::from_points(vec![(d, 1.5)]).unwrap();
        let table = preview_table(&s);
        assert_eq!(table.lines().count(), 3);
        assert!(table.ends_with("  0  2023-06-01    1.500000\n"));
    }

    #[test]
    fn stats_panel_has_heading() {
        let st = SummaryStats { mean: 0.0, stddev: 1.0, min: -1.0, max: 1.0 };
        assert!(stats_panel(&st).starts_with("Statistics\nmean:   0.00"));
    }
}
