// File: crates/dash-core/tests/properties.rs
// Purpose: End-to-end checks of generator, statistics and derivations through the public API.

use chrono::{Duration, NaiveDate};
use dash_core::{
    derive_chart_data, derive_chart_data_for_label, generate_series, summarize, ChartData,
    ChartSelection, DashError, GeneratorParams, HISTOGRAM_BINS,
};

fn jan1() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
}

#[test]
fn default_run_is_reproducible() {
    let a = generate_series(42, 100, jan1(), Duration::days(1)).unwrap();
    let b = GeneratorParams::default().generate().unwrap();
    assert_eq!(a, b);
    assert_eq!(summarize(&a).unwrap(), summarize(&b).unwrap());
    for kind in ChartSelection::ALL {
        assert_eq!(derive_chart_data(&a, kind).unwrap(), derive_chart_data(&b, kind).unwrap());
    }
}

#[test]
fn stats_bracket_the_mean() {
    let s = GeneratorParams::default().generate().unwrap();
    let st = summarize(&s).unwrap();
    assert!(st.min <= st.mean && st.mean <= st.max);
    assert!(st.stddev > 0.0);
    let values = s.values();
    assert!(values.contains(&st.min));
    assert!(values.contains(&st.max));
}

#[test]
fn derivation_shapes_for_default_series() {
    let s = GeneratorParams::default().generate().unwrap();
    let n = s.len();

    match derive_chart_data(&s, ChartSelection::Scatter).unwrap() {
        ChartData::Scatter(pairs) => {
            assert_eq!(pairs.len(), n - 1);
            let v = s.values();
            assert!(pairs.iter().enumerate().all(|(i, p)| p.lag == v[i] && p.value == v[i + 1]));
        }
        other => panic!("expected scatter, got {:?}", other.kind()),
    }

    match derive_chart_data(&s, ChartSelection::Histogram).unwrap() {
        ChartData::Histogram(h) => {
            assert_eq!(h.values.len(), n);
            assert_eq!(h.bins, HISTOGRAM_BINS);
        }
        other => panic!("expected histogram, got {:?}", other.kind()),
    }

    match derive_chart_data(&s, ChartSelection::Bar).unwrap() {
        ChartData::Bar(buckets) => {
            assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), n);
            assert!(buckets.windows(2).all(|w| w[0].month_end < w[1].month_end));
        }
        other => panic!("expected bar, got {:?}", other.kind()),
    }
}

#[test]
fn label_dispatch_matches_enum_dispatch() {
    let s = GeneratorParams::default().generate().unwrap();
    for kind in ChartSelection::ALL {
        assert_eq!(
            derive_chart_data_for_label(&s, kind.label()).unwrap(),
            derive_chart_data(&s, kind).unwrap()
        );
    }
    assert!(matches!(
        derive_chart_data_for_label(&s, "invalid"),
        Err(DashError::UnsupportedChartKind(_))
    ));
}

#[test]
fn errors_render_readably() {
    assert_eq!(DashError::EmptySeries.to_string(), "statistics requested on an empty series");
    assert_eq!(
        DashError::UnsupportedChartKind("pie".into()).to_string(),
        "unsupported chart kind: \"pie\""
    );
}
