// File: crates/dash-render/src/bins.rs
// Summary: Equal-width histogram bucketing for the value distribution chart.

/// One histogram bucket covering [lo, hi) (the last bucket also includes `hi`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Split [min, max] of `values` into `bins` equal-width buckets and count members.
/// Non-finite values are skipped. A constant input gets a single bucket of width 1
/// centred on the value; no bins are produced for empty input or `bins == 0`.
pub fn bin_values(values: &[f64], bins: usize) -> Vec<Bin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if bins == 0 || finite.is_empty() {
        return Vec::new();
    }
    let (min, max) = finite
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    if (max - min).abs() < 1e-12 {
        return vec![Bin { lo: min - 0.5, hi: min + 0.5, count: finite.len() }];
    }

    let width = (max - min) / bins as f64;
    let mut out: Vec<Bin> = (0..bins)
        .map(|i| Bin { lo: min + width * i as f64, hi: min + width * (i + 1) as f64, count: 0 })
        .collect();
    // pin the last edge so rounding never leaves `max` outside
    out[bins - 1].hi = max;

    for v in finite {
        let idx = (((v - min) / width).floor() as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sum_to_input_len() {
        let values: Vec<f64> = (0..100).map(|i| (i as f64 * 0.37).sin() * 5.0).collect();
        let bins = bin_values(&values, 20);
        assert_eq!(bins.len(), 20);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 100);
    }

    #[test]
    fn max_lands_in_last_bin() {
        let bins = bin_values(&[0.0, 1.0, 2.0, 3.0, 4.0], 4);
        assert_eq!(bins.iter().map(|b| b.count).collect::<Vec<_>>(), vec![1, 1, 1, 2]);
        assert_eq!(bins[0].lo, 0.0);
        assert_eq!(bins[3].hi, 4.0);
    }

    #[test]
    fn edges_are_contiguous() {
        let bins = bin_values(&[-2.0, 7.5, 3.3], 5);
        assert!(bins.windows(2).all(|w| (w[0].hi - w[1].lo).abs() < 1e-12));
    }

    #[test]
    fn constant_input_single_bin() {
        let bins = bin_values(&[2.0, 2.0, 2.0], 20);
        assert_eq!(bins, vec![Bin { lo: 1.5, hi: 2.5, count: 3 }]);
    }

    #[test]
    fn empty_and_zero_bins() {
        assert!(bin_values(&[], 20).is_empty());
        assert!(bin_values(&[1.0, 2.0], 0).is_empty());
        assert!(bin_values(&[f64::NAN], 20).is_empty());
    }
}
