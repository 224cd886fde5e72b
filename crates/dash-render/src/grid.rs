// File: crates/dash-render/src/grid.rs
// Summary: Grid/tick layout helpers.

/// `steps` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Tick label text: two decimals, trailing zeros kept for alignment.
pub fn tick_label(v: f64) -> String {
    if v.abs() < 5e-3 { "0.00".to_string() } else { format!("{v:.2}") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_endpoints() {
        assert_eq!(linspace(0.0, 10.0, 6), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(linspace(3.0, 5.0, 1), vec![3.0, 5.0]);
    }

    #[test]
    fn tick_labels_hide_negative_zero() {
        assert_eq!(tick_label(-0.001), "0.00");
        assert_eq!(tick_label(12.346), "12.35");
        assert_eq!(tick_label(-3.0), "-3.00");
    }
}
