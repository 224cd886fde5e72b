// File: crates/dash-render/src/axis.rs
// Summary: Axis model with labels and ranges.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn span(&self) -> f64 { (self.max - self.min).max(1e-9) }

    /// Map a data value onto [lo_px, hi_px].
    #[inline]
    pub fn to_px(&self, v: f64, lo_px: f32, hi_px: f32) -> f32 {
        lo_px + ((v - self.min) / self.span()) as f32 * (hi_px - lo_px)
    }
}
