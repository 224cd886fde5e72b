// File: crates/dash-core/src/series.rs
// Summary: Date-indexed series model and the seeded random-walk generator.
// Notes:
// - Dates are strictly increasing in every TimeSeries; constructors enforce it.
// - Draws come from `StdRng::seed_from_u64`, so a seed reproduces the same walk
//   on every run of this crate.

use chrono::{Duration, NaiveDate};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::{DashError, Result};

/// Rows shown by the data preview table.
pub const PREVIEW_ROWS: usize = 5;

/// Ordered (date, value) pairs with unique, strictly increasing dates.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeries {
    points: Vec<(NaiveDate, f64)>,
}

impl TimeSeries {
    /// Build a series from explicit points. An empty vector is accepted.
    pub fn from_points(points: Vec<(NaiveDate, f64)>) -> Result<Self> {
        if let Some(w) = points.windows(2).find(|w| w[1].0 <= w[0].0) {
            return Err(DashError::InvalidParameter(format!(
                "dates must be strictly increasing ({} followed by {})",
                w[0].0, w[1].0
            )));
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn points(&self) -> &[(NaiveDate, f64)] { &self.points }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|&(d, _)| d)
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|&(_, v)| v).collect()
    }

    /// First `n` rows (fewer when the series is shorter).
    pub fn head(&self, n: usize) -> &[(NaiveDate, f64)] {
        &self.points[..n.min(self.points.len())]
    }
}

/// Generator inputs. Defaults reproduce the sample dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorParams {
    pub seed: u64,
    pub periods: usize,
    pub start: NaiveDate,
    pub freq: Duration,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            seed: 42,
            periods: 100,
            start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
            freq: Duration::days(1),
        }
    }
}

impl GeneratorParams {
    pub fn generate(&self) -> Result<TimeSeries> {
        generate_series(self.seed, self.periods, self.start, self.freq)
    }
}

/// Random walk: cumulative sum of `periods` standard-normal draws, one per date step.
pub fn generate_series(seed: u64, periods: usize, start: NaiveDate, freq: Duration) -> Result<TimeSeries> {
    if periods == 0 {
        return Err(DashError::InvalidParameter("periods must be greater than zero".into()));
    }
    // NaiveDate steps in whole days; anything finer would repeat dates
    if freq < Duration::days(1) || freq != Duration::days(freq.num_days()) {
        return Err(DashError::InvalidParameter(format!("freq must be a positive whole number of days, got {freq}")));
    }
    let last = i32::try_from(periods - 1)
        .ok()
        .and_then(|steps| freq.checked_mul(steps))
        .and_then(|span| start.checked_add_signed(span))
        .ok_or_else(|| {
            DashError::InvalidParameter(format!("{periods} periods of {freq} from {start} overflow the calendar"))
        })?;

    let mut rng = StdRng::seed_from_u64(seed);
    let draws = standard_normals(&mut rng, periods);

    let mut points = Vec::with_capacity(periods);
    let mut date = start;
    let mut acc = 0.0f64;
    for z in draws {
        acc += z;
        points.push((date, acc));
        // only the step past the final point can overflow, and it is never stored
        date = date.checked_add_signed(freq).unwrap_or(last);
    }
    log::debug!("generated {} points from {} (seed {})", points.len(), start, seed);
    Ok(TimeSeries { points })
}

/// Same as `GeneratorParams::default().generate()`.
pub fn generate_default() -> Result<TimeSeries> {
    GeneratorParams::default().generate()
}

/// Box-Muller transform over uniform draws; both outputs of each pair are used.
fn standard_normals(rng: &mut StdRng, n: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        // u1 in (0, 1] keeps ln() finite
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = rng.gen();
        let r = (-2.0 * u1.ln()).sqrt();
        let theta = std::f64::consts::TAU * u2;
        out.push(r * theta.cos());
        if out.len() < n {
            out.push(r * theta.sin());
        }
    }
    out
}
