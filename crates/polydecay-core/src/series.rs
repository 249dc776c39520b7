// File: crates/polydecay-core/src/series.rs
// Summary: Sampled decay curve for a single power, consumed by the renderer.

use crate::format::format_float;

/// Ordered `(step, rate)` pairs for one decay power.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSeries {
    pub power: f64,
    label: String,
    pub points: Vec<(f64, f64)>,
}

impl SampleSeries {
    pub fn new(power: f64, points: Vec<(f64, f64)>) -> Self {
        let label = format!("power={}", format_float(power));
        Self { power, label, points }
    }

    /// Replace how the power is spelled in the legend.
    pub fn with_power_text(mut self, text: impl AsRef<str>) -> Self {
        self.label = format!("power={}", text.as_ref());
        self
    }

    /// Legend entry, e.g. `power=1.0`.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Minimum and maximum rate, or `None` for an empty series.
    pub fn rate_range(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &(_, y) in &self.points {
            lo = lo.min(y);
            hi = hi.max(y);
        }
        Some((lo, hi))
    }
}
