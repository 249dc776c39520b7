// File: crates/polydecay-core/src/schedule.rs
// Summary: Polynomial learning-rate decay with linear warmup, and per-power sampling.

use crate::config::ScheduleConfig;
use crate::grid::linspace;
use crate::series::SampleSeries;

/// Number of time points sampled across `[0, total_steps]` for each curve.
pub const SAMPLE_COUNT: usize = 1000;

/// Learning rate at step `t`.
///
/// During warmup (`t < warmup`) the rate ramps linearly from zero to
/// `init_rate`. Afterwards it decays polynomially to `final_rate`:
///
/// ```text
/// progress = (t - warmup) / (total_steps - warmup)
/// rate     = final + (init - final) * (1 - progress)^power
/// ```
///
/// Once `progress >= 1.0` the result is exactly `final_rate`. The caller must
/// keep `warmup < total_steps`; [`ScheduleConfig::validate`] enforces that.
pub fn learning_rate(
    t: f64,
    total_steps: f64,
    init_rate: f64,
    final_rate: f64,
    power: f64,
    warmup: f64,
) -> f64 {
    if t < warmup {
        return init_rate * (t / warmup);
    }
    let progress = (t - warmup) / (total_steps - warmup);
    if progress >= 1.0 {
        return final_rate;
    }
    final_rate + (init_rate - final_rate) * (1.0 - progress).powf(power)
}

/// A single decay curve bound to its parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolynomialDecay {
    pub init_rate: f64,
    pub final_rate: f64,
    pub total_steps: f64,
    pub warmup: f64,
    pub power: f64,
}

impl PolynomialDecay {
    pub fn from_config(cfg: &ScheduleConfig, power: f64) -> Self {
        Self {
            init_rate: cfg.learning_rate,
            final_rate: cfg.lr_end,
            total_steps: cfg.steps as f64,
            warmup: cfg.warmup as f64,
            power,
        }
    }

    #[inline]
    pub fn rate_at(&self, t: f64) -> f64 {
        learning_rate(t, self.total_steps, self.init_rate, self.final_rate, self.power, self.warmup)
    }

    /// Sample `n` evenly spaced steps over `[0, total_steps]`, endpoints included.
    pub fn sample(&self, n: usize) -> SampleSeries {
        let points = linspace(0.0, self.total_steps, n)
            .into_iter()
            .map(|t| (t, self.rate_at(t)))
            .collect();
        SampleSeries::new(self.power, points)
    }
}

/// One [`SampleSeries`] per configured power, in the order the powers were given.
pub fn sample_all(cfg: &ScheduleConfig) -> Vec<SampleSeries> {
    cfg.powers()
        .iter()
        .map(|&p| {
            PolynomialDecay::from_config(cfg, p)
                .sample(SAMPLE_COUNT)
                .with_power_text(cfg.power_text(p))
        })
        .collect()
}
