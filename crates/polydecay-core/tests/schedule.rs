// File: crates/polydecay-core/tests/schedule.rs
// Purpose: Warmup/decay formula properties and per-power sampling.

use polydecay_core::{learning_rate, sample_all, PolynomialDecay, ScheduleConfig, SAMPLE_COUNT};
use proptest::prelude::*;

const INIT: f64 = 1e-4;
const FINAL: f64 = 1e-7;
const STEPS: f64 = 4000.0;
const WARMUP: f64 = 400.0;

#[test]
fn starts_at_zero_during_warmup() {
    for power in [0.1, 1.0, 10.0] {
        assert_eq!(learning_rate(0.0, STEPS, INIT, FINAL, power, WARMUP), 0.0);
    }
}

#[test]
fn reaches_init_rate_at_end_of_warmup() {
    for power in [0.1, 0.5, 1.0, 3.0] {
        assert_eq!(learning_rate(WARMUP, STEPS, INIT, FINAL, power, WARMUP), INIT);
    }
}

#[test]
fn ends_exactly_at_final_rate() {
    for power in [0.1, 0.3, 1.0, 2.0, 10.0] {
        assert_eq!(learning_rate(STEPS, STEPS, INIT, FINAL, power, WARMUP), FINAL);
    }
}

#[test]
fn warmup_is_linear() {
    let half = learning_rate(WARMUP / 2.0, STEPS, INIT, FINAL, 2.0, WARMUP);
    assert!((half - INIT / 2.0).abs() < 1e-18);
}

#[test]
fn power_one_decays_linearly() {
    // Midpoint of the decay phase sits halfway between the endpoints.
    let mid = WARMUP + (STEPS - WARMUP) / 2.0;
    let lr = learning_rate(mid, STEPS, INIT, FINAL, 1.0, WARMUP);
    assert!((lr - (INIT + FINAL) / 2.0).abs() < 1e-15);

    let quarter = WARMUP + (STEPS - WARMUP) / 4.0;
    let lr = learning_rate(quarter, STEPS, INIT, FINAL, 1.0, WARMUP);
    assert!((lr - (FINAL + (INIT - FINAL) * 0.75)).abs() < 1e-15);
}

#[test]
fn higher_power_decays_faster() {
    let t = 1500.0;
    let slow = learning_rate(t, STEPS, INIT, FINAL, 0.5, WARMUP);
    let fast = learning_rate(t, STEPS, INIT, FINAL, 3.0, WARMUP);
    assert!(fast < slow);
}

#[test]
fn sample_all_yields_one_series_per_power_in_order() {
    let cfg = ScheduleConfig { powers: Some(vec![2.0, 0.5, 1.0]), ..Default::default() };
    let series = sample_all(&cfg);
    assert_eq!(series.iter().map(|s| s.power).collect::<Vec<_>>(), vec![2.0, 0.5, 1.0]);
    for s in &series {
        assert_eq!(s.len(), SAMPLE_COUNT);
        assert_eq!(s.points.first().map(|p| p.0), Some(0.0));
        assert_eq!(s.points.last().copied(), Some((4000.0, cfg.lr_end)));
    }
}

#[test]
fn series_rate_range_spans_zero_to_peak() {
    let cfg = ScheduleConfig::default();
    let s = PolynomialDecay::from_config(&cfg, 1.0).sample(SAMPLE_COUNT);
    let (lo, hi) = s.rate_range().expect("non-empty");
    assert_eq!(lo, 0.0);
    assert!(hi <= cfg.learning_rate && hi > cfg.learning_rate * 0.99);
}

proptest! {
    #[test]
    fn rate_stays_within_bounds(
        t in 0.0f64..5000.0,
        power in 0.05f64..12.0,
        warmup in 0.0f64..1000.0,
    ) {
        let lr = learning_rate(t, STEPS, INIT, FINAL, power, warmup);
        prop_assert!(lr >= 0.0);
        prop_assert!(lr <= INIT * (1.0 + 1e-12));
        if t >= warmup {
            prop_assert!(lr >= FINAL * (1.0 - 1e-12));
        }
    }

    #[test]
    fn decay_phase_is_non_increasing(
        a in 400.0f64..4000.0,
        b in 400.0f64..4000.0,
        power in 0.05f64..12.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let early = learning_rate(lo, STEPS, INIT, FINAL, power, WARMUP);
        let late = learning_rate(hi, STEPS, INIT, FINAL, power, WARMUP);
        prop_assert!(late <= early);
    }
}
