// File: crates/polydecay-core/tests/preset.rs
// Purpose: Scale presets rewrite the value axis (kind, bounds, ticks, label format).

use polydecay_core::{build_chart, Axis, Notation, ScaleKind, ScalePreset, ScheduleConfig, TickFormat};

const INIT: f64 = 1e-4;
const FINAL: f64 = 1e-7;

fn configured(preset: ScalePreset, notation: Notation) -> Axis {
    let mut axis = Axis::default_y();
    preset.configure(&mut axis, FINAL, INIT, notation);
    axis
}

#[test]
fn none_is_linear_with_six_ticks() {
    let axis = configured(ScalePreset::None, Notation::Scientific);
    assert_eq!(axis.kind, ScaleKind::Linear);
    assert_eq!(axis.major_ticks.len(), 6);
    assert_eq!(axis.major_ticks[0], FINAL);
    assert_eq!(axis.major_ticks[5], INIT);
    assert!((axis.min - FINAL * 0.95).abs() < 1e-20);
    assert!((axis.max - INIT * 1.05).abs() < 1e-18);
    assert!(axis.minor_ticks.is_empty());
    assert_eq!(axis.tick_format, TickFormat::Scientific);
}

#[test]
fn none_honours_decimal_notation() {
    let axis = configured(ScalePreset::None, Notation::Decimal);
    assert_eq!(axis.tick_format, TickFormat::Plain);
    let labels: Vec<String> = axis.labeled_ticks().into_iter().map(|(_, l)| l).collect();
    assert_eq!(labels.last().map(String::as_str), Some("0.0001"));
}

#[test]
fn log_presets_ignore_notation() {
    for preset in [ScalePreset::Standard, ScalePreset::Fine, ScalePreset::Wide] {
        let axis = configured(preset, Notation::Decimal);
        assert_eq!(axis.kind, ScaleKind::Log10);
        assert_eq!(axis.tick_format, TickFormat::Scientific);
        assert!((axis.min - FINAL * 0.8).abs() < 1e-20);
        assert!((axis.max - INIT * 1.2).abs() < 1e-18);
    }
}

#[test]
fn standard_places_decade_ticks() {
    let axis = configured(ScalePreset::Standard, Notation::Scientific);
    let labels: Vec<String> = axis.labeled_ticks().into_iter().map(|(_, l)| l).collect();
    assert_eq!(labels, vec!["1e-07", "1e-06", "1e-05", "1e-04"]);
    assert!(axis.minor_ticks.is_empty());
}

#[test]
fn fine_adds_minor_ticks_inside_bounds() {
    let axis = configured(ScalePreset::Fine, Notation::Scientific);
    assert!(axis.major_ticks.len() <= ScalePreset::Fine.major_tick_budget());
    assert!(!axis.minor_ticks.is_empty());
    for &v in &axis.minor_ticks {
        assert!(v >= axis.min && v <= axis.max, "minor tick {v} outside bounds");
    }
    // 9e-8, then 2..9 x 1e-7, 1e-6 and 1e-5
    assert_eq!(axis.minor_ticks.len(), 25);
}

#[test]
fn wide_matches_standard_locator() {
    let std_axis = configured(ScalePreset::Standard, Notation::Scientific);
    let wide = configured(ScalePreset::Wide, Notation::Scientific);
    assert_eq!(std_axis.major_ticks, wide.major_ticks);
}

#[test]
fn presets_parse_from_names() {
    for preset in ScalePreset::ALL {
        assert_eq!(preset.as_str().parse::<ScalePreset>(), Ok(preset));
    }
    assert!("huge".parse::<ScalePreset>().is_err());
    assert_eq!("d".parse::<Notation>(), Ok(Notation::Decimal));
    assert!("x".parse::<Notation>().is_err());
}

#[test]
fn chart_title_and_x_ticks() {
    let cfg = ScheduleConfig { scale: ScalePreset::Fine, warmup: 50, ..Default::default() };
    let chart = build_chart(&cfg);
    assert_eq!(chart.title, "Polynomial Learning Rate Decay (Fine Scale)\nWarmup Steps: 50");
    assert_eq!(chart.series.len(), cfg.powers().len());
    let x: Vec<String> = chart.x_axis.labeled_ticks().into_iter().map(|(_, l)| l).collect();
    assert_eq!(x, vec!["0", "1000", "2000", "3000", "4000"]);
    assert_eq!(chart.y_axis.kind, ScaleKind::Log10);
}

#[test]
fn legend_labels_follow_power_source() {
    let chart = build_chart(&ScheduleConfig::default());
    let labels: Vec<&str> = chart.series.iter().map(|s| s.label()).collect();
    assert_eq!(labels[..5], ["power=0.1", "power=0.3", "power=0.5", "power=0.8", "power=1"]);
    assert_eq!(labels.last(), Some(&"power=10"));

    let cfg = ScheduleConfig { powers: Some(vec![1.0, 0.5]), ..Default::default() };
    let chart = build_chart(&cfg);
    let labels: Vec<&str> = chart.series.iter().map(|s| s.label()).collect();
    assert_eq!(labels, ["power=1.0", "power=0.5"]);
}
