// File: crates/polydecay-core/src/plot.rs
// Summary: End-to-end pipeline: validate config, sample every power, configure axes, render to disk.

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crate::axis::TickFormat;
use crate::chart::{Chart, RenderOptions};
use crate::config::ScheduleConfig;
use crate::format::format_sci;
use crate::grid::linspace;
use crate::schedule::sample_all;
use crate::theme;

/// Build the annotated chart for `cfg` without rendering it.
pub fn build_chart(cfg: &ScheduleConfig) -> Chart {
    let mut chart = Chart::new();
    for s in sample_all(cfg) {
        chart.add_series(s);
    }

    let steps = cfg.steps as f64;
    chart.x_axis.min = 0.0;
    chart.x_axis.max = steps;
    chart.x_axis.major_ticks = linspace(0.0, steps, 5);
    chart.x_axis.tick_format = TickFormat::Integer;

    cfg.scale.configure(&mut chart.y_axis, cfg.lr_end, cfg.learning_rate, cfg.notation);
    debug!(
        scale = %cfg.scale,
        y_min = chart.y_axis.min,
        y_max = chart.y_axis.max,
        ticks = chart.y_axis.major_ticks.len(),
        "configured value axis"
    );

    chart.title = format!(
        "Polynomial Learning Rate Decay ({} Scale)\nWarmup Steps: {}",
        cfg.scale.title(),
        cfg.warmup
    );
    chart
}

/// Render options matching the configured DPI and theme.
pub fn render_options(cfg: &ScheduleConfig) -> Result<RenderOptions> {
    Ok(RenderOptions {
        dpi: cfg.dpi,
        theme: theme::find(&cfg.theme)?,
        ..RenderOptions::default()
    })
}

/// Validate, render and write the chart. Returns the path written.
pub fn plot_schedules(cfg: &ScheduleConfig) -> Result<PathBuf> {
    cfg.validate()?;
    let output = cfg.resolved_output();
    let chart = build_chart(cfg);
    chart.render_to_file(&render_options(cfg)?, &output)?;
    Ok(output)
}

/// The three human-readable lines printed after a successful run.
pub fn summary_lines(cfg: &ScheduleConfig, output: &std::path::Path) -> [String; 3] {
    [
        format!("Plot saved as {}", output.display()),
        format!(
            "Initial LR: {}, Final LR: {}",
            format_sci(cfg.learning_rate, 1),
            format_sci(cfg.lr_end, 1)
        ),
        format!("Scale type: {}, Notation: {}", cfg.scale, cfg.notation.name()),
    ]
}
