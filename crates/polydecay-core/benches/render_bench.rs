// File: crates/polydecay-core/benches/render_bench.rs
// Summary: Rendering and encoding throughput for the default ten-curve chart.

use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polydecay_core::{build_chart, OutputFormat, RenderOptions, ScalePreset, ScheduleConfig};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_bytes");
    group.sample_size(20);
    for (name, format) in [("jpeg", OutputFormat::Jpeg), ("png", OutputFormat::Png)] {
        for &dpi in &[100u32, 300u32] {
            group.bench_function(format!("{name}_dpi{dpi}"), |b| {
                let cfg = ScheduleConfig { scale: ScalePreset::Fine, dpi, ..Default::default() };
                let chart = build_chart(&cfg);
                let opts = RenderOptions { dpi, draw_labels: false, ..RenderOptions::default() };
                b.iter(|| -> Result<()> {
                    let bytes = chart.render_to_bytes(&opts, format)?;
                    black_box(bytes);
                    Ok(())
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
