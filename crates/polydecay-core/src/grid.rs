// File: crates/polydecay-core/src/grid.rs
// Summary: Evenly spaced sample/tick generation and log-decade tick locators.

/// `steps` evenly spaced values over `[start, end]`. The last value is exactly `end`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            let mut out: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
            out[steps - 1] = end;
            out
        }
    }
}

/// Ticks at `sub * 10^d` for every decade `d` touching `[vmin, vmax]`, keeping
/// at most roughly `max_ticks` decades by striding. Values outside the range
/// are dropped. Requires `0 < vmin <= vmax`.
pub fn log_ticks(vmin: f64, vmax: f64, max_ticks: usize, subs: &[f64]) -> Vec<f64> {
    if !(vmin > 0.0 && vmax >= vmin) || subs.is_empty() {
        return Vec::new();
    }
    let lo = vmin.log10().floor() as i32;
    let hi = vmax.log10().ceil() as i32;
    let decades = (hi - lo + 1) as usize;
    let stride = decades.div_ceil(max_ticks.max(1)).max(1);

    let mut out = Vec::new();
    for d in (lo..=hi).step_by(stride) {
        let base = 10f64.powi(d);
        for &s in subs {
            let v = s * base;
            if v >= vmin && v <= vmax {
                out.push(v);
            }
        }
    }
    out
}
