// File: crates/polydecay-core/src/theme.rs
// Summary: Chart color themes and the per-power line palette.

use skia_safe as skia;

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
}

impl Theme {
    /// White figure with black frame, the look of classic scientific plots.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 0, 0, 0),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            legend_background: skia::Color::from_argb(255, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 0, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 24, 24, 28),
            grid: skia::Color::from_argb(255, 90, 90, 100),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            legend_background: skia::Color::from_argb(255, 30, 30, 36),
            legend_border: skia::Color::from_argb(255, 120, 120, 130),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::classic() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark()]
}

/// Find a theme by its `name` (case-insensitive).
pub fn find(name: &str) -> Result<Theme, ConfigError> {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| ConfigError::UnknownTheme(name.to_string()))
}

/// purple, blue, cyan, turquoise, lightgreen, palegoldenrod, sandybrown, coral, orangered, red
const PALETTE: [(u8, u8, u8); 10] = [
    (0x80, 0x00, 0x80),
    (0x00, 0x00, 0xff),
    (0x00, 0xff, 0xff),
    (0x40, 0xe0, 0xd0),
    (0x90, 0xee, 0x90),
    (0xee, 0xe8, 0xaa),
    (0xf4, 0xa4, 0x60),
    (0xff, 0x7f, 0x50),
    (0xff, 0x45, 0x00),
    (0xff, 0x00, 0x00),
];

/// Line color for the `index`-th of `count` curves. The first ten use the fixed
/// palette; later ones sample the rainbow colormap at `index / count`.
pub fn series_color(index: usize, count: usize) -> skia::Color {
    match PALETTE.get(index) {
        Some(&(r, g, b)) => skia::Color::from_rgb(r, g, b),
        None => rainbow(index as f64 / count.max(1) as f64),
    }
}

/// Rainbow colormap: red `|2x - 0.5|`, green `sin(pi x)`, blue `cos(pi x / 2)`.
pub fn rainbow(x: f64) -> skia::Color {
    let x = x.clamp(0.0, 1.0);
    let to_u8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    let r = (2.0 * x - 0.5).abs();
    let g = (x * std::f64::consts::PI).sin();
    let b = (x * std::f64::consts::FRAC_PI_2).cos();
    skia::Color::from_rgb(to_u8(r), to_u8(g), to_u8(b))
}
