// File: crates/polydecay-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (Skia CPU raster surface, JPEG/PNG encoding).

use std::path::Path;

use anyhow::{Context, Result};
use image::codecs::jpeg::{JpegEncoder, PixelDensity};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use skia_safe as skia;
use tracing::{debug, info};

use crate::axis::Axis;
use crate::error::RenderError;
use crate::scale::{PlotTransform, ScaleTransform};
use crate::series::SampleSeries;
use crate::text::{Anchor, TextShaper};
use crate::theme::{series_color, Theme};
use crate::types::{Insets, PlotRect, FIGURE_HEIGHT_IN, FIGURE_WIDTH_IN, LOGICAL_DPI};

const JPEG_QUALITY: u8 = 95;
const LINE_WIDTH: f32 = 2.0;
const MAJOR_TICK_LEN: f32 = 8.0;
const MINOR_TICK_LEN: f32 = 4.0;
const TICK_FONT: f32 = 12.0;
const LABEL_FONT: f32 = 12.0;
const TITLE_FONT: f32 = 14.0;
const LEGEND_FONT: f32 = 12.0;
const LEGEND_PAD: f32 = 8.0;
const LEGEND_SAMPLE_W: f32 = 28.0;
/// Space between the plot frame and the legend.
const LEGEND_GAP: f32 = 44.0;
/// Minimum clearance between the legend and the canvas edges.
const LEGEND_MARGIN: f32 = 8.0;
/// Narrowest plot area kept when a wide legend pushes the frame left.
const MIN_PLOT_WIDTH: f32 = 240.0;
const GRID_ALPHA: f32 = 0.7;

/// Encoded image container, chosen from the output file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            _ => Err(RenderError::UnsupportedFormat(ext)),
        }
    }
}

pub struct RenderOptions {
    /// Output resolution; the 12x8 inch figure is `12 * dpi` by `8 * dpi` pixels.
    pub dpi: u32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text rendering depends on installed fonts; snapshot tests turn it off.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dpi: LOGICAL_DPI as u32,
            insets: Insets::default(),
            theme: Theme::classic(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Multiplier from logical layout pixels to output pixels.
    pub fn scale_factor(&self) -> f32 {
        self.dpi.max(1) as f32 / LOGICAL_DPI
    }

    /// Output size in pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        let s = self.scale_factor();
        (
            (FIGURE_WIDTH_IN * LOGICAL_DPI * s).round() as i32,
            (FIGURE_HEIGHT_IN * LOGICAL_DPI * s).round() as i32,
        )
    }

    fn logical_size(&self) -> (f32, f32) {
        (FIGURE_WIDTH_IN * LOGICAL_DPI, FIGURE_HEIGHT_IN * LOGICAL_DPI)
    }
}

pub struct Chart {
    pub series: Vec<SampleSeries>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// May contain `\n` for a multi-line title.
    pub title: String,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            title: String::new(),
        }
    }

    pub fn add_series(&mut self, series: SampleSeries) {
        self.series.push(series);
    }

    /// Render to a tightly packed, unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = opts.pixel_size();
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(RenderError::Surface { width: w, height: h })?;

        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(RenderError::ReadPixels.into());
        }
        Ok((pixels, w as u32, h as u32, row_bytes))
    }

    /// Render and encode in memory.
    pub fn render_to_bytes(&self, opts: &RenderOptions, format: OutputFormat) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let rgba = RgbaImage::from_raw(w, h, pixels).ok_or(RenderError::ReadPixels)?;
        let mut out = Vec::new();
        match format {
            OutputFormat::Jpeg => {
                let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();
                let mut enc = JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
                enc.set_pixel_density(PixelDensity::dpi(opts.dpi.min(u16::MAX as u32) as u16));
                enc.encode_image(&rgb).context("encode JPEG failed")?;
            }
            OutputFormat::Png => {
                PngEncoder::new(&mut out)
                    .write_image(rgba.as_raw(), w, h, ExtendedColorType::Rgba8)
                    .context("encode PNG failed")?;
            }
        }
        debug!(?format, width = w, height = h, bytes = out.len(), "encoded chart");
        Ok(out)
    }

    /// Render the chart to `path`; the format follows the file extension.
    pub fn render_to_file(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = OutputFormat::from_path(path)?;
        let bytes = self.render_to_bytes(opts, format)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote chart");
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        let (lw, lh) = opts.logical_size();
        let shaper = opts.draw_labels.then(TextShaper::new);
        let labels: Vec<&str> = self.series.iter().map(SampleSeries::label).collect();
        let legend = LegendLayout::new(
            labels.len(),
            legend_text_width(shaper.as_ref(), &labels),
            lh - opts.insets.top as f32 - LEGEND_MARGIN,
        );
        let insets = legend.fit_insets(opts.insets, lw);
        let rect = PlotRect::from_insets(lw, lh, &insets);
        let tf = PlotTransform::new(&rect, &self.x_axis, &self.y_axis);

        canvas.clear(theme.background);
        canvas.save();
        canvas.scale((opts.scale_factor(), opts.scale_factor()));

        let mut bg = skia::Paint::default();
        bg.set_color(theme.plot_background);
        canvas.draw_rect(sk_rect(&rect), &bg);

        draw_grid(canvas, &rect, &tf, &self.x_axis, &self.y_axis, theme);

        canvas.save();
        canvas.clip_rect(sk_rect(&rect), None, Some(true));
        let n = self.series.len();
        for (i, s) in self.series.iter().enumerate() {
            draw_line_series(canvas, &tf, s, series_color(i, n));
        }
        canvas.restore();

        draw_frame_and_ticks(canvas, &rect, &tf, &self.x_axis, &self.y_axis, theme);

        if let Some(shaper) = &shaper {
            draw_tick_labels(canvas, shaper, &rect, &tf, &self.x_axis, &self.y_axis, theme);
            draw_axis_labels(canvas, shaper, &rect, &self.x_axis, &self.y_axis, theme);
            draw_title(canvas, shaper, &rect, &self.title, theme);
        }
        draw_legend(canvas, shaper.as_ref(), &rect, &legend, &labels, theme);

        canvas.restore();
    }
}

// ---- helpers ----------------------------------------------------------------

fn sk_rect(r: &PlotRect) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(color);
    p
}

fn in_range(v: f64, axis: &Axis) -> bool {
    v >= axis.min.min(axis.max) && v <= axis.min.max(axis.max)
}

fn draw_grid(canvas: &skia::Canvas, rect: &PlotRect, tf: &PlotTransform, x: &Axis, y: &Axis, theme: &Theme) {
    let mut paint = stroke(theme.grid, 0.5);
    paint.set_alpha_f(GRID_ALPHA);
    paint.set_path_effect(skia::PathEffect::dash(&[6.0, 3.0], 0.0));

    for &v in x.major_ticks.iter().filter(|&&v| in_range(v, x)) {
        let px = tf.to_screen_x(v);
        canvas.draw_line((px, rect.top), (px, rect.bottom), &paint);
    }
    for &v in y.major_ticks.iter().filter(|&&v| in_range(v, y)) {
        let py = tf.to_screen_y(v);
        canvas.draw_line((rect.left, py), (rect.right, py), &paint);
    }
}

fn draw_line_series(canvas: &skia::Canvas, tf: &PlotTransform, series: &SampleSeries, color: skia::Color) {
    let data = &series.points;
    if data.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((tf.to_screen_x(x0), tf.to_screen_y(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((tf.to_screen_x(x), tf.to_screen_y(y)));
    }

    let mut paint = stroke(color, LINE_WIDTH);
    paint.set_stroke_join(skia::paint::Join::Round);
    canvas.draw_path(&path, &paint);
    debug!(power = series.power, points = data.len(), "drew series");
}

fn draw_frame_and_ticks(canvas: &skia::Canvas, rect: &PlotRect, tf: &PlotTransform, x: &Axis, y: &Axis, theme: &Theme) {
    canvas.draw_rect(sk_rect(rect), &stroke(theme.axis_line, 1.0));

    // Ticks point inward on all four sides.
    let tick = stroke(theme.tick, 1.0);
    for &v in x.major_ticks.iter().filter(|&&v| in_range(v, x)) {
        let px = tf.to_screen_x(v);
        canvas.draw_line((px, rect.bottom), (px, rect.bottom - MAJOR_TICK_LEN), &tick);
        canvas.draw_line((px, rect.top), (px, rect.top + MAJOR_TICK_LEN), &tick);
    }
    for (values, len) in [(&y.major_ticks, MAJOR_TICK_LEN), (&y.minor_ticks, MINOR_TICK_LEN)] {
        for &v in values.iter().filter(|&&v| in_range(v, y)) {
            let py = tf.to_screen_y(v);
            canvas.draw_line((rect.left, py), (rect.left + len, py), &tick);
            canvas.draw_line((rect.right, py), (rect.right - len, py), &tick);
        }
    }
}

fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    rect: &PlotRect,
    tf: &PlotTransform,
    x: &Axis,
    y: &Axis,
    theme: &Theme,
) {
    for (v, label) in x.labeled_ticks() {
        shaper.draw(canvas, &label, tf.to_screen_x(v), rect.bottom + 14.0, TICK_FONT, theme.axis_label, Anchor::Center);
    }
    for (v, label) in y.labeled_ticks() {
        shaper.draw(canvas, &label, rect.left - 8.0, tf.to_screen_y(v), TICK_FONT, theme.axis_label, Anchor::Right);
    }
}

fn draw_axis_labels(canvas: &skia::Canvas, shaper: &TextShaper, rect: &PlotRect, x: &Axis, y: &Axis, theme: &Theme) {
    let cx = (rect.left + rect.right) * 0.5;
    let cy = (rect.top + rect.bottom) * 0.5;
    shaper.draw(canvas, &x.label, cx, rect.bottom + 42.0, LABEL_FONT, theme.axis_label, Anchor::Center);
    shaper.draw_vertical(canvas, &y.label, rect.left - 88.0, cy, LABEL_FONT, theme.axis_label);
}

fn draw_title(canvas: &skia::Canvas, shaper: &TextShaper, rect: &PlotRect, title: &str, theme: &Theme) {
    let cx = (rect.left + rect.right) * 0.5;
    let lines: Vec<&str> = title.lines().collect();
    let line_h = TITLE_FONT * 1.4;
    let mut y = rect.top - 16.0 - line_h * (lines.len().saturating_sub(1)) as f32;
    for line in lines {
        shaper.draw(canvas, line, cx, y, TITLE_FONT, theme.axis_label, Anchor::Center);
        y += line_h;
    }
}

/// Legend grid. Entries fill each column top to bottom and wrap into a new
/// column once the next row would pass the bottom margin.
#[derive(Clone, Copy, Debug, PartialEq)]
struct LegendLayout {
    cols: usize,
    rows: usize,
    col_w: f32,
    row_h: f32,
}

impl LegendLayout {
    fn new(entries: usize, text_w: f32, max_height: f32) -> Self {
        let row_h = LEGEND_FONT * 1.7;
        let per_col = (((max_height - LEGEND_PAD * 2.0) / row_h).floor().max(1.0)) as usize;
        let cols = entries.div_ceil(per_col).max(1);
        let rows = entries.div_ceil(cols);
        Self { cols, rows, col_w: LEGEND_PAD * 2.0 + LEGEND_SAMPLE_W + text_w, row_h }
    }

    fn width(&self) -> f32 {
        self.col_w * self.cols as f32 + LEGEND_PAD
    }

    fn height(&self) -> f32 {
        LEGEND_PAD * 2.0 + self.row_h * self.rows as f32
    }

    /// Widen the right inset so the legend fits on the canvas, keeping at
    /// least `MIN_PLOT_WIDTH` for the plot itself.
    fn fit_insets(&self, mut insets: Insets, canvas_w: f32) -> Insets {
        let needed = (self.width() + LEGEND_GAP + LEGEND_MARGIN).ceil();
        let limit = (canvas_w - insets.left as f32 - MIN_PLOT_WIDTH).max(0.0);
        insets.right = insets.right.max(needed.min(limit) as u32);
        insets
    }
}

fn legend_text_width(shaper: Option<&TextShaper>, labels: &[&str]) -> f32 {
    match shaper {
        Some(s) => labels.iter().map(|l| s.measure_width(l, LEGEND_FONT)).fold(0.0f32, f32::max),
        None => 72.0,
    }
}

/// Legend placed outside the plot, anchored at its upper right corner.
fn draw_legend(
    canvas: &skia::Canvas,
    shaper: Option<&TextShaper>,
    rect: &PlotRect,
    layout: &LegendLayout,
    labels: &[&str],
    theme: &Theme,
) {
    if labels.is_empty() {
        return;
    }
    let left = rect.right + LEGEND_GAP;
    let top = rect.top;
    let box_rect = skia::Rect::from_xywh(left, top, layout.width(), layout.height());

    let mut fill = skia::Paint::default();
    fill.set_color(theme.legend_background);
    canvas.draw_rect(box_rect, &fill);
    canvas.draw_rect(box_rect, &stroke(theme.legend_border, 1.0));

    let n = labels.len();
    for (i, label) in labels.iter().enumerate() {
        let (col, row) = (i / layout.rows, i % layout.rows);
        let cy = top + LEGEND_PAD + layout.row_h * (row as f32 + 0.5);
        let x0 = left + LEGEND_PAD + layout.col_w * col as f32;
        canvas.draw_line((x0, cy), (x0 + LEGEND_SAMPLE_W, cy), &stroke(series_color(i, n), LINE_WIDTH));
        if let Some(s) = shaper {
            s.draw(canvas, label, x0 + LEGEND_SAMPLE_W + LEGEND_PAD, cy, LEGEND_FONT, theme.axis_label, Anchor::Left);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS_W: f32 = FIGURE_WIDTH_IN * LOGICAL_DPI;
    const CANVAS_H: f32 = FIGURE_HEIGHT_IN * LOGICAL_DPI;

    fn layout(entries: usize) -> LegendLayout {
        let insets = Insets::default();
        LegendLayout::new(entries, 72.0, CANVAS_H - insets.top as f32 - LEGEND_MARGIN)
    }

    #[test]
    fn default_legend_is_one_column_and_keeps_insets() {
        let l = layout(10);
        assert_eq!((l.cols, l.rows), (1, 10));
        assert_eq!(l.fit_insets(Insets::default(), CANVAS_W), Insets::default());
    }

    #[test]
    fn long_legend_wraps_into_columns_inside_canvas() {
        let insets = Insets::default();
        let l = layout(80);
        assert_eq!(l.cols, 3);
        assert_eq!(l.rows, 27);
        assert!(insets.top as f32 + l.height() <= CANVAS_H - LEGEND_MARGIN);

        let fitted = l.fit_insets(insets, CANVAS_W);
        assert!(fitted.right > insets.right);
        let rect = PlotRect::from_insets(CANVAS_W, CANVAS_H, &fitted);
        assert!(rect.right + LEGEND_GAP + l.width() <= CANVAS_W);
        assert!(rect.width() >= MIN_PLOT_WIDTH);
    }
}
