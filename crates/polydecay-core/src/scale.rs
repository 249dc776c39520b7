// File: crates/polydecay-core/src/scale.rs
// Summary: Step (X) and rate (Y) transforms from data space to plot pixels.

use crate::axis::Axis;
use crate::types::PlotRect;

/// General transform from data coordinates to pixel coordinates.
pub trait ScaleTransform {
    fn to_screen_x(&self, x: f64) -> f32;
    fn to_screen_y(&self, y: f64) -> f32;
}

/// Horizontal linear scale mapping `[min, max]` to `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct StepScale {
    pub left_px: f32,
    pub right_px: f32,
    pub min: f64,
    pub max: f64,
}

impl StepScale {
    pub fn new(left_px: f32, right_px: f32, min: f64, max: f64) -> Self {
        let max = if (max - min).abs() < 1e-12 { min + 1.0 } else { max };
        Self { left_px, right_px, min, max }
    }
    #[inline]
    pub fn to_px(&self, x: f64) -> f32 {
        self.left_px + ((x - self.min) / (self.max - self.min)) as f32 * (self.right_px - self.left_px)
    }
}

/// Vertical value scale mapping data range to `[top, bottom]` pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 };
        if (s.vmax - s.vmin).abs() < 1e-300 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn new_log10(top_px: f32, bottom_px: f32, mut vmin: f64, mut vmax: f64) -> Self {
        // Log needs a strictly positive range
        let eps = 1e-300;
        vmin = if vmin <= eps { eps } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        let log_min = vmin.log10();
        let log_max = vmax.log10();
        Self { top_px, bottom_px, vmin, vmax, log: true, log_min, log_max }
    }

    pub fn for_axis(axis: &Axis, top_px: f32, bottom_px: f32) -> Self {
        if axis.is_log() {
            Self::new_log10(top_px, bottom_px, axis.min, axis.max)
        } else {
            Self::new_linear(top_px, bottom_px, axis.min, axis.max)
        }
    }

    /// Non-positive values on a log scale map far below the plot; the caller clips.
    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let frac = if self.log {
            let yy = if y > 0.0 { y.log10() } else { self.log_min - 1e3 };
            (yy - self.log_min) / (self.log_max - self.log_min)
        } else {
            (y - self.vmin) / (self.vmax - self.vmin)
        };
        self.bottom_px - frac as f32 * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        let frac = ((self.bottom_px - py) / (self.bottom_px - self.top_px)) as f64;
        if self.log {
            10f64.powf(self.log_min + frac * (self.log_max - self.log_min))
        } else {
            self.vmin + frac * (self.vmax - self.vmin)
        }
    }
}

/// Both axes of a plot area.
#[derive(Clone, Copy, Debug)]
pub struct PlotTransform {
    pub x: StepScale,
    pub y: ValueScale,
}

impl PlotTransform {
    pub fn new(rect: &PlotRect, x_axis: &Axis, y_axis: &Axis) -> Self {
        Self {
            x: StepScale::new(rect.left, rect.right, x_axis.min, x_axis.max),
            y: ValueScale::for_axis(y_axis, rect.top, rect.bottom),
        }
    }
}

impl ScaleTransform for PlotTransform {
    fn to_screen_x(&self, x: f64) -> f32 { self.x.to_px(x) }
    fn to_screen_y(&self, y: f64) -> f32 { self.y.to_px(y) }
}
