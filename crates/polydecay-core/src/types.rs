// File: crates/polydecay-core/src/types.rs
// Summary: Shared layout constants (figure size, logical canvas, paddings).

/// Figure width in inches.
pub const FIGURE_WIDTH_IN: f32 = 12.0;
/// Figure height in inches.
pub const FIGURE_HEIGHT_IN: f32 = 8.0;
/// Layout is authored at this many logical pixels per inch and scaled to the output DPI.
pub const LOGICAL_DPI: f32 = 100.0;

/// Screen margins around the plot area, in logical pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// Room for tick labels and the rotated y label on the left, the legend on the right.
    fn default() -> Self {
        Self::new(112, 210, 84, 72)
    }
}

/// Plot area in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub fn from_insets(width: f32, height: f32, insets: &Insets) -> Self {
        Self {
            left: insets.left as f32,
            top: insets.top as f32,
            right: width - insets.right as f32,
            bottom: height - insets.bottom as f32,
        }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}
