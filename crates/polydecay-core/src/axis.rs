// File: crates/polydecay-core/src/axis.rs
// Summary: Axis model with label, bounds, scale kind and tick configuration.

use crate::format::{format_int, format_plain, format_sci};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

/// How major tick values are turned into labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// `1e-04`
    Scientific,
    /// `0.0001`
    Plain,
    /// `4000`
    Integer,
}

impl TickFormat {
    pub fn label(&self, value: f64) -> String {
        match self {
            TickFormat::Scientific => format_sci(value, 0),
            TickFormat::Plain => format_plain(value),
            TickFormat::Integer => format_int(value),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    pub major_ticks: Vec<f64>,
    /// Drawn as short unlabeled marks.
    pub minor_ticks: Vec<f64>,
    pub tick_format: TickFormat,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            kind: ScaleKind::Linear,
            major_ticks: Vec::new(),
            minor_ticks: Vec::new(),
            tick_format: TickFormat::Plain,
        }
    }

    pub fn default_x() -> Self {
        let mut a = Self::new("Training Steps", 0.0, 1.0);
        a.tick_format = TickFormat::Integer;
        a
    }

    pub fn default_y() -> Self {
        let mut a = Self::new("Learning Rate (η)", 0.0, 1.0);
        a.tick_format = TickFormat::Scientific;
        a
    }

    pub fn is_log(&self) -> bool { self.kind == ScaleKind::Log10 }

    /// Major ticks that fall inside the axis bounds, paired with their labels.
    pub fn labeled_ticks(&self) -> Vec<(f64, String)> {
        let (lo, hi) = (self.min.min(self.max), self.min.max(self.max));
        self.major_ticks
            .iter()
            .filter(|&&v| v >= lo && v <= hi)
            .map(|&v| (v, self.tick_format.label(v)))
            .collect()
    }
}
