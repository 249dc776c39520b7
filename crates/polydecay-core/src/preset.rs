// File: crates/polydecay-core/src/preset.rs
// Summary: Named value-axis presets (linear or log10 with varying tick density) and tick notation.

use std::fmt;
use std::str::FromStr;

use crate::axis::{Axis, ScaleKind, TickFormat};
use crate::error::ConfigError;
use crate::grid::{linspace, log_ticks};

/// Value-axis scale preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScalePreset {
    /// Linear axis with six evenly spaced ticks between the final and initial rate.
    #[default]
    None,
    /// Log10 axis, decade ticks.
    Standard,
    /// Log10 axis, denser decade ticks plus unlabeled minor ticks.
    Fine,
    /// Log10 axis for ranges spanning many decades.
    Wide,
}

impl ScalePreset {
    pub const ALL: [ScalePreset; 4] = [Self::None, Self::Standard, Self::Fine, Self::Wide];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Standard => "standard",
            Self::Fine => "fine",
            Self::Wide => "wide",
        }
    }

    /// Capitalised name for the chart title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Standard => "Standard",
            Self::Fine => "Fine",
            Self::Wide => "Wide",
        }
    }

    pub fn is_log(&self) -> bool { !matches!(self, Self::None) }

    /// Lower and upper bound multipliers applied to the final and initial rate.
    pub fn padding(&self) -> (f64, f64) {
        if self.is_log() { (0.8, 1.2) } else { (0.95, 1.05) }
    }

    /// Maximum number of major ticks the locator may place.
    pub fn major_tick_budget(&self) -> usize {
        match self {
            Self::None | Self::Standard | Self::Wide => 6,
            Self::Fine => 8,
        }
    }

    /// Rewrite `axis` for this preset: scale kind, bounds, major/minor ticks and
    /// label format. Log presets always label in scientific notation.
    pub fn configure(&self, axis: &mut Axis, final_rate: f64, init_rate: f64, notation: Notation) {
        let (lo_pad, hi_pad) = self.padding();
        axis.min = final_rate * lo_pad;
        axis.max = init_rate * hi_pad;
        axis.minor_ticks.clear();

        match self {
            Self::None => {
                axis.kind = ScaleKind::Linear;
                axis.major_ticks = linspace(final_rate, init_rate, 6);
                axis.tick_format = notation.tick_format();
            }
            Self::Standard | Self::Wide => {
                axis.kind = ScaleKind::Log10;
                axis.major_ticks = log_ticks(axis.min, axis.max, self.major_tick_budget(), &[1.0]);
                axis.tick_format = TickFormat::Scientific;
            }
            Self::Fine => {
                axis.kind = ScaleKind::Log10;
                axis.major_ticks = log_ticks(axis.min, axis.max, self.major_tick_budget(), &[1.0]);
                let subs: Vec<f64> = (2..10).map(|k| k as f64).collect();
                axis.minor_ticks = log_ticks(axis.min, axis.max, usize::MAX, &subs);
                axis.tick_format = TickFormat::Scientific;
            }
        }
    }
}

impl fmt::Display for ScalePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalePreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownScale(s.to_string()))
    }
}

/// Tick label notation for the linear value axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Notation {
    #[default]
    Scientific,
    Decimal,
}

impl Notation {
    /// Single-letter code used on the command line and in filenames.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Scientific => "s",
            Self::Decimal => "d",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Scientific => "scientific",
            Self::Decimal => "decimal",
        }
    }

    pub fn tick_format(&self) -> TickFormat {
        match self {
            Self::Scientific => TickFormat::Scientific,
            Self::Decimal => TickFormat::Plain,
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Notation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "s" | "scientific" => Ok(Self::Scientific),
            "d" | "decimal" => Ok(Self::Decimal),
            other => Err(ConfigError::UnknownNotation(other.to_string())),
        }
    }
}
