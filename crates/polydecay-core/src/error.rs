// File: crates/polydecay-core/src/error.rs
// Summary: Error types for configuration validation and image output.

use thiserror::Error;

/// Rejected schedule parameters. Raised once, before any sampling happens.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("at least one decay power is required")]
    NoPowers,

    #[error("decay power must be finite, got {0}")]
    InvalidPower(f64),

    #[error("{name} is out of range: {value}")]
    InvalidRate { name: &'static str, value: f64 },

    #[error("log scale needs a positive final learning rate, got {0}")]
    LogScaleNeedsPositive(f64),

    #[error("total steps must be greater than zero")]
    ZeroSteps,

    #[error("warmup ({warmup}) must be smaller than total steps ({steps})")]
    WarmupTooLong { warmup: u64, steps: u64 },

    #[error("dpi must be greater than zero")]
    ZeroDpi,

    #[error("unknown scale preset '{0}' (expected none, standard, fine or wide)")]
    UnknownScale(String),

    #[error("unknown notation '{0}' (expected s or d)")]
    UnknownNotation(String),

    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
}

/// Failures specific to encoding the rendered chart.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unsupported output format '{0}' (use .jpg, .jpeg or .png)")]
    UnsupportedFormat(String),

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to read pixels back from the raster surface")]
    ReadPixels,
}
