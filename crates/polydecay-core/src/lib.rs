// File: crates/polydecay-core/src/lib.rs
// Summary: Core library entry point; schedule math, axis presets and chart rendering.

pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod filename;
pub mod format;
pub mod grid;
pub mod plot;
pub mod preset;
pub mod scale;
pub mod schedule;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{Axis, ScaleKind, TickFormat};
pub use chart::{Chart, OutputFormat, RenderOptions};
pub use config::ScheduleConfig;
pub use error::{ConfigError, RenderError};
pub use filename::generate_filename;
pub use plot::{build_chart, plot_schedules, summary_lines};
pub use preset::{Notation, ScalePreset};
pub use schedule::{learning_rate, sample_all, PolynomialDecay, SAMPLE_COUNT};
pub use series::SampleSeries;
pub use theme::Theme;
pub use text::TextShaper;
