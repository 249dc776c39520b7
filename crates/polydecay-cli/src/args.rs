// File: crates/polydecay-cli/src/args.rs
// Summary: Command-line flags and their conversion into a ScheduleConfig.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use polydecay_core::config::{DEFAULT_DPI, DEFAULT_LEARNING_RATE, DEFAULT_LR_END, DEFAULT_STEPS, DEFAULT_WARMUP};
use polydecay_core::{Notation, ScalePreset, ScheduleConfig};

#[derive(Parser, Debug)]
#[command(
    name = "polydecay",
    author,
    version,
    about = "Plot polynomial learning rate decay curves",
    after_help = "Scale presets:\n  none      linear scale (default)\n  standard  regular log scale\n  fine      dense log scale for small changes\n  wide      extended log scale for large ranges\n\nNotation:\n  s  scientific (default)\n  d  decimal"
)]
pub struct Cli {
    /// Space-separated polynomial powers (e.g. 0.5 1 2)
    #[arg(short, long, value_name = "P", num_args = 1..)]
    pub powers: Option<Vec<f64>>,

    /// Initial learning rate
    #[arg(long, visible_alias = "lr", value_name = "LR", default_value_t = DEFAULT_LEARNING_RATE)]
    pub learning_rate: f64,

    /// Final learning rate
    #[arg(long, visible_alias = "lre", value_name = "LR", default_value_t = DEFAULT_LR_END)]
    pub lr_end: f64,

    /// Total training steps
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_STEPS)]
    pub steps: u64,

    /// Number of warmup steps
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_WARMUP)]
    pub warmup: u64,

    /// Output image path (.jpg, .jpeg or .png); derived from the parameters when omitted
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Image DPI
    #[arg(long, value_name = "N", default_value_t = DEFAULT_DPI)]
    pub dpi: u32,

    /// Value-axis scale preset
    #[arg(short = 'l', long, value_name = "PRESET", default_value = "none",
          value_parser = ["none", "standard", "fine", "wide"])]
    pub log_scale: String,

    /// Y-axis notation: s (scientific) or d (decimal)
    #[arg(short, long, value_name = "N", default_value = "s", value_parser = ["s", "d"])]
    pub notation: String,

    /// Color theme
    #[arg(short, long, value_name = "NAME", default_value = "classic", value_parser = ["classic", "dark"])]
    pub theme: String,

    /// Log rendering details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> anyhow::Result<ScheduleConfig> {
        Ok(ScheduleConfig {
            powers: self.powers,
            learning_rate: self.learning_rate,
            lr_end: self.lr_end,
            steps: self.steps,
            warmup: self.warmup,
            output: self.output,
            dpi: self.dpi,
            scale: self.log_scale.parse::<ScalePreset>()?,
            notation: self.notation.parse::<Notation>()?,
            theme: self.theme,
        })
    }
}

/// Rewrite the single-dash `-lr`/`-lre` spellings (optionally `=VALUE`) to
/// their long forms; clap would otherwise read `-lr` as `-l r`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::<OsString>::into)
        .map(|arg| legacy_rate_flag(&arg).map(OsString::from).unwrap_or(arg))
        .collect()
}

fn legacy_rate_flag(arg: &OsString) -> Option<String> {
    let s = arg.to_str()?;
    let (flag, value) = match s.split_once('=') {
        Some((f, v)) => (f, Some(v)),
        None => (s, None),
    };
    let long = match flag {
        "-lr" => "--lr",
        "-lre" => "--lre",
        _ => return None,
    };
    Some(match value {
        Some(v) => format!("{long}={v}"),
        None => long.to_string(),
    })
}
