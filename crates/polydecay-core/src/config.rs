// File: crates/polydecay-core/src/config.rs
// Summary: Schedule parameters, defaults and one-shot validation.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::filename::generate_filename;
use crate::format::format_float;
use crate::preset::{Notation, ScalePreset};

pub const DEFAULT_POWERS: [f64; 10] = [0.1, 0.3, 0.5, 0.8, 1.0, 1.5, 2.0, 3.0, 5.0, 10.0];
pub const DEFAULT_LEARNING_RATE: f64 = 1e-4;
pub const DEFAULT_LR_END: f64 = 1e-7;
pub const DEFAULT_STEPS: u64 = 4000;
pub const DEFAULT_WARMUP: u64 = 400;
pub const DEFAULT_DPI: u32 = 300;

/// Everything needed to sample and render one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleConfig {
    /// Decay powers in plotting order; `None` selects [`DEFAULT_POWERS`].
    pub powers: Option<Vec<f64>>,
    /// Initial (peak) learning rate reached at the end of warmup.
    pub learning_rate: f64,
    /// Final learning rate reached at `steps`.
    pub lr_end: f64,
    pub steps: u64,
    pub warmup: u64,
    /// Explicit output path; `None` means a name is derived from the parameters.
    pub output: Option<PathBuf>,
    pub dpi: u32,
    pub scale: ScalePreset,
    pub notation: Notation,
    pub theme: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            powers: None,
            learning_rate: DEFAULT_LEARNING_RATE,
            lr_end: DEFAULT_LR_END,
            steps: DEFAULT_STEPS,
            warmup: DEFAULT_WARMUP,
            output: None,
            dpi: DEFAULT_DPI,
            scale: ScalePreset::None,
            notation: Notation::Scientific,
            theme: "classic".to_string(),
        }
    }
}

impl ScheduleConfig {
    pub fn powers(&self) -> &[f64] {
        self.powers.as_deref().unwrap_or(&DEFAULT_POWERS)
    }

    /// Text for one power in legends and filenames. The built-in list mixes
    /// whole and fractional powers and prints whole ones bare (`1`, `10`);
    /// user-supplied powers are floats and always carry a decimal point (`1.0`).
    pub fn power_text(&self, power: f64) -> String {
        match self.powers {
            None => format!("{power}"),
            Some(_) => format_float(power),
        }
    }

    /// Reject parameters that would divide by zero or produce an empty chart.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.powers().is_empty() {
            return Err(ConfigError::NoPowers);
        }
        if let Some(&p) = self.powers().iter().find(|p| !p.is_finite()) {
            return Err(ConfigError::InvalidPower(p));
        }
        check_rate("learning rate", self.learning_rate)?;
        if !(self.lr_end.is_finite() && self.lr_end >= 0.0) {
            return Err(ConfigError::InvalidRate { name: "final learning rate", value: self.lr_end });
        }
        if self.scale.is_log() && self.lr_end <= 0.0 {
            return Err(ConfigError::LogScaleNeedsPositive(self.lr_end));
        }
        if self.steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        if self.warmup >= self.steps {
            return Err(ConfigError::WarmupTooLong { warmup: self.warmup, steps: self.steps });
        }
        if self.dpi == 0 {
            return Err(ConfigError::ZeroDpi);
        }
        crate::theme::find(&self.theme)?;
        Ok(())
    }

    /// The explicit output path, or the generated descriptive filename.
    pub fn resolved_output(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(generate_filename(self)))
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRate { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(ScheduleConfig::default().validate(), Ok(()));
    }

    #[test]
    fn warmup_must_end_before_steps() {
        let cfg = ScheduleConfig { warmup: 4000, ..Default::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::WarmupTooLong { warmup: 4000, steps: 4000 }));
    }

    #[test]
    fn rejects_empty_powers_and_bad_rates() {
        let cfg = ScheduleConfig { powers: Some(vec![]), ..Default::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::NoPowers));

        let cfg = ScheduleConfig { learning_rate: 0.0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidRate { .. })));

        let cfg = ScheduleConfig { lr_end: -1e-7, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidRate { .. })));

        let cfg = ScheduleConfig { powers: Some(vec![1.0, f64::NAN]), ..Default::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidPower(_))));
    }

    #[test]
    fn zero_final_rate_only_on_linear_scale() {
        let cfg = ScheduleConfig { lr_end: 0.0, ..Default::default() };
        assert_eq!(cfg.validate(), Ok(()));

        let cfg = ScheduleConfig { lr_end: 0.0, scale: ScalePreset::Fine, ..Default::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::LogScaleNeedsPositive(0.0)));
    }

    #[test]
    fn default_powers_print_whole_numbers_bare() {
        let cfg = ScheduleConfig::default();
        assert_eq!(cfg.powers(), &DEFAULT_POWERS);
        let text: Vec<String> = cfg.powers().iter().map(|&p| cfg.power_text(p)).collect();
        assert_eq!(text, ["0.1", "0.3", "0.5", "0.8", "1", "1.5", "2", "3", "5", "10"]);

        let cfg = ScheduleConfig { powers: Some(vec![1.0, 2.5]), ..Default::default() };
        assert_eq!(cfg.power_text(1.0), "1.0");
        assert_eq!(cfg.power_text(2.5), "2.5");
    }

    #[test]
    fn explicit_output_wins() {
        let cfg = ScheduleConfig { output: Some(PathBuf::from("out/plot.png")), ..Default::default() };
        assert_eq!(cfg.resolved_output(), PathBuf::from("out/plot.png"));
    }
}
