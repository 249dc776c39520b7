// File: crates/polydecay-core/src/filename.rs
// Summary: Descriptive output filename derived from the schedule parameters.

use crate::config::ScheduleConfig;
use crate::format::format_sci;

/// Extension used for generated names.
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Encode every parameter into a filename, most significant first:
///
/// `lr_decay_p0.5-1.0-2.0_lr1e-04_lre1e-07_s4000_w400_scale_none_not_s_dpi300.jpg`
pub fn generate_filename(cfg: &ScheduleConfig) -> String {
    let powers = cfg.powers().iter().map(|&p| cfg.power_text(p)).collect::<Vec<_>>().join("-");
    format!(
        "lr_decay_p{powers}_lr{lr}_lre{lre}_s{steps}_w{warmup}_scale_{scale}_not_{notation}_dpi{dpi}.{DEFAULT_EXTENSION}",
        lr = format_sci(cfg.learning_rate, 0),
        lre = format_sci(cfg.lr_end, 0),
        steps = cfg.steps,
        warmup = cfg.warmup,
        scale = cfg.scale.as_str(),
        notation = cfg.notation.code(),
        dpi = cfg.dpi,
    )
}
