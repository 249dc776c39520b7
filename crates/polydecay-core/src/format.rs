// File: crates/polydecay-core/src/format.rs
// Summary: Number formatting for tick labels, legends, filenames and the run summary.

/// Scientific notation with a signed, zero-padded two-digit exponent:
/// `format_sci(1e-4, 0) == "1e-04"`, `format_sci(1e-4, 1) == "1.0e-04"`.
pub fn format_sci(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let raw = format!("{:.*e}", precision, value);
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.abs())
        }
        None => raw,
    }
}

/// Shortest float literal, always carrying a decimal point for whole numbers:
/// `1.0`, `0.5`, `10.0`, `0.3`.
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Plain decimal label with trailing zeros trimmed, keeping three significant
/// digits below one: `0.0001`, `2.008e-05` becomes `0.0000201`.
pub fn format_plain(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (2 - magnitude).clamp(0, 15) as usize;
    let s = format!("{:.*}", decimals, value);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Integer tick label for step counts.
pub fn format_int(value: f64) -> String {
    format!("{}", value.trunc() as i64)
}
