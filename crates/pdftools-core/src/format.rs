//! Human-readable byte sizes
//!
//! Binary prefixes (factor 1024) with the unit names used throughout the
//! upload summaries: `Bytes`, `KB`, `MB`, `GB`.

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const FACTOR: f64 = 1024.0;

/// Decimal places used by [`format_bytes`]
pub const DEFAULT_DECIMALS: i32 = 2;

/// Upper bound on requested decimals (same range `Number.toFixed` accepts)
const MAX_DECIMALS: i32 = 100;

/// Format a byte count with two decimal places, e.g. `1536` -> `"1.5 KB"`
pub fn format_bytes(bytes: f64) -> String {
    format_bytes_with(bytes, DEFAULT_DECIMALS)
}

/// Format a byte count with an explicit number of decimal places
///
/// Negative `decimals` are treated as 0. Zero, negative, NaN and infinite
/// counts all yield `"0 Bytes"`. Trailing zeros in the fraction are dropped,
/// so `1024` is `"1 KB"` rather than `"1.00 KB"`.
pub fn format_bytes_with(bytes: f64, decimals: i32) -> String {
    if !bytes.is_finite() || bytes <= 0.0 {
        return "0 Bytes".to_string();
    }

    let decimals = decimals.clamp(0, MAX_DECIMALS) as usize;

    // Repeated division instead of log(bytes)/log(1024): exact on powers of two
    let mut scaled = bytes;
    let mut unit = 0;
    while scaled >= FACTOR && unit < UNITS.len() - 1 {
        scaled /= FACTOR;
        unit += 1;
    }

    let fixed = format!("{:.*}", decimals, round_half_up(scaled, decimals));
    format!("{} {}", trim_fraction(&fixed), UNITS[unit])
}

/// Round to `decimals` places with ties going up, as `Number.toFixed` does
///
/// `{:.N}` alone rounds exact ties to even (`1.125` -> `1.12`).
fn round_half_up(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Drop trailing fractional zeros (and a bare trailing point)
fn trim_fraction(fixed: &str) -> &str {
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed
    }
}
