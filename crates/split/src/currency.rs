/// Symbol prefixed to every displayed amount
pub const RUPEE: &str = "₹";

/// Largest magnitude whose eighths are still exact integers
const EXACT_EIGHTHS_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53

/// Format `value` as `<symbol><value>` with exactly two decimals
///
/// Halfway cases round away from zero (`0.125` shows as `0.13`), and
/// non-finite values render as `NaN`, `Infinity` or `-Infinity`.
pub fn format_currency(symbol: &str, value: f64) -> String {
    if value.is_nan() {
        format!("{symbol}NaN")
    } else if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{symbol}{sign}Infinity")
    } else {
        format!("{symbol}{}", fixed_two(value))
    }
}

/// Two-decimal rendering of a finite value
///
/// `{:.2}` rounds the exact binary value, which is right except on exact
/// half-cents, where it picks the even digit. A half-cent is exactly
/// representable only as an odd number of eighths, so those are handled in
/// integer arithmetic.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn fixed_two(value: f64) -> String {
    // -0.0 is not below zero, so it prints without a sign
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let eighths = magnitude * 8.0;

    if eighths < EXACT_EIGHTHS_LIMIT && eighths.fract() == 0.0 && (eighths as u64) % 2 == 1 {
        // value = j/8, cents = 12.5 * j, rounded up
        let cents = (eighths as u64 * 25 + 1) / 2;
        return format!("{sign}{}.{:02}", cents / 100, cents % 100);
    }

    format!("{sign}{magnitude:.2}")
}
