//! Lenient number parsing for form values
//!
//! Form controls hand us whatever the user typed. Only the leading numeric
//! part of a value counts: `"12abc"` reads as 12 and `"2.9"` reads as 2 when
//! an integer is wanted. Anything after the number is ignored.

/// Why a form value could not be read as a number
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("value is empty")]
    Empty,
    #[error("no leading number in {0:?}")]
    NotANumber(String),
}

/// Parse the leading decimal number of `raw`
///
/// Accepts an optional sign, digits with an optional fraction, an optional
/// exponent, or `Infinity`.
pub fn parse_decimal(raw: &str) -> Result<f64, ParseError> {
    let s = raw.trim_start();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    let bytes = s.as_bytes();
    let mut end = sign_len(bytes);

    if s[end..].starts_with("Infinity") {
        return Ok(if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = digit_run(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_run(&bytes[end + 1..]);
        // A bare trailing dot only counts when digits came before it
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return Err(ParseError::NotANumber(raw.to_string()));
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_sign = sign_len(&bytes[end + 1..]);
        let exp_digits = digit_run(&bytes[end + 1 + exp_sign..]);
        if exp_digits > 0 {
            end += 1 + exp_sign + exp_digits;
        }
    }

    s[..end]
        .parse::<f64>()
        .map_err(|_| ParseError::NotANumber(raw.to_string()))
}

/// Parse the leading integer of `raw`
///
/// A `0x`/`0X` prefix switches to hexadecimal. Values too large for `i64`
/// saturate.
pub fn parse_integer(raw: &str) -> Result<i64, ParseError> {
    let s = raw.trim_start();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    let bytes = s.as_bytes();
    let sign = sign_len(bytes);
    let rest = &s[sign..];

    let (digits, radix) = match rest.get(..2) {
        Some("0x" | "0X") => {
            let hex = &rest[2..];
            (&hex[..hex_digit_run(hex.as_bytes())], 16)
        }
        _ => (&rest[..digit_run(rest.as_bytes())], 10),
    };
    if digits.is_empty() {
        return Err(ParseError::NotANumber(raw.to_string()));
    }

    let negative = bytes[0] == b'-';
    let saturated = if negative { i64::MIN } else { i64::MAX };
    let magnitude = match u64::from_str_radix(digits, radix) {
        Ok(m) => i128::from(m),
        Err(_) => return Ok(saturated),
    };
    let value = if negative { -magnitude } else { magnitude };
    Ok(i64::try_from(value).unwrap_or(saturated))
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn hex_digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_hexdigit()).count()
}
