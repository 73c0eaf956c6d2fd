//! Store number → plain integer conversion.
//!
//! DynamoDB hands numbers back as arbitrary-precision decimal strings. The
//! response contract only allows a plain non-negative integer, so every count
//! passes through [`coerce_count`] before it is serialized. Values that are
//! not integral or do not fit in `u64` are rejected rather than truncated.

use crate::error::{CounterError, Result};

/// Largest number of significant digits a `u64` can hold.
const MAX_U64_DIGITS: usize = 20;

/// Convert a decimal number string (plain or scientific notation) into a `u64`.
///
/// Accepts `"42"`, `"+42"`, `"42.000"`, `"4.2E1"`, `"-0"`. Rejects fractional,
/// negative, malformed, and out-of-range values with `CounterError::Coercion`.
pub fn coerce_count(raw: &str) -> Result<u64> {
    let s = raw.trim();
    let invalid = || CounterError::Coercion(format!("invalid count value: {raw:?}"));

    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(pos) => {
            let exp: i64 = unsigned[pos + 1..].parse().map_err(|_| invalid())?;
            (&unsigned[..pos], exp)
        }
        None => (unsigned, 0),
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    // All digits as one integer string, scaled by 10^scale.
    let digits = format!("{int_part}{frac_part}");
    let scale = exponent
        .checked_sub(frac_part.len() as i64)
        .ok_or_else(invalid)?;

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(0);
    }
    if negative {
        return Err(CounterError::Coercion(format!("negative count value: {raw:?}")));
    }

    let integral = if scale >= 0 {
        let scale = scale as usize;
        if digits.len().saturating_add(scale) > MAX_U64_DIGITS {
            return Err(out_of_range(raw));
        }
        format!("{digits}{}", "0".repeat(scale))
    } else {
        let drop = scale.unsigned_abs() as usize;
        if drop >= digits.len() {
            return Err(non_integral(raw));
        }
        let (head, tail) = digits.split_at(digits.len() - drop);
        if tail.bytes().any(|b| b != b'0') {
            return Err(non_integral(raw));
        }
        head.to_string()
    };

    integral.parse::<u64>().map_err(|_| out_of_range(raw))
}

fn non_integral(raw: &str) -> CounterError {
    CounterError::Coercion(format!("count is not an integer: {raw:?}"))
}

fn out_of_range(raw: &str) -> CounterError {
    CounterError::Coercion(format!("count exceeds {}: {raw:?}", u64::MAX))
}
