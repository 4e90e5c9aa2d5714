//! Parsing of duration strings such as `500ms`, `1.5s` or `1h30m`.

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ParseDurationError(String);

const NANOS_PER_SEC: u128 = 1_000_000_000;

// Largest value a Go `time.Duration` holds, about 2562047h.
const MAX_NANOS: u128 = i64::MAX as u128;

// Fraction digits beyond this cannot change the result at nanosecond precision
// for any unit up to hours, and keep the arithmetic inside u128.
const MAX_FRACTION_DIGITS: usize = 18;

fn unit_scale(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(60 * NANOS_PER_SEC),
        "h" => Some(3_600 * NANOS_PER_SEC),
        _ => None,
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let n = s.bytes().take_while(u8::is_ascii_digit).count();
    s.split_at(n)
}

/// Parse a signed sequence of `<decimal><unit>` terms.
///
/// A bare `0` is accepted. Negative non-zero durations are rejected because
/// they cannot be represented as a [`Duration`].
pub fn parse_duration(input: &str) -> Result<Duration, ParseDurationError> {
    let invalid = |reason: &str| ParseDurationError(format!("invalid duration {input:?}: {reason}"));

    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };
    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid("empty"));
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, after_whole) = split_digits(rest);
        rest = after_whole;
        let mut fraction = "";
        if let Some(after_dot) = rest.strip_prefix('.') {
            let (digits, after_fraction) = split_digits(after_dot);
            fraction = digits;
            rest = after_fraction;
        }
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("expected a number"));
        }

        let unit_len = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (unit, after_unit) = rest.split_at(unit_len);
        rest = after_unit;
        if unit.is_empty() {
            return Err(invalid("missing unit"));
        }
        let scale = unit_scale(unit).ok_or_else(|| invalid(&format!("unknown unit {unit:?}")))?;

        let whole_value: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("overflow"))?
        };
        let mut term = whole_value
            .checked_mul(scale)
            .ok_or_else(|| invalid("overflow"))?;
        if !fraction.is_empty() {
            let digits = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
            let numerator: u128 = digits.parse().map_err(|_| invalid("overflow"))?;
            let denominator = 10u128.pow(digits.len() as u32);
            term += numerator * scale / denominator;
        }
        total = total.checked_add(term).ok_or_else(|| invalid("overflow"))?;
        if total > MAX_NANOS {
            return Err(invalid("overflow"));
        }
    }

    if negative && total > 0 {
        return Err(invalid("negative durations are not allowed"));
    }
    let secs = u64::try_from(total / NANOS_PER_SEC).map_err(|_| invalid("overflow"))?;
    let nanos = (total % NANOS_PER_SEC) as u32;
    Ok(Duration::new(secs, nanos))
}
