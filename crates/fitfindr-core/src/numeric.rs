// ABOUTME: Lenient numeric parsing for measurement text captured from profile forms
// ABOUTME: Takes the longest numeric prefix and yields NaN when there is none
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Measurement fields arrive as free text (`"85"`, `" 92.5cm"`, `"abc"`).
//! They are parsed on every use rather than once at the boundary, so that a
//! malformed value behaves as NaN inside the threshold ladders: NaN fails
//! every `<` comparison and lands in the last bracket.

const INFINITY_LITERAL: &str = "Infinity";

fn trim_leading_whitespace(text: &str) -> &str {
    text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Length of the longest decimal literal at the start of `bytes`
/// (optional sign, digits, optional fraction, optional exponent)
fn decimal_prefix_len(bytes: &[u8]) -> usize {
    let mut pos = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(&bytes[exp_pos.min(bytes.len())..]);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }

    pos
}

/// Parse a measurement the way a form-backed web client does
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"85cm"` parses as `85.0`. Text without a numeric prefix yields `NaN`.
#[must_use]
pub fn parse_measurement(text: &str) -> f64 {
    let trimmed = trim_leading_whitespace(text);

    let (sign, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1.0, &trimmed[1..]),
        Some(b'+') => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };
    if unsigned.starts_with(INFINITY_LITERAL) {
        return sign * f64::INFINITY;
    }

    let len = decimal_prefix_len(trimmed.as_bytes());
    if len == 0 {
        return f64::NAN;
    }
    trimmed[..len].parse().unwrap_or(f64::NAN)
}

/// Parse the leading integer of a size label (`"32"` → `Some(32)`)
///
/// Returns `None` when the label does not start with digits.
#[must_use]
pub fn parse_leading_integer(text: &str) -> Option<i64> {
    let trimmed = trim_leading_whitespace(text);
    let bytes = trimmed.as_bytes();
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign_len..]);
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}

/// Round half-up towards positive infinity (`2.5` → `3`, `-2.5` → `-2`)
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Render a whole number for display, keeping `NaN` and infinities readable
#[must_use]
pub fn format_whole_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            INFINITY_LITERAL.to_owned()
        } else {
            format!("-{INFINITY_LITERAL}")
        }
    } else {
        // adding 0.0 folds -0.0 into 0.0
        format!("{}", value + 0.0)
    }
}
