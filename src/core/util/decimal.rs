use num::bigint::BigInt;
use num::{BigRational, Signed};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalParseError {
    #[error("decimal literal is empty")]
    Empty,
    #[error("invalid decimal literal: {0:?}")]
    Invalid(String),
}

/// Parses a plain decimal literal (`"-2.5"`, `"1.2"`, `"+3"`, `".5"`) into an exact rational.
pub fn parse_decimal(text: &str) -> Result<BigRational, DecimalParseError> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(DecimalParseError::Empty);
    }

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(DecimalParseError::Invalid(text.to_string()));
    }

    let mantissa: BigInt = format!("{whole}{fraction}")
        .parse()
        .map_err(|_| DecimalParseError::Invalid(text.to_string()))?;
    let denominator = num::pow(BigInt::from(10u32), fraction.len());
    let value = BigRational::new(mantissa, denominator);

    Ok(if negative { -value } else { value })
}

/// Formats a rational with exactly `digits` fraction digits, rounding half away from zero.
#[must_use]
pub fn format_fixed(value: &BigRational, digits: usize) -> String {
    let scale = num::pow(BigInt::from(10u32), digits);
    let scaled = (value * BigRational::from_integer(scale.clone()))
        .round()
        .to_integer();

    let sign = if scaled.is_negative() { "-" } else { "" };
    let magnitude = scaled.abs();
    let whole = &magnitude / &scale;
    let fraction = &magnitude % &scale;

    if digits == 0 {
        return format!("{sign}{whole}");
    }

    format!("{sign}{whole}.{:0>digits$}", fraction.to_string())
}
