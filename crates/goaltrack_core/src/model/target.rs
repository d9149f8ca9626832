//! Target text parsing.
//!
//! Form input arrives as free text from a numeric keyboard. The leading
//! run of digits is the value; anything after it is ignored.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reasons target text cannot become a goal target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetParseError {
    /// Text is empty or whitespace only.
    Empty,
    /// Text does not start with a digit.
    NotANumber,
    /// Parsed value is zero or negative.
    NotPositive,
    /// Parsed value does not fit in `u32`.
    TooLarge,
}

impl Display for TargetParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "target must not be empty"),
            Self::NotANumber => write!(f, "target must start with a number"),
            Self::NotPositive => write!(f, "target must be a positive integer"),
            Self::TooLarge => write!(f, "target exceeds {}", u32::MAX),
        }
    }
}

impl Error for TargetParseError {}

/// Parses goal target text into a positive integer.
///
/// # Contract
/// - Surrounding whitespace is ignored.
/// - One leading `+` is accepted; a leading `-` yields `NotPositive`.
/// - Trailing text after the digits is ignored (`"10 km"` -> 10).
pub fn parse_target(text: &str) -> Result<u32, TargetParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TargetParseError::Empty);
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return Err(TargetParseError::NotANumber);
    }
    let digits = &unsigned[..digits_len];

    if negative {
        return Err(TargetParseError::NotPositive);
    }
    let value = digits
        .parse::<u32>()
        .map_err(|_| TargetParseError::TooLarge)?;
    if value == 0 {
        return Err(TargetParseError::NotPositive);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{parse_target, TargetParseError};

    #[test]
    fn accepts_plain_and_padded_numbers() {
        assert_eq!(parse_target("10"), Ok(10));
        assert_eq!(parse_target(" 7 "), Ok(7));
        assert_eq!(parse_target("+3"), Ok(3));
        assert_eq!(parse_target("007"), Ok(7));
    }

    #[test]
    fn ignores_trailing_text() {
        assert_eq!(parse_target("10 km"), Ok(10));
        assert_eq!(parse_target("4.5"), Ok(4));
    }

    #[test]
    fn rejects_unusable_values() {
        assert_eq!(parse_target(""), Err(TargetParseError::Empty));
        assert_eq!(parse_target("   "), Err(TargetParseError::Empty));
        assert_eq!(parse_target("abc"), Err(TargetParseError::NotANumber));
        assert_eq!(parse_target("+"), Err(TargetParseError::NotANumber));
        assert_eq!(parse_target("-2"), Err(TargetParseError::NotPositive));
        assert_eq!(parse_target("-0"), Err(TargetParseError::NotPositive));
        assert_eq!(parse_target("0"), Err(TargetParseError::NotPositive));
        assert_eq!(parse_target("99999999999"), Err(TargetParseError::TooLarge));
    }
}
