//! Destination phone number for the messaging deep link.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneNumberError {
    /// The input contains no digits.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input contains a character that is neither a digit nor a separator.
    #[error("phone number contains invalid character {0:?}")]
    InvalidCharacter(char),
    /// The input has more digits than E.164 allows.
    #[error("phone number must have at most {max} digits")]
    TooLong {
        /// Maximum allowed number of digits.
        max: usize,
    },
}

/// A phone number in international format, stored as digits only.
///
/// ## Constraints
///
/// - 1-15 digits (E.164 limit)
/// - An optional leading `+` is dropped
/// - Spaces, `-`, `(` and `)` are accepted as separators and dropped
///
/// ## Examples
///
/// ```
/// use order_link_core::PhoneNumber;
///
/// let phone = PhoneNumber::parse("+55 (11) 91234-5678").unwrap();
/// assert_eq!(phone.as_str(), "5511912345678");
///
/// assert!(PhoneNumber::parse("").is_err());
/// assert!(PhoneNumber::parse("call me").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Maximum number of digits (ITU-T E.164).
    pub const MAX_DIGITS: usize = 15;

    /// Parse a `PhoneNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Has no digits
    /// - Contains a character other than digits, separators or a leading `+`
    /// - Has more than 15 digits
    pub fn parse(s: &str) -> Result<Self, PhoneNumberError> {
        let trimmed = s.trim();
        let body = trimmed.strip_prefix('+').unwrap_or(trimmed);

        let mut digits = String::with_capacity(body.len());
        for c in body.chars() {
            match c {
                '0'..='9' => digits.push(c),
                ' ' | '-' | '(' | ')' => {}
                other => return Err(PhoneNumberError::InvalidCharacter(other)),
            }
        }

        if digits.is_empty() {
            return Err(PhoneNumberError::Empty);
        }

        if digits.len() > Self::MAX_DIGITS {
            return Err(PhoneNumberError::TooLong {
                max: Self::MAX_DIGITS,
            });
        }

        Ok(Self(digits))
    }

    /// Returns the digits as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = PhoneNumberError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_digits() {
        let phone = PhoneNumber::parse("000000000").unwrap();
        assert_eq!(phone.as_str(), "000000000");
    }

    #[test]
    fn test_parse_strips_separators() {
        let phone = PhoneNumber::parse("+1 (555) 123-4567").unwrap();
        assert_eq!(phone.as_str(), "15551234567");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(PhoneNumber::parse(""), Err(PhoneNumberError::Empty)));
        assert!(matches!(PhoneNumber::parse("+"), Err(PhoneNumberError::Empty)));
        assert!(matches!(
            PhoneNumber::parse(" - "),
            Err(PhoneNumberError::Empty)
        ));
    }

    #[test]
    fn test_parse_invalid_character() {
        assert!(matches!(
            PhoneNumber::parse("5511x"),
            Err(PhoneNumberError::InvalidCharacter('x'))
        ));
        // Plus is only allowed in front
        assert!(matches!(
            PhoneNumber::parse("55+11"),
            Err(PhoneNumberError::InvalidCharacter('+'))
        ));
    }

    #[test]
    fn test_parse_rejects_dot_separator() {
        assert!(matches!(
            PhoneNumber::parse("11.9123.4567"),
            Err(PhoneNumberError::InvalidCharacter('.'))
        ));
    }

    #[test]
    fn test_parse_too_long() {
        assert!(PhoneNumber::parse(&"9".repeat(15)).is_ok());
        assert!(matches!(
            PhoneNumber::parse(&"9".repeat(16)),
            Err(PhoneNumberError::TooLong { max: 15 })
        ));
    }
}
