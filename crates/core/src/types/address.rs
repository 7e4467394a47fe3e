//! Delivery address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`DeliveryAddress`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// The input is empty or contains only whitespace.
    #[error("address cannot be empty")]
    Empty,
}

/// A free-text delivery address.
///
/// The only constraint is that the address is not blank. Street, number and
/// postal code are not checked; the recipient reads the text as written.
/// Surrounding whitespace is trimmed.
///
/// ## Examples
///
/// ```
/// use order_link_core::DeliveryAddress;
///
/// let address = DeliveryAddress::parse("  123 Main St  ").unwrap();
/// assert_eq!(address.as_str(), "123 Main St");
///
/// assert!(DeliveryAddress::parse("").is_err());
/// assert!(DeliveryAddress::parse(" \n\t ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct DeliveryAddress(String);

impl DeliveryAddress {
    /// Parse a `DeliveryAddress` from raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::Empty`] if the input is empty after trimming.
    pub fn parse(s: &str) -> Result<Self, AddressError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AddressError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `DeliveryAddress` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DeliveryAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for DeliveryAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DeliveryAddress {
    type Error = AddressError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<DeliveryAddress> for String {
    fn from(address: DeliveryAddress) -> Self {
        address.0
    }
}

impl AsRef<str> for DeliveryAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_addresses() {
        assert!(DeliveryAddress::parse("123 Main St").is_ok());
        assert!(DeliveryAddress::parse("Rua das Flores, 42 - Centro, 01000-000").is_ok());
        assert!(DeliveryAddress::parse("x").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(DeliveryAddress::parse(""), Err(AddressError::Empty)));
    }

    #[test]
    fn test_parse_whitespace_only() {
        assert!(matches!(
            DeliveryAddress::parse("   "),
            Err(AddressError::Empty)
        ));
        assert!(matches!(
            DeliveryAddress::parse("\t\r\n "),
            Err(AddressError::Empty)
        ));
    }

    #[test]
    fn test_parse_trims() {
        let address = DeliveryAddress::parse("\n  Apt 4, Main St \t").unwrap();
        assert_eq!(address.as_str(), "Apt 4, Main St");
    }

    #[test]
    fn test_inner_whitespace_preserved() {
        let address = DeliveryAddress::parse("Main St\nApt 4").unwrap();
        assert_eq!(address.to_string(), "Main St\nApt 4");
    }

    #[test]
    fn test_serde_rejects_blank() {
        let parsed: Result<DeliveryAddress, _> = serde_json::from_str("\"  \"");
        assert!(parsed.is_err());

        let parsed: DeliveryAddress = serde_json::from_str("\"Main St\"").unwrap();
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"Main St\"");
    }
}
