//! Type-safe price representation using decimal arithmetic.
//!
//! Amounts are kept as [`Decimal`] in the currency's standard unit (reais,
//! dollars) and are only rounded when formatted for display.

use core::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`CurrencyCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// The code is not one of the supported ISO 4217 codes.
    #[error("unsupported currency code: {0}")]
    Unsupported(String),
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., reais, not centavos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Format for display (e.g., "R$ 19,90").
    #[must_use]
    pub fn display(&self) -> String {
        format_money(self.amount, self.currency_code)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    BRL,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// The display symbol, including any separating space.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::BRL => "R$ ",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// The three-letter ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::BRL => "BRL",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }

    const fn decimal_separator(self) -> char {
        match self {
            Self::BRL | Self::EUR => ',',
            Self::USD | Self::GBP => '.',
        }
    }

    const fn group_separator(self) -> char {
        match self {
            Self::BRL | Self::EUR => '.',
            Self::USD | Self::GBP => ',',
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BRL" => Ok(Self::BRL),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            _ => Err(CurrencyError::Unsupported(s.to_owned())),
        }
    }
}

/// Format an amount with the conventions of `currency`.
///
/// Rounds half away from zero to two decimal places.
///
/// ```
/// use order_link_core::{CurrencyCode, format_money};
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money(Decimal::new(123_450, 2), CurrencyCode::BRL), "R$ 1.234,50");
/// assert_eq!(format_money(Decimal::new(123_450, 2), CurrencyCode::USD), "$1,234.50");
/// ```
#[must_use]
pub fn format_money(amount: Decimal, currency: CurrencyCode) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let fixed = format!("{:.2}", rounded.abs());
    let (units, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    format!(
        "{sign}{symbol}{units}{decimal}{cents}",
        sign = if negative { "-" } else { "" },
        symbol = currency.symbol(),
        units = group_thousands(units, currency.group_separator()),
        decimal = currency.decimal_separator(),
    )
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
