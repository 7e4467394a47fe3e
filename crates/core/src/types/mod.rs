//! Core types for Order Link.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod address;
pub mod id;
pub mod phone;
pub mod price;

pub use address::{AddressError, DeliveryAddress};
pub use id::ProductId;
pub use phone::{PhoneNumber, PhoneNumberError};
pub use price::{CurrencyCode, CurrencyError, Price, format_money};
