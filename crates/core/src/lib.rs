//! Order Link Core - Shared cart and money types.
//!
//! This crate provides the domain types used by the checkout crate:
//! - `checkout` - Order text, deep-link building and host commands
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! environment access, no logging. A [`Cart`] is an immutable snapshot handed
//! over by whatever store owns the live cart.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices, addresses and phone numbers
//! - [`cart`] - Line items, cart snapshots and the order total

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, CartError, CartLineItem, Quantity, checked_order_total, order_total};
pub use types::*;
