//! Order Link Checkout - Turns a cart snapshot into a messaging deep link.
//!
//! Given a [`Cart`](order_link_core::Cart) and the delivery address typed by
//! the customer, [`OrderBuilder`] renders the order text, percent-encodes it
//! into a `send?phone=...&text=...` link and hands back the commands the host
//! app should run (open the link, clear the cart, go back).
//!
//! # Architecture
//!
//! Nothing here performs I/O. Opening URLs, clearing the cart and showing
//! alerts are the host's job; this crate only returns [`HostCommand`] values
//! describing them. Configuration is the one exception: [`CheckoutConfig::from_env`]
//! reads environment variables once at startup.
//!
//! # Modules
//!
//! - [`config`] - Destination phone number, link base and currency
//! - [`message`] - Order text template
//! - [`link`] - Deep-link encoding
//! - [`order`] - Address validation and order building
//! - [`command`] - Side effects returned to the host
//! - [`view`] - Cart display model and removal prompt

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod command;
pub mod config;
pub mod error;
pub mod link;
pub mod message;
pub mod order;
pub mod view;

pub use command::{ConfirmPrompt, HostCommand, UserPrompt};
pub use config::{CheckoutConfig, ConfigError};
pub use error::{LinkError, ValidationError};
pub use link::{DeepLink, decode_text};
pub use message::MessageTemplate;
pub use order::{OrderBuilder, PlacedOrder};
pub use view::{CartItemView, CartView, removal_prompt};
