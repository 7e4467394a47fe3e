//! Checkout configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ORDER_LINK_PHONE_NUMBER` - Number that receives the order message
//!
//! ## Optional
//! - `ORDER_LINK_BASE_URL` - Deep-link base (default: <https://api.whatsapp.com/send>)
//! - `ORDER_LINK_CURRENCY` - ISO 4217 code used to format totals (default: BRL)

use order_link_core::{CurrencyCode, PhoneNumber};
use thiserror::Error;

use crate::link::DeepLink;
use crate::message::MessageTemplate;

const PHONE_NUMBER_VAR: &str = "ORDER_LINK_PHONE_NUMBER";
const BASE_URL_VAR: &str = "ORDER_LINK_BASE_URL";
const CURRENCY_VAR: &str = "ORDER_LINK_CURRENCY";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Checkout configuration. Fixed for the lifetime of the app.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// Deep-link base and destination phone number
    pub link: DeepLink,
    /// Currency used to format totals
    pub currency: CurrencyCode,
    /// Labels of the order text
    pub template: MessageTemplate,
}

impl CheckoutConfig {
    /// Configuration with the default link base, currency and template.
    #[must_use]
    pub fn new(phone_number: PhoneNumber) -> Self {
        Self {
            link: DeepLink::whatsapp(phone_number),
            currency: CurrencyCode::default(),
            template: MessageTemplate::default(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the phone number is missing or any variable
    /// fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`CheckoutConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let phone_number = lookup(PHONE_NUMBER_VAR)
            .ok_or_else(|| ConfigError::MissingEnvVar(PHONE_NUMBER_VAR.to_string()))?
            .parse::<PhoneNumber>()
            .map_err(|e| ConfigError::InvalidEnvVar(PHONE_NUMBER_VAR.to_string(), e.to_string()))?;

        let link = match lookup(BASE_URL_VAR) {
            Some(base) => DeepLink::new(&base, phone_number)
                .map_err(|e| ConfigError::InvalidEnvVar(BASE_URL_VAR.to_string(), e.to_string()))?,
            None => DeepLink::whatsapp(phone_number),
        };

        let currency = match lookup(CURRENCY_VAR) {
            Some(code) => code
                .parse::<CurrencyCode>()
                .map_err(|e| ConfigError::InvalidEnvVar(CURRENCY_VAR.to_string(), e.to_string()))?,
            None => CurrencyCode::default(),
        };

        Ok(Self {
            link,
            currency,
            template: MessageTemplate::default(),
        })
    }
}
