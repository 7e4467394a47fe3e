//! Address validation and order building.

use order_link_core::{Cart, DeliveryAddress, format_money};
use rust_decimal::Decimal;
use tracing::instrument;

use crate::command::HostCommand;
use crate::config::CheckoutConfig;
use crate::error::ValidationError;

/// A validated order, ready to hand to the messaging app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
    /// Unrounded order total
    pub total: Decimal,
    /// Total as shown in the message (e.g., "R$ 20,00")
    pub formatted_total: String,
    /// Plain order text
    pub text: String,
    /// Deep link carrying the percent-encoded text
    pub url: String,
}

impl PlacedOrder {
    /// Commands the host runs after a successful build, in order:
    /// open the link, clear the cart, leave the cart screen.
    #[must_use]
    pub fn commands(&self) -> Vec<HostCommand> {
        vec![
            HostCommand::OpenUrl {
                url: self.url.clone(),
            },
            HostCommand::ClearCart,
            HostCommand::NavigateBack,
        ]
    }
}

/// Builds order messages from cart snapshots.
#[derive(Debug, Clone)]
pub struct OrderBuilder {
    config: CheckoutConfig,
}

impl OrderBuilder {
    /// Create a builder for the given configuration.
    #[must_use]
    pub const fn new(config: CheckoutConfig) -> Self {
        Self { config }
    }

    /// The configuration orders are built with.
    #[must_use]
    pub const fn config(&self) -> &CheckoutConfig {
        &self.config
    }

    /// Validate the address and build the order link.
    ///
    /// An empty cart is accepted and produces a message without items.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::AddressRequired`] if `raw_address` is empty
    /// or whitespace-only. Nothing is built in that case.
    #[instrument(skip_all, fields(item_count = cart.len()))]
    pub fn build(&self, cart: &Cart, raw_address: &str) -> Result<PlacedOrder, ValidationError> {
        let address = DeliveryAddress::parse(raw_address).map_err(|e| {
            tracing::warn!(error = %e, "Order rejected");
            ValidationError::from(e)
        })?;

        let total = cart.total();
        let formatted_total = format_money(total, self.config.currency);
        tracing::debug!(%total, currency = %self.config.currency, "Computed order total");

        let text = self
            .config
            .template
            .render(cart, &address, self.config.currency);
        let url = self.config.link.for_text(&text);

        tracing::info!(url_len = url.len(), "Order link built");

        Ok(PlacedOrder {
            total,
            formatted_total,
            text,
            url,
        })
    }

    /// Like [`OrderBuilder::build`], but always returns host commands: the
    /// post-order commands on success, or a single alert on validation failure.
    #[must_use]
    pub fn submit(&self, cart: &Cart, raw_address: &str) -> Vec<HostCommand> {
        match self.build(cart, raw_address) {
            Ok(order) => order.commands(),
            Err(err) => vec![err.to_command()],
        }
    }
}
