//! Checkout error types.

use order_link_core::AddressError;
use thiserror::Error;

use crate::command::{HostCommand, UserPrompt};

/// Title of the alert shown when the order cannot be sent.
pub const ORDER_PROMPT_TITLE: &str = "Pedido";

/// Body of the alert shown when the delivery address is missing.
pub const ADDRESS_REQUIRED_MESSAGE: &str = "Informe os dados da entrega";

/// Rejected checkout input. The customer can fix it and try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The delivery address is empty or whitespace-only.
    #[error("address required")]
    AddressRequired,
}

impl ValidationError {
    /// The alert to show the customer.
    #[must_use]
    pub fn prompt(&self) -> UserPrompt {
        match self {
            Self::AddressRequired => UserPrompt::new(ORDER_PROMPT_TITLE, ADDRESS_REQUIRED_MESSAGE),
        }
    }

    /// The alert wrapped as a host command.
    #[must_use]
    pub fn to_command(&self) -> HostCommand {
        HostCommand::ShowAlert {
            prompt: self.prompt(),
        }
    }
}

impl From<AddressError> for ValidationError {
    fn from(err: AddressError) -> Self {
        match err {
            AddressError::Empty => Self::AddressRequired,
        }
    }
}

/// Invalid deep-link base URL.
#[derive(Debug, Error)]
pub enum LinkError {
    /// The base is not an absolute URL.
    #[error("invalid link base: {0}")]
    InvalidBase(#[from] url::ParseError),

    /// The base already carries a query string or fragment.
    #[error("link base must not contain a query or fragment: {0}")]
    UnexpectedQuery(String),
}
