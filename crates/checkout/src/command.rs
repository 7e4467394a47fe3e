//! Side effects handed back to the host app.
//!
//! The checkout core never opens URLs or touches the cart store. Each
//! operation returns the commands the host should execute, in order.

use order_link_core::ProductId;
use serde::{Deserialize, Serialize};

/// A side effect for the host app to perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostCommand {
    /// Open a URL with the platform's URL handler.
    OpenUrl { url: String },
    /// Remove every item from the cart store.
    ClearCart,
    /// Leave the cart screen.
    NavigateBack,
    /// Remove one product from the cart store.
    RemoveItem { id: ProductId },
    /// Show a blocking alert.
    ShowAlert { prompt: UserPrompt },
}

/// A blocking alert with a single dismiss action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPrompt {
    /// Alert heading
    pub title: String,
    /// Alert body
    pub message: String,
}

impl UserPrompt {
    /// Create an alert.
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// A two-button confirmation dialog.
///
/// The cancel button does nothing; the confirm button runs `on_confirm`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmPrompt {
    /// Dialog heading
    pub title: String,
    /// Dialog body
    pub message: String,
    /// Text of the button that dismisses the dialog
    pub cancel_label: String,
    /// Text of the button that runs `on_confirm`
    pub confirm_label: String,
    /// Command to run when the customer confirms
    pub on_confirm: HostCommand,
}
