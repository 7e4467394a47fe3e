//! Cart display model.
//!
//! Formats prices once so the host only lays out strings, and builds the
//! confirmation shown before a product is removed.

use order_link_core::{Cart, CartLineItem, CurrencyCode, Price, ProductId, format_money};

use crate::command::{ConfirmPrompt, HostCommand};

/// Shown in place of the item list when the cart is empty.
pub const EMPTY_CART_NOTICE: &str = "Seu carrinho esta vazio";

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    /// Product ID, passed back in [`HostCommand::RemoveItem`]
    pub id: ProductId,
    /// Display name
    pub title: String,
    /// Number of units
    pub quantity: u32,
    /// Formatted unit price
    pub price: String,
    /// Formatted unit price times quantity
    pub line_price: String,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Items in cart order
    pub items: Vec<CartItemView>,
    /// Formatted order total
    pub total: String,
    /// Total number of units
    pub item_count: u64,
}

impl CartView {
    /// Build the display model for `cart`, formatting prices in `currency`.
    #[must_use]
    pub fn from_cart(cart: &Cart, currency: CurrencyCode) -> Self {
        Self {
            items: cart
                .iter()
                .map(|item| CartItemView::from_item(item, currency))
                .collect(),
            total: format_money(cart.total(), currency),
            item_count: cart.item_count(),
        }
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// [`EMPTY_CART_NOTICE`] for an empty cart, `None` otherwise.
    #[must_use]
    pub fn empty_notice(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_CART_NOTICE)
    }
}

impl CartItemView {
    /// Display data for one line item.
    #[must_use]
    pub fn from_item(item: &CartLineItem, currency: CurrencyCode) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            quantity: item.quantity.get(),
            price: Price::new(item.price, currency).display(),
            line_price: Price::new(item.line_total(), currency).display(),
        }
    }
}

/// Confirmation asked before removing `item` from the cart.
#[must_use]
pub fn removal_prompt(item: &CartLineItem) -> ConfirmPrompt {
    ConfirmPrompt {
        title: "Remover".to_string(),
        message: format!("Deseja remover {} do carrinho?", item.title),
        cancel_label: "Cancelar".to_string(),
        confirm_label: "Remover".to_string(),
        on_confirm: HostCommand::RemoveItem {
            id: item.id.clone(),
        },
    }
}
