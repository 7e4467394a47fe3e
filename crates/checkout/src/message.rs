//! Order text sent to the restaurant.
//!
//! ```text
//! 🍔 NOVO PEDIDO
//!
//! Entregar em: Rua das Flores, 42
//!
//! 2 X-Burger
//! 1 Coca-Cola
//!
//! Valor total: R$ 47,90
//! ```
//!
//! The item block is omitted when the cart is empty.

use order_link_core::{Cart, CartLineItem, CurrencyCode, DeliveryAddress, format_money};

/// Labels used when rendering the order text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    /// First line of the message
    pub heading: String,
    /// Prefix of the address line
    pub address_label: String,
    /// Prefix of the total line
    pub total_label: String,
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self {
            heading: "🍔 NOVO PEDIDO".to_string(),
            address_label: "Entregar em:".to_string(),
            total_label: "Valor total:".to_string(),
        }
    }
}

impl MessageTemplate {
    /// Render the full order text.
    #[must_use]
    pub fn render(&self, cart: &Cart, address: &DeliveryAddress, currency: CurrencyCode) -> String {
        let mut sections = Vec::with_capacity(4);
        sections.push(self.heading.clone());
        sections.push(format!("{} {address}", self.address_label));
        if !cart.is_empty() {
            sections.push(cart.iter().map(line_fragment).collect::<Vec<_>>().join("\n"));
        }
        sections.push(format!(
            "{} {}",
            self.total_label,
            format_money(cart.total(), currency)
        ));
        sections.join("\n\n")
    }
}

/// One line of the item block: quantity followed by title.
#[must_use]
pub fn line_fragment(item: &CartLineItem) -> String {
    format!("{} {}", item.quantity, item.title)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use order_link_core::Quantity;
    use rust_decimal::Decimal;

    use super::*;

    fn address(s: &str) -> DeliveryAddress {
        DeliveryAddress::parse(s).unwrap()
    }

    #[test]
    fn test_render_single_item() {
        let cart = Cart::from_items(vec![CartLineItem::new(
            "1",
            "Burger",
            Decimal::from(10),
            Quantity::new(2).unwrap(),
        )])
        .unwrap();

        let text =
            MessageTemplate::default().render(&cart, &address("123 Main St"), CurrencyCode::BRL);
        assert_eq!(
            text,
            "🍔 NOVO PEDIDO\n\nEntregar em: 123 Main St\n\n2 Burger\n\nValor total: R$ 20,00"
        );
    }

    #[test]
    fn test_render_empty_cart() {
        let text =
            MessageTemplate::default().render(&Cart::new(), &address("Main St"), CurrencyCode::BRL);
        assert_eq!(text, "🍔 NOVO PEDIDO\n\nEntregar em: Main St\n\nValor total: R$ 0,00");
    }

    #[test]
    fn test_render_keeps_cart_order() {
        let cart = Cart::from_items(vec![
            CartLineItem::new("3", "Milkshake", Decimal::from(12), Quantity::ONE),
            CartLineItem::new("1", "Burger", Decimal::from(10), Quantity::new(3).unwrap()),
        ])
        .unwrap();

        let text =
            MessageTemplate::default().render(&cart, &address("Main St"), CurrencyCode::USD);
        assert!(text.contains("1 Milkshake\n3 Burger"));
        assert!(text.ends_with("Valor total: $42.00"));
    }

    #[test]
    fn test_render_custom_labels() {
        let template = MessageTemplate {
            heading: "NEW ORDER".to_string(),
            address_label: "Deliver to:".to_string(),
            total_label: "Total:".to_string(),
        };
        let text = template.render(&Cart::new(), &address("Main St"), CurrencyCode::USD);
        assert_eq!(text, "NEW ORDER\n\nDeliver to: Main St\n\nTotal: $0.00");
    }

    #[test]
    fn test_line_fragment() {
        let item = CartLineItem::new(
            "9",
            "Onion rings",
            Decimal::from(7),
            Quantity::new(4).unwrap(),
        );
        assert_eq!(line_fragment(&item), "4 Onion rings");
    }
}
