//! Cart snapshots and the order total.
//!
//! The live cart belongs to the host's cart store, which adds, removes and
//! clears products. This module only models a read-only snapshot of it: an
//! ordered list of line items with unique IDs, where insertion order is the
//! display order.

use std::collections::HashSet;
use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// Errors that can occur when building a [`Cart`] snapshot.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// A line item has a quantity of zero.
    #[error("quantity must be at least 1")]
    ZeroQuantity,
    /// Two line items share the same product ID.
    #[error("duplicate cart item: {0}")]
    DuplicateItem(ProductId),
    /// The order total does not fit in a `Decimal`.
    #[error("cart total is out of range")]
    TotalOverflow,
}

/// Number of units of a product in the cart. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A single unit.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ZeroQuantity`] for zero.
    pub fn new(count: u32) -> Result<Self, CartError> {
        NonZeroU32::new(count).map(Self).ok_or(CartError::ZeroQuantity)
    }

    /// Get the underlying count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = CartError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.get()
    }
}

/// One product entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Catalog product ID, unique within a cart.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Unit price in the currency's standard unit.
    pub price: Decimal,
    /// Number of units.
    pub quantity: Quantity,
}

impl CartLineItem {
    /// Create a line item.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Decimal,
        quantity: Quantity,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            quantity,
        }
    }

    /// Unit price times quantity, saturating at the `Decimal` bounds.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity.get()))
    }

    /// Unit price times quantity, or `None` on overflow.
    #[must_use]
    pub fn checked_line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity.get()))
    }
}

/// Sum of `price × quantity` over `items`. Zero for an empty slice.
///
/// No rounding is applied; see [`crate::format_money`] for display. Items
/// that do not come from a [`Cart`] may overflow, in which case the sum
/// saturates at the `Decimal` bounds. A `Cart` never overflows.
///
/// ```
/// use order_link_core::{CartLineItem, Quantity, order_total};
/// use rust_decimal::Decimal;
///
/// let items = [
///     CartLineItem::new("1", "Burger", Decimal::from(10), Quantity::new(2).unwrap()),
///     CartLineItem::new("2", "Fries", Decimal::new(450, 2), Quantity::ONE),
/// ];
/// assert_eq!(order_total(&items), Decimal::new(2450, 2));
/// assert_eq!(order_total(&[]), Decimal::ZERO);
/// ```
#[must_use]
pub fn order_total(items: &[CartLineItem]) -> Decimal {
    items
        .iter()
        .map(CartLineItem::line_total)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Like [`order_total`], but `None` if any product or the sum overflows.
#[must_use]
pub fn checked_order_total(items: &[CartLineItem]) -> Option<Decimal> {
    items.iter().try_fold(Decimal::ZERO, |total, item| {
        total.checked_add(item.checked_line_total()?)
    })
}

/// An immutable snapshot of the cart contents.
///
/// Deserializing from a JSON array applies the same checks as
/// [`Cart::from_items`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartLineItem>", into = "Vec<CartLineItem>")]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a snapshot from line items in display order.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::DuplicateItem`] if two items share a product ID,
    /// or [`CartError::TotalOverflow`] if the total is out of range.
    pub fn from_items(items: Vec<CartLineItem>) -> Result<Self, CartError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(&item.id) {
                return Err(CartError::DuplicateItem(item.id.clone()));
            }
        }
        checked_order_total(&items).ok_or(CartError::TotalOverflow)?;
        Ok(Self { items })
    }

    /// Line items in display order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Iterate over line items in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartLineItem> {
        self.items.iter()
    }

    /// Look up a line item by product ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all line items.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// The order total, recomputed on every call.
    #[must_use]
    pub fn total(&self) -> Decimal {
        order_total(&self.items)
    }
}

impl TryFrom<Vec<CartLineItem>> for Cart {
    type Error = CartError;

    fn try_from(items: Vec<CartLineItem>) -> Result<Self, Self::Error> {
        Self::from_items(items)
    }
}

impl From<Cart> for Vec<CartLineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLineItem;
    type IntoIter = std::slice::Iter<'a, CartLineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(id: &str, title: &str, price: Decimal, quantity: u32) -> CartLineItem {
        CartLineItem::new(id, title, price, Quantity::new(quantity).unwrap())
    }

    #[test]
    fn test_quantity_rejects_zero() {
        assert!(matches!(Quantity::new(0), Err(CartError::ZeroQuantity)));
        assert_eq!(Quantity::new(3).unwrap().get(), 3);
        assert_eq!(Quantity::ONE.get(), 1);
    }

    #[test]
    fn test_line_total() {
        let burger = item("1", "Burger", Decimal::from(10), 2);
        assert_eq!(burger.line_total(), Decimal::from(20));
    }

    #[test]
    fn test_total_empty_is_zero() {
        assert_eq!(Cart::new().total(), Decimal::ZERO);
        assert_eq!(order_total(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_total_sums_lines() {
        let cart = Cart::from_items(vec![
            item("1", "Burger", Decimal::from(10), 2),
            item("2", "Soda", Decimal::new(599, 2), 3),
            item("3", "Pie", Decimal::new(1, 1), 1),
        ])
        .unwrap();
        // 20 + 17.97 + 0.1
        assert_eq!(cart.total(), Decimal::new(3807, 2));
    }

    #[test]
    fn test_total_keeps_full_precision() {
        let cart = Cart::from_items(vec![item("1", "Bulk spice", Decimal::new(3333, 3), 3)])
            .unwrap();
        assert_eq!(cart.total(), Decimal::new(9999, 3));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Cart::from_items(vec![
            item("1", "Burger", Decimal::from(10), 1),
            item("2", "Fries", Decimal::from(5), 1),
            item("1", "Burger again", Decimal::from(10), 1),
        ]);
        assert_eq!(result, Err(CartError::DuplicateItem(ProductId::new("1"))));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let cart = Cart::from_items(vec![
            item("b", "Second", Decimal::ONE, 1),
            item("a", "First", Decimal::ONE, 1),
        ])
        .unwrap();
        let titles: Vec<&str> = cart.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["Second", "First"]);
    }

    #[test]
    fn test_item_count_and_lookup() {
        let cart = Cart::from_items(vec![
            item("1", "Burger", Decimal::from(10), 2),
            item("2", "Fries", Decimal::from(5), 3),
        ])
        .unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.get(&ProductId::new("2")).unwrap().title, "Fries");
        assert!(cart.get(&ProductId::new("9")).is_none());
    }

    #[test]
    fn test_deserialize_snapshot() {
        let json = r#"[
            {"id": "1", "title": "Burger", "price": "10.50", "quantity": 2},
            {"id": "2", "title": "Fries", "price": "4", "quantity": 1}
        ]"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), Decimal::from(25));
    }

    #[test]
    fn test_deserialize_rejects_zero_quantity() {
        let json = r#"[{"id": "1", "title": "Burger", "price": "10", "quantity": 0}]"#;
        assert!(serde_json::from_str::<Cart>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_duplicates() {
        let json = r#"[
            {"id": "1", "title": "Burger", "price": "10", "quantity": 1},
            {"id": "1", "title": "Burger", "price": "10", "quantity": 1}
        ]"#;
        assert!(serde_json::from_str::<Cart>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_line_overflow() {
        let json = r#"[
            {"id": "1", "title": "Gold", "price": "50000000000000000000000000000", "quantity": 2}
        ]"#;
        assert!(serde_json::from_str::<Cart>(json).is_err());
    }

    #[test]
    fn test_total_overflow_rejected() {
        let result = Cart::from_items(vec![
            item("1", "Gold", Decimal::MAX, 1),
            item("2", "Silver", Decimal::ONE, 1),
        ]);
        assert_eq!(result, Err(CartError::TotalOverflow));

        let result = Cart::from_items(vec![item("1", "Gold", Decimal::MAX, 2)]);
        assert_eq!(result, Err(CartError::TotalOverflow));
    }

    #[test]
    fn test_order_total_saturates() {
        let items = [
            item("1", "Gold", Decimal::MAX, 2),
            item("2", "Silver", Decimal::ONE, 1),
        ];
        assert_eq!(order_total(&items), Decimal::MAX);
        assert_eq!(checked_order_total(&items), None);
    }
}
