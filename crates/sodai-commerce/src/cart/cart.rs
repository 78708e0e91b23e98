//! Cart and line item types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::i18n::{Language, Localized};
use crate::ids::ProductId;
use crate::money::Taka;
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Serializes as a bare array of line items, which is the persisted format.
/// Deserializing replays each stored line through [`Cart::add`], so
/// zero-quantity lines are dropped and repeated ids merge into one line.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of a product.
    ///
    /// An existing line for the same product id has its quantity increased;
    /// otherwise a new line is appended with the given name and price
    /// snapshot. Returns the line's new quantity.
    pub fn add(
        &mut self,
        product_id: ProductId,
        name: Localized,
        price: Taka,
        quantity: u32,
    ) -> Result<u32, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == product_id) {
            existing.quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            return Ok(existing.quantity);
        }

        self.items.push(LineItem {
            id: product_id,
            name,
            price,
            quantity,
        });
        Ok(quantity)
    }

    /// Add `quantity` of a catalog product, snapshotting its name and price.
    pub fn add_product(&mut self, product: &Product, quantity: u32) -> Result<u32, CommerceError> {
        self.add(
            product.id.clone(),
            product.name.clone(),
            product.price,
            quantity,
        )
    }

    /// Remove the line for a product. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != product_id);
        self.items.len() < len_before
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price x quantity over all lines.
    pub fn total(&self) -> Taka {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// Total item count (sum of quantities).
    pub fn count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the line for a product.
    pub fn get(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == product_id)
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let lines = Vec::<LineItem>::deserialize(deserializer)?;
        let mut cart = Cart::new();
        for line in lines {
            let id = line.id.clone();
            if let Err(e) = cart.add(line.id, line.name, line.price, line.quantity) {
                tracing::warn!(product_id = %id, error = %e, "dropping invalid stored cart line");
            }
        }
        Ok(cart)
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    /// Product id; at most one line per id.
    pub id: ProductId,
    /// Product name captured when the line was created.
    pub name: Localized,
    /// Unit price captured when the line was created.
    pub price: Taka,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// Unit price times quantity.
    pub fn subtotal(&self) -> Taka {
        self.price * self.quantity
    }

    /// Name in the given language.
    pub fn display_name(&self, lang: Language) -> &str {
        self.name.get(lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rice() -> Localized {
        Localized::new("Rice", "চাল")
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total(), Taka::zero());
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("p1"), rice(), Taka::new(50), 1).unwrap();
        let qty = cart.add(ProductId::new("p1"), rice(), Taka::new(50), 2).unwrap();

        assert_eq!(qty, 3);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.count(), 3);
        assert_eq!(cart.total(), Taka::new(150));
    }

    #[test]
    fn test_repeat_add_keeps_first_snapshot() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("p1"), rice(), Taka::new(50), 1).unwrap();
        cart.add(ProductId::new("p1"), Localized::new("Rice 2", "চাল ২"), Taka::new(60), 1)
            .unwrap();

        let line = cart.get(&ProductId::new("p1")).unwrap();
        assert_eq!(line.price, Taka::new(50));
        assert_eq!(line.name.en, "Rice");
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("p1"), rice(), Taka::new(50), 1).unwrap();
        cart.add(ProductId::new("p2"), Localized::new("Oil", "তেল"), Taka::new(180), 2)
            .unwrap();

        assert!(cart.remove(&ProductId::new("p1")));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Taka::new(360));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("p1"), rice(), Taka::new(50), 3).unwrap();
        let before = cart.clone();

        assert!(!cart.remove(&ProductId::new("missing")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_invalid_quantity() {
        let mut cart = Cart::new();
        let result = cart.add(ProductId::new("p1"), rice(), Taka::new(50), 0);
        assert!(matches!(result, Err(CommerceError::InvalidQuantity(0))));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_overflow() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("p1"), rice(), Taka::new(50), u32::MAX).unwrap();
        let result = cart.add(ProductId::new("p1"), rice(), Taka::new(50), 1);
        assert!(matches!(result, Err(CommerceError::Overflow)));
        assert_eq!(cart.count(), u64::from(u32::MAX));
    }

    #[test]
    fn test_count_and_total_track_mixed_operations() {
        let mut cart = Cart::new();
        let ops: &[(&str, i64, u32)] = &[("a", 10, 2), ("b", 25, 1), ("a", 10, 3), ("c", 7, 4)];
        for (id, price, qty) in ops {
            cart.add(ProductId::new(*id), rice(), Taka::new(*price), *qty).unwrap();
        }
        cart.remove(&ProductId::new("b"));

        let expected_count: u64 = cart.items().iter().map(|i| u64::from(i.quantity)).sum();
        let expected_total: i64 = cart.items().iter().map(|i| i.price.0 * i64::from(i.quantity)).sum();
        assert_eq!(cart.count(), expected_count);
        assert_eq!(cart.count(), 9);
        assert_eq!(cart.total(), Taka::new(expected_total));
        assert_eq!(cart.total(), Taka::new(78));
    }

    #[test]
    fn test_persisted_format() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("p1"), rice(), Taka::new(50), 2).unwrap();
        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(
            json,
            r#"[{"id":"p1","name":{"en":"Rice","bn":"চাল"},"price":50,"quantity":2}]"#
        );
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_stored_lines_are_normalized() {
        let json = r#"[
            {"id":"p1","name":{"en":"Rice","bn":"চাল"},"price":50,"quantity":0},
            {"id":"p2","name":{"en":"Oil","bn":"তেল"},"price":180,"quantity":2},
            {"id":"p2","name":{"en":"Oil","bn":"তেল"},"price":999,"quantity":1}
        ]"#;
        let cart: Cart = serde_json::from_str(json).unwrap();

        assert_eq!(cart.len(), 1);
        assert!(cart.get(&ProductId::new("p1")).is_none());
        let oil = cart.get(&ProductId::new("p2")).unwrap();
        assert_eq!(oil.quantity, 3);
        assert_eq!(oil.price, Taka::new(180));
        assert_eq!(cart.total(), Taka::new(540));
    }
}
