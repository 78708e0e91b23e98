//! Cart sidebar projection.

use crate::cart::Cart;
use crate::i18n::Language;
use crate::ids::ProductId;
use crate::money::Taka;

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    /// e.g. "৳50 x 2".
    pub price_label: String,
}

/// Everything the cart sidebar and header badge display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPanel {
    /// Badge count: sum of quantities.
    pub count: u64,
    pub total: Taka,
    pub lines: Vec<CartLine>,
}

impl CartPanel {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Project the cart in the given language. Totals are recomputed every call.
pub fn project_cart(cart: &Cart, lang: Language) -> CartPanel {
    CartPanel {
        count: cart.count(),
        total: cart.total(),
        lines: cart
            .items()
            .iter()
            .map(|item| CartLine {
                id: item.id.clone(),
                name: item.display_name(lang).to_string(),
                price_label: format!("{} x {}", item.price, item.quantity),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Localized;

    #[test]
    fn test_project_cart() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("p1"), Localized::new("Rice", "চাল"), Taka::new(50), 3)
            .unwrap();
        cart.add(ProductId::new("p2"), Localized::new("Oil", "তেল"), Taka::new(180), 1)
            .unwrap();

        let panel = project_cart(&cart, Language::Bn);
        assert_eq!(panel.count, 4);
        assert_eq!(panel.total, Taka::new(330));
        assert_eq!(panel.lines[0].name, "চাল");
        assert_eq!(panel.lines[0].price_label, "৳50 x 3");

        let panel = project_cart(&cart, Language::En);
        assert_eq!(panel.lines[1].name, "Oil");
    }

    #[test]
    fn test_empty_cart_panel() {
        let panel = project_cart(&Cart::new(), Language::En);
        assert!(panel.is_empty());
        assert_eq!(panel.count, 0);
        assert_eq!(panel.total, Taka::zero());
    }
}
