//! Detail view state machine.
//!
//! The detail view is mirrored in navigation history: opening a product that
//! has a page URL pushes an entry, and the platform back action closes the
//! view. Transitions return the history effect the caller must perform.

use crate::catalog::Product;
use crate::ids::ProductId;

/// Navigation side effect of a transition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HistoryEffect {
    #[default]
    None,
    /// Push a history entry with this URL.
    Push { url: String },
    /// Go back one entry, undoing an earlier push.
    Back,
}

/// Detail view state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailState {
    #[default]
    Closed,
    Open {
        product_id: ProductId,
        quantity: u32,
        /// Whether opening pushed a history entry.
        pushed_history: bool,
    },
}

/// Result of confirming the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmed {
    pub product_id: ProductId,
    pub quantity: u32,
    pub history: HistoryEffect,
}

/// The single product detail overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailModal {
    state: DetailState,
}

impl DetailModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DetailState::Open { .. })
    }

    /// The active product and quantity, if open.
    pub fn active(&self) -> Option<(&ProductId, u32)> {
        match &self.state {
            DetailState::Open {
                product_id,
                quantity,
                ..
            } => Some((product_id, *quantity)),
            DetailState::Closed => None,
        }
    }

    /// Open (or switch to) a product with quantity 1.
    pub fn open(&mut self, product: &Product) -> HistoryEffect {
        let effect = match &product.url {
            Some(url) => HistoryEffect::Push { url: url.clone() },
            None => HistoryEffect::None,
        };
        // A product without a URL keeps an entry pushed by an earlier product.
        let pushed_history = matches!(effect, HistoryEffect::Push { .. })
            || matches!(
                self.state,
                DetailState::Open {
                    pushed_history: true,
                    ..
                }
            );

        tracing::debug!(product_id = %product.id, pushed_history, "detail view opened");
        self.state = DetailState::Open {
            product_id: product.id.clone(),
            quantity: 1,
            pushed_history,
        };
        effect
    }

    /// Close the view. Returns `Back` when opening pushed a history entry.
    pub fn close(&mut self) -> HistoryEffect {
        match std::mem::take(&mut self.state) {
            DetailState::Open {
                pushed_history: true,
                ..
            } => HistoryEffect::Back,
            _ => HistoryEffect::None,
        }
    }

    /// The platform back action happened. Returns whether the view was open.
    pub fn back_navigated(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = DetailState::Closed;
        if was_open {
            tracing::debug!("detail view closed by back navigation");
        }
        was_open
    }

    /// Change the quantity by `delta`. Changes that would go below 1 are
    /// rejected. Returns whether the quantity changed.
    pub fn adjust_quantity(&mut self, delta: i32) -> bool {
        let DetailState::Open { quantity, .. } = &mut self.state else {
            return false;
        };
        let next = i64::from(*quantity) + i64::from(delta);
        match u32::try_from(next) {
            Ok(next) if next >= 1 && next != *quantity => {
                *quantity = next;
                true
            }
            _ => false,
        }
    }

    pub fn increment(&mut self) -> bool {
        self.adjust_quantity(1)
    }

    pub fn decrement(&mut self) -> bool {
        self.adjust_quantity(-1)
    }

    /// Confirm the current selection and close the view.
    pub fn confirm(&mut self) -> Option<Confirmed> {
        match std::mem::take(&mut self.state) {
            DetailState::Open {
                product_id,
                quantity,
                pushed_history,
            } => Some(Confirmed {
                product_id,
                quantity,
                history: if pushed_history {
                    HistoryEffect::Back
                } else {
                    HistoryEffect::None
                },
            }),
            DetailState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Localized;
    use crate::money::Taka;

    fn rice() -> Product {
        Product::new("p1", Localized::new("Rice", "চাল"), Taka::new(50))
    }

    fn rice_with_url() -> Product {
        let mut p = rice();
        p.url = Some("/category/rice/p1".to_string());
        p
    }

    #[test]
    fn test_open_without_url_does_not_touch_history() {
        let mut modal = DetailModal::new();
        assert_eq!(modal.open(&rice()), HistoryEffect::None);
        assert_eq!(modal.active(), Some((&ProductId::new("p1"), 1)));
        assert_eq!(modal.close(), HistoryEffect::None);
        assert!(!modal.is_open());
    }

    #[test]
    fn test_open_with_url_pushes_and_close_goes_back() {
        let mut modal = DetailModal::new();
        assert_eq!(
            modal.open(&rice_with_url()),
            HistoryEffect::Push {
                url: "/category/rice/p1".to_string()
            }
        );
        assert_eq!(modal.close(), HistoryEffect::Back);
        assert_eq!(modal.state(), &DetailState::Closed);
    }

    #[test]
    fn test_back_navigation_closes() {
        let mut modal = DetailModal::new();
        modal.open(&rice_with_url());
        assert!(modal.back_navigated());
        assert!(!modal.is_open());
        assert!(!modal.back_navigated());
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut modal = DetailModal::new();
        assert_eq!(modal.close(), HistoryEffect::None);
        assert_eq!(modal.confirm(), None);
    }

    #[test]
    fn test_quantity_floor_is_one() {
        let mut modal = DetailModal::new();
        assert!(!modal.increment());

        modal.open(&rice());
        assert!(!modal.decrement());
        assert!(modal.increment());
        assert!(modal.increment());
        assert!(modal.decrement());
        assert_eq!(modal.active().map(|(_, q)| q), Some(2));
        assert!(!modal.adjust_quantity(-5));
        assert_eq!(modal.active().map(|(_, q)| q), Some(2));
    }

    #[test]
    fn test_reopen_resets_quantity() {
        let mut modal = DetailModal::new();
        modal.open(&rice());
        modal.increment();
        modal.open(&rice());
        assert_eq!(modal.active().map(|(_, q)| q), Some(1));
    }

    #[test]
    fn test_confirm_returns_selection() {
        let mut modal = DetailModal::new();
        modal.open(&rice_with_url());
        modal.increment();
        modal.increment();

        let confirmed = modal.confirm().unwrap();
        assert_eq!(confirmed.product_id, "p1");
        assert_eq!(confirmed.quantity, 3);
        assert_eq!(confirmed.history, HistoryEffect::Back);
        assert!(!modal.is_open());
    }
}
