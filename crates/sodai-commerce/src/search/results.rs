//! Search results.

use crate::search::{IndexedProduct, IndexedSubcategory};

/// Matched subcategories and products, borrowing from the index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults<'a> {
    /// Subcategories whose name matched.
    pub categories: Vec<&'a IndexedSubcategory>,
    /// Name matches first, then products of matched subcategories; unique by id.
    pub products: Vec<&'a IndexedProduct>,
}

impl<'a> SearchResults<'a> {
    /// Check if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.products.is_empty()
    }

    /// Product ids in result order.
    pub fn product_ids(&self) -> Vec<&'a str> {
        self.products.iter().map(|p| p.product.id.as_str()).collect()
    }
}
