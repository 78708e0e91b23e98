//! Category types for product organization.

use crate::catalog::Product;
use crate::i18n::Localized;
use crate::ids::{CategoryId, SubcategoryId};
use serde::{Deserialize, Serialize};

/// Category type tag, inherited by every subcategory and product below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Bookable services, shown as provider profiles.
    Service,
    /// Anything else is sold as goods.
    #[default]
    #[serde(other)]
    Goods,
}

impl CategoryKind {
    pub fn is_service(self) -> bool {
        self == CategoryKind::Service
    }
}

/// A top-level category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: Localized,
    /// Type tag (`"service"` or goods).
    #[serde(rename = "type", default)]
    pub kind: CategoryKind,
    /// Child subcategories.
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
    /// Products listed directly on the category.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Product>,
}

impl Category {
    /// Create an empty category.
    pub fn new(id: impl Into<CategoryId>, name: Localized, kind: CategoryKind) -> Self {
        Self {
            id: id.into(),
            name,
            kind,
            subcategories: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Add a subcategory (builder style).
    pub fn with_subcategory(mut self, subcategory: Subcategory) -> Self {
        self.subcategories.push(subcategory);
        self
    }

    /// Find a direct subcategory by id.
    pub fn subcategory(&self, id: &str) -> Option<&Subcategory> {
        self.subcategories.iter().find(|s| s.id == id)
    }

    /// All products, direct items first, then each subcategory in order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.items
            .iter()
            .chain(self.subcategories.iter().flat_map(|s| s.items.iter()))
    }
}

/// A subcategory, owned by exactly one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subcategory {
    /// Unique subcategory identifier.
    pub id: SubcategoryId,
    /// Subcategory name.
    pub name: Localized,
    /// Products in this subcategory.
    #[serde(default)]
    pub items: Vec<Product>,
}

impl Subcategory {
    /// Create an empty subcategory.
    pub fn new(id: impl Into<SubcategoryId>, name: Localized) -> Self {
        Self {
            id: id.into(),
            name,
            items: Vec::new(),
        }
    }

    /// Add a product (builder style).
    pub fn with_item(mut self, product: Product) -> Self {
        self.items.push(product);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
