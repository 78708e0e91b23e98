//! Product catalog module.
//!
//! Contains the category tree, products and catalog lookups.

mod catalog;
mod category;
mod product;

pub use catalog::{Catalog, Listing};
pub use category::{Category, CategoryKind, Subcategory};
pub use product::{Fulfillment, Product, STATIC_PREFIX};

pub(crate) use product::localized_or;
