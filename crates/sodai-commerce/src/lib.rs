//! Storefront domain types and logic for Sodai.
//!
//! This crate is pure: no I/O, no storage, no browser APIs. It provides:
//!
//! - **Catalog**: the bilingual category/subcategory/product tree
//! - **Cart**: line items with name and price snapshots
//! - **Search**: a flattened catalog index and the live-search filter
//! - **Detail**: the product detail state machine and its projection
//! - **Checkout**: form validation, order payload, submission outcomes
//! - **View**: projections of state into plain view models
//!
//! # Example
//!
//! ```rust
//! use sodai_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! let rice = Localized::new("Rice", "চাল");
//! cart.add(ProductId::new("p1"), rice.clone(), Taka::new(50), 1).unwrap();
//! cart.add(ProductId::new("p1"), rice, Taka::new(50), 2).unwrap();
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.total(), Taka::new(150));
//! ```

pub mod error;
pub mod i18n;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod detail;
pub mod search;
pub mod view;

pub use error::CommerceError;
pub use ids::*;
pub use money::Taka;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::i18n::{Label, Language, Localized, SUPPORTED_LANGUAGES};
    pub use crate::ids::*;
    pub use crate::money::Taka;

    // Catalog
    pub use crate::catalog::{Catalog, Category, CategoryKind, Fulfillment, Listing, Product, Subcategory};

    // Cart
    pub use crate::cart::{Cart, LineItem};

    // Search
    pub use crate::search::{search, CatalogIndex, SearchQuery, SearchResults};

    // Detail
    pub use crate::detail::{DetailModal, HistoryEffect, ProductDetailView};

    // Checkout
    pub use crate::checkout::{
        CheckoutForm, CheckoutSubmitter, OrderReply, OrderRequest, SubmitButton, SubmitOutcome,
    };

    // View
    pub use crate::view::{
        category_path, project_cart, project_listing, project_menu, project_search, CardBody,
        CardImage, CartPanel, CategoryMenu, ListingView, MenuEntry, MenuToggles, ProductCard,
        SearchPanel,
    };
}
