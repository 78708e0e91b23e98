//! The storefront application state.
//!
//! One object owns the catalog, language, cart, detail view and checkout
//! state. Mutations persist through the injected store; everything the UI
//! shows is read back through projection methods.
//!
//! Storage write failures are logged and never returned: the in-memory
//! state stays authoritative for the rest of the page's life.

use std::cell::OnceCell;

use sodai_cache::{Cache, KeyValueStore};
use sodai_commerce::cart::Cart;
use sodai_commerce::catalog::Catalog;
use sodai_commerce::checkout::{
    CheckoutForm, CheckoutSubmitter, OrderRequest, SubmitButton, SubmitOutcome,
};
use sodai_commerce::detail::{DetailModal, HistoryEffect, ProductDetailView};
use sodai_commerce::i18n::{Label, Language, Localized};
use sodai_commerce::ids::{ProductId, SubcategoryId};
use sodai_commerce::money::Taka;
use sodai_commerce::search::{search, CatalogIndex, SearchQuery};
use sodai_commerce::view::{
    project_cart, project_listing, project_menu, project_search, CartPanel, CategoryMenu,
    ListingView, SearchPanel,
};
use sodai_commerce::CommerceError;

use crate::config::StorageConfig;
use crate::routes::{parse_category_path, search_result_target, ResultNavigation};
use crate::{StorefrontConfig, StorefrontError};

/// Storefront state over a key-value store `S`.
pub struct Storefront<S> {
    cache: Cache<S>,
    keys: StorageConfig,
    catalog: Catalog,
    index: OnceCell<CatalogIndex>,
    language: Language,
    cart: Cart,
    cart_open: bool,
    search_text: String,
    detail: DetailModal,
    checkout_open: bool,
    form: CheckoutForm,
    submitter: CheckoutSubmitter,
}

impl<S: KeyValueStore> Storefront<S> {
    /// Restore language and cart from the store.
    ///
    /// A missing or unreadable language falls back to the configured default;
    /// a missing or corrupt cart starts empty.
    pub fn load(store: S, config: &StorefrontConfig) -> Self {
        let cache = Cache::new(store);
        let keys = config.storage.clone();

        let language = match cache.get_text(&keys.language_key) {
            Ok(Some(code)) => Language::parse(&code).unwrap_or_else(|| {
                tracing::warn!(code = %code, "unknown persisted language, using default");
                config.default_language
            }),
            Ok(None) => config.default_language,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read language");
                config.default_language
            }
        };

        let cart = match cache.get::<Cart>(&keys.cart_key) {
            Ok(cart) => cart.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to restore cart, starting empty");
                Cart::new()
            }
        };

        tracing::debug!(language = %language, lines = cart.len(), "storefront state restored");
        Self {
            cache,
            keys,
            catalog: Catalog::empty(),
            index: OnceCell::new(),
            language,
            cart,
            cart_open: false,
            search_text: String::new(),
            detail: DetailModal::new(),
            checkout_open: false,
            form: CheckoutForm::default(),
            submitter: CheckoutSubmitter::new(),
        }
    }

    // === Catalog ===

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Install a catalog. The search index is rebuilt on next use.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        tracing::info!(categories = catalog.categories().len(), "catalog installed");
        self.catalog = catalog;
        self.index = OnceCell::new();
    }

    /// The search index, built on first use.
    pub fn index(&self) -> &CatalogIndex {
        self.index.get_or_init(|| CatalogIndex::build(&self.catalog))
    }

    /// Resolve a dotted localization key in the current language.
    ///
    /// `None` means the element keeps its current text.
    pub fn resolve(&self, key: &str) -> Option<String> {
        self.catalog.resolve(key, self.language)
    }

    // === Language ===

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch language and persist the choice.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        if let Err(e) = self.cache.set_text(&self.keys.language_key, language.code()) {
            tracing::warn!(error = %e, "failed to persist language");
        }
        tracing::debug!(language = %language, "language changed");
    }

    // === Cart ===

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add a line snapshot to the cart, persist it and open the cart sidebar.
    pub fn add_to_cart(
        &mut self,
        product_id: ProductId,
        name: Localized,
        price: Taka,
        quantity: u32,
    ) -> Result<u32, StorefrontError> {
        let line_quantity = self.cart.add(product_id.clone(), name, price, quantity)?;
        self.cart_open = true;
        self.persist_cart();
        tracing::info!(product_id = %product_id, quantity, line_quantity, "added to cart");
        Ok(line_quantity)
    }

    /// Add a catalog product by id.
    pub fn add_product(&mut self, product_id: &ProductId, quantity: u32) -> Result<u32, StorefrontError> {
        let product = self
            .catalog
            .find_product(product_id)
            .ok_or_else(|| CommerceError::ProductNotFound(product_id.to_string()))?;
        let (name, price) = (product.name.clone(), product.price);
        self.add_to_cart(product_id.clone(), name, price, quantity)
    }

    /// Remove a line. Absent ids leave the cart unchanged.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> bool {
        let removed = self.cart.remove(product_id);
        self.persist_cart();
        if removed {
            tracing::debug!(product_id = %product_id, "removed from cart");
        }
        removed
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist_cart();
    }

    fn persist_cart(&self) {
        if let Err(e) = self.cache.set(&self.keys.cart_key, &self.cart) {
            tracing::warn!(error = %e, lines = self.cart.len(), "failed to persist cart");
        }
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn toggle_cart(&mut self) {
        self.cart_open = !self.cart_open;
    }

    pub fn cart_panel(&self) -> CartPanel {
        project_cart(&self.cart, self.language)
    }

    // === Search ===

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn clear_search(&mut self) {
        self.search_text.clear();
    }

    /// The live results panel for the current search text.
    pub fn search_panel(&self) -> SearchPanel {
        let Some(query) = SearchQuery::parse(&self.search_text) else {
            return SearchPanel::Hidden;
        };
        let results = search(self.index(), &query);
        project_search(Some(&results), self.language)
    }

    /// A result card was clicked on the page at `current_path`.
    ///
    /// Clears the search. When already on the product's subcategory page the
    /// detail view opens in place and its history effect is returned inside
    /// the navigation.
    pub fn search_result_clicked(
        &mut self,
        current_path: &str,
        subcategory_id: &SubcategoryId,
        product_id: &ProductId,
    ) -> (ResultNavigation, HistoryEffect) {
        self.clear_search();
        let navigation = search_result_target(current_path, subcategory_id, product_id);
        let effect = match &navigation {
            ResultNavigation::OpenInPlace(id) => self.open_detail(id),
            ResultNavigation::Navigate(_) => HistoryEffect::None,
        };
        (navigation, effect)
    }

    // === Navigation ===

    /// Header dropdowns, with the one owning the current page marked active.
    pub fn menus(&self, current_path: &str) -> Vec<CategoryMenu> {
        project_menu(&self.catalog, parse_category_path(current_path), self.language)
    }

    /// The `/category/<id>` page for `id`.
    pub fn listing(&self, id: &str) -> Option<ListingView> {
        project_listing(&self.catalog, id, self.language)
    }

    // === Detail view ===

    /// Open the detail view. Unknown ids are a no-op.
    pub fn open_detail(&mut self, product_id: &ProductId) -> HistoryEffect {
        match self.catalog.find_product(product_id) {
            Some(product) => self.detail.open(product),
            None => {
                tracing::debug!(product_id = %product_id, "detail requested for unknown product");
                HistoryEffect::None
            }
        }
    }

    pub fn close_detail(&mut self) -> HistoryEffect {
        self.detail.close()
    }

    /// The platform back action fired.
    pub fn back_navigated(&mut self) -> bool {
        self.detail.back_navigated()
    }

    pub fn adjust_detail_quantity(&mut self, delta: i32) -> bool {
        self.detail.adjust_quantity(delta)
    }

    /// Add the detail selection to the cart and close the view.
    ///
    /// The returned history effect must be applied even when the add fails,
    /// since the view has already closed.
    pub fn confirm_detail(&mut self) -> HistoryEffect {
        let Some(confirmed) = self.detail.confirm() else {
            return HistoryEffect::None;
        };
        if let Err(e) = self.add_product(&confirmed.product_id, confirmed.quantity) {
            tracing::warn!(error = %e, product_id = %confirmed.product_id, "failed to add detail selection");
        }
        confirmed.history
    }

    /// Projection of the open detail view.
    pub fn detail_view(&self) -> Option<ProductDetailView> {
        let (product_id, quantity) = self.detail.active()?;
        let product = self.catalog.find_product(product_id)?;
        Some(ProductDetailView::project(product, quantity, self.language))
    }

    // === Checkout ===

    pub fn is_checkout_open(&self) -> bool {
        self.checkout_open
    }

    /// Open the checkout form, closing the cart sidebar.
    ///
    /// Refused with `EmptyCart` when there is nothing to order; the caller
    /// shows [`Storefront::empty_cart_notice`].
    pub fn open_checkout(&mut self) -> Result<(), StorefrontError> {
        if self.cart.is_empty() {
            return Err(CommerceError::EmptyCart.into());
        }
        self.checkout_open = true;
        self.cart_open = false;
        Ok(())
    }

    pub fn close_checkout(&mut self) {
        self.checkout_open = false;
    }

    pub fn empty_cart_notice(&self) -> &'static str {
        Label::CartEmpty.text(self.language)
    }

    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CheckoutForm {
        &mut self.form
    }

    pub fn submit_button(&self) -> SubmitButton {
        self.submitter.button(self.language)
    }

    /// Validate the form and snapshot the order; the submit button disables
    /// until [`Storefront::finish_order`].
    pub fn begin_order(&mut self) -> Result<OrderRequest, StorefrontError> {
        let request = self.submitter.begin(&self.form, &self.cart)?;
        tracing::debug!(lines = request.cart.len(), total = %request.total(), "order submission started");
        Ok(request)
    }

    /// Apply a submission outcome and return the notice to show.
    ///
    /// Only a placed order resets the form, closes checkout and clears the
    /// cart. The submit button is re-enabled in every case.
    pub fn finish_order(&mut self, outcome: &SubmitOutcome) -> String {
        self.submitter.finish();
        match outcome {
            SubmitOutcome::Placed { message } => {
                tracing::info!(message = %message, "order placed");
                self.form.reset();
                self.checkout_open = false;
                self.clear_cart();
            }
            SubmitOutcome::Rejected { status, message } => {
                tracing::warn!(status, message = %message, "order rejected");
            }
            SubmitOutcome::Failed { reason } => {
                tracing::error!(reason = %reason, "order submission failed");
            }
        }
        outcome.notice(self.language)
    }
}
