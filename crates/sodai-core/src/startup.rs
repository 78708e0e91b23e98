//! Page startup: install the fetched catalog and honor `?open_modal=`.

use sodai_cache::KeyValueStore;
use sodai_commerce::catalog::Catalog;
use sodai_commerce::detail::HistoryEffect;
use sodai_commerce::ids::ProductId;

use crate::{Storefront, StorefrontError};

/// What the page must do after an `open_modal` request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StartupEffects {
    /// Replace the address with the bare path, dropping the query string.
    pub strip_query: bool,
    /// History effect of auto-opening the detail view.
    pub history: HistoryEffect,
}

/// Install the fetched catalog, or an empty one if the fetch failed.
pub fn install_catalog<S: KeyValueStore>(
    state: &mut Storefront<S>,
    fetched: Result<Catalog, StorefrontError>,
) {
    let catalog = fetched.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to load catalog, continuing with an empty one");
        Catalog::empty()
    });
    state.set_catalog(catalog);
}

/// Auto-open the product named by the `open_modal` query value.
///
/// A blank value is ignored. Unknown ids still strip the query but open
/// nothing.
pub fn open_requested<S: KeyValueStore>(
    state: &mut Storefront<S>,
    requested: Option<&str>,
) -> StartupEffects {
    match requested.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => {
            tracing::debug!(product_id = %id, "opening detail view from query");
            StartupEffects {
                strip_query: true,
                history: state.open_detail(&ProductId::new(id)),
            }
        }
        None => StartupEffects::default(),
    }
}
