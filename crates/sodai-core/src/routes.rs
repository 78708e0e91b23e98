//! URL conventions: category pages, the `open_modal` parameter and search
//! result navigation. Query strings themselves are parsed by the router.

use sodai_commerce::ids::{ProductId, SubcategoryId};
pub use sodai_commerce::view::{category_path, CATEGORY_PATH_PREFIX};

/// Query parameter that opens a product's detail view on page load.
pub const OPEN_MODAL_PARAM: &str = "open_modal";

/// The listing id of a `/category/<id>` path: the last path segment.
pub fn parse_category_path(path: &str) -> Option<&str> {
    if !path.contains(CATEGORY_PATH_PREFIX) {
        return None;
    }
    path.rsplit('/').next().filter(|id| !id.is_empty())
}

/// Where a search result click leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultNavigation {
    /// Already on the product's subcategory page: open the detail view here.
    OpenInPlace(ProductId),
    /// Load the subcategory page, which then opens the detail view.
    Navigate(String),
}

/// Decide how to show a clicked search result from the current path.
pub fn search_result_target(
    current_path: &str,
    subcategory_id: &SubcategoryId,
    product_id: &ProductId,
) -> ResultNavigation {
    let target = category_path(subcategory_id.as_str());
    if current_path == target {
        ResultNavigation::OpenInPlace(product_id.clone())
    } else {
        ResultNavigation::Navigate(format!("{}?{}={}", target, OPEN_MODAL_PARAM, product_id))
    }
}
