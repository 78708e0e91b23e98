//! View-model projections.
//!
//! Each function here maps state to a plain description of what the UI should
//! show; components render these structs and never read domain state directly.

mod card;
mod cart;
mod listing;
mod menu;
mod search;

pub use card::{project_card, CardBody, CardImage, ProductCard};
pub use cart::{project_cart, CartLine, CartPanel};
pub use listing::{project_listing, ListingView};
pub use menu::{project_menu, CategoryMenu, MenuEntry, MenuLink, MenuToggles};
pub use search::{project_search, CategoryChip, SearchPanel};

/// Path prefix of category and subcategory landing pages.
pub const CATEGORY_PATH_PREFIX: &str = "/category/";

/// Landing page path for a category or subcategory id.
pub fn category_path(id: &str) -> String {
    format!("{}{}", CATEGORY_PATH_PREFIX, id)
}
