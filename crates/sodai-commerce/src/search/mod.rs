//! Search module.
//!
//! A flattened index over the catalog and the live-search filter.

mod filter;
mod index;
mod query;
mod results;

pub use filter::search;
pub use index::{CatalogIndex, IndexedProduct, IndexedSubcategory};
pub use query::SearchQuery;
pub use results::SearchResults;
