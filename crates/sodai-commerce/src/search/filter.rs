//! Live-search filter over the catalog index.

use crate::search::{CatalogIndex, SearchQuery, SearchResults};
use std::collections::HashSet;

/// Match subcategories and products against a normalized query.
///
/// Both languages are searched regardless of the display language.
pub fn search<'a>(index: &'a CatalogIndex, query: &SearchQuery) -> SearchResults<'a> {
    let needle = query.as_str();

    let categories: Vec<_> = index
        .subcategories()
        .iter()
        .filter(|sub| sub.name.contains_lowercase(needle))
        .collect();

    let by_name = index
        .products()
        .iter()
        .filter(|entry| entry.product.name.contains_lowercase(needle));

    let by_category = index
        .products()
        .iter()
        .filter(|entry| categories.iter().any(|c| c.id == entry.subcategory_id));

    let mut seen = HashSet::new();
    let products = by_name
        .chain(by_category)
        .filter(|entry| seen.insert(&entry.product.id))
        .collect();

    SearchResults {
        categories,
        products,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category, CategoryKind, Product, Subcategory};
    use crate::i18n::Localized;
    use crate::money::Taka;

    fn catalog() -> Catalog {
        let product = |id: &str, en: &str, bn: &str| {
            Product::new(id, Localized::new(en, bn), Taka::new(50))
        };
        Catalog::new(vec![
            Category::new("grocery", Localized::new("Grocery", "মুদি"), CategoryKind::Goods)
                .with_subcategory(
                    Subcategory::new("rice", Localized::new("Rice", "চাল"))
                        .with_item(product("p2", "Miniket", "মিনিকেট"))
                        .with_item(product("p3", "Nazirshail", "নাজিরশাইল")),
                )
                .with_subcategory(
                    Subcategory::new("snacks", Localized::new("Snacks", "নাস্তা"))
                        .with_item(product("p1", "Rice Crackers", "চালের পিঠা")),
                ),
        ])
    }

    fn run(index: &CatalogIndex, raw: &str) -> Vec<String> {
        let query = SearchQuery::parse(raw).unwrap();
        search(index, &query)
            .product_ids()
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_name_matches_precede_category_matches() {
        let index = CatalogIndex::build(&catalog());
        // "rice" hits p1 by name and the rice subcategory (p2, p3)
        assert_eq!(run(&index, "rice"), vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_case_insensitive() {
        let index = CatalogIndex::build(&catalog());
        assert_eq!(run(&index, "MINIKET"), vec!["p2"]);
    }

    #[test]
    fn test_bengali_matches_regardless_of_display_language() {
        let index = CatalogIndex::build(&catalog());
        // p1 by its Bengali name, p2/p3 via the চাল subcategory
        assert_eq!(run(&index, "চাল"), vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_category_results() {
        let index = CatalogIndex::build(&catalog());
        let query = SearchQuery::parse("snack").unwrap();
        let results = search(&index, &query);
        assert_eq!(results.categories.len(), 1);
        assert_eq!(results.categories[0].id, "snacks");
        assert_eq!(results.product_ids(), vec!["p1"]);
    }

    #[test]
    fn test_no_match() {
        let index = CatalogIndex::build(&catalog());
        let query = SearchQuery::parse("fish").unwrap();
        assert!(search(&index, &query).is_empty());
    }
}
