//! Live search panel projection.

use crate::i18n::{Label, Language};
use crate::ids::SubcategoryId;
use crate::search::SearchResults;
use crate::view::{category_path, project_card, ProductCard};

/// A matched subcategory shown as a chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChip {
    pub id: SubcategoryId,
    pub label: String,
    pub href: String,
}

/// The live results panel under the search box.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchPanel {
    #[default]
    Hidden,
    Visible {
        chips: Vec<CategoryChip>,
        cards: Vec<ProductCard>,
        /// Shown in place of cards when only categories matched.
        notice: Option<&'static str>,
    },
}

impl SearchPanel {
    pub fn is_visible(&self) -> bool {
        matches!(self, SearchPanel::Visible { .. })
    }
}

/// Project search results. `None` (blank query) and empty results both hide the panel.
pub fn project_search(results: Option<&SearchResults<'_>>, lang: Language) -> SearchPanel {
    let results = match results {
        Some(results) if !results.is_empty() => results,
        _ => return SearchPanel::Hidden,
    };

    let chips = results
        .categories
        .iter()
        .map(|sub| CategoryChip {
            id: sub.id.clone(),
            label: sub.name.get(lang).to_string(),
            href: category_path(sub.id.as_str()),
        })
        .collect();

    let cards: Vec<ProductCard> = results
        .products
        .iter()
        .map(|entry| project_card(&entry.product, Some(&entry.subcategory_id), entry.kind, lang))
        .collect();

    let notice = cards
        .is_empty()
        .then(|| Label::NoProductsFound.text(lang));

    SearchPanel::Visible {
        chips,
        cards,
        notice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category, CategoryKind, Product, Subcategory};
    use crate::i18n::Localized;
    use crate::money::Taka;
    use crate::search::{search, CatalogIndex, SearchQuery};

    fn index() -> CatalogIndex {
        CatalogIndex::build(&Catalog::new(vec![
            Category::new("home", Localized::new("Home", "হোম"), CategoryKind::Service)
                .with_subcategory(
                    Subcategory::new("electrician", Localized::new("Electrician", "ইলেকট্রিশিয়ান"))
                        .with_item(Product::new("s1", Localized::new("Karim", "করিম"), Taka::new(500))),
                )
                .with_subcategory(Subcategory::new("plumber", Localized::new("Plumber", "প্লাম্বার"))),
        ]))
    }

    fn panel(raw: &str) -> SearchPanel {
        let index = index();
        let query = SearchQuery::parse(raw);
        let results = query.as_ref().map(|q| search(&index, q));
        project_search(results.as_ref(), Language::En)
    }

    #[test]
    fn test_blank_query_hides_panel() {
        assert_eq!(panel(""), SearchPanel::Hidden);
        assert_eq!(panel("   "), SearchPanel::Hidden);
    }

    #[test]
    fn test_no_match_hides_panel() {
        assert!(!panel("zzz").is_visible());
    }

    #[test]
    fn test_category_only_match_shows_notice() {
        match panel("plumb") {
            SearchPanel::Visible { chips, cards, notice } => {
                assert_eq!(chips.len(), 1);
                assert_eq!(chips[0].href, "/category/plumber");
                assert!(cards.is_empty());
                assert_eq!(notice, Some("No products found."));
            }
            SearchPanel::Hidden => panic!("panel should be visible"),
        }
    }

    #[test]
    fn test_service_results_render_as_profiles() {
        match panel("electric") {
            SearchPanel::Visible { cards, notice, .. } => {
                assert_eq!(cards.len(), 1);
                assert!(cards[0].is_profile());
                assert_eq!(cards[0].subcategory_id.as_ref().map(|s| s.as_str()), Some("electrician"));
                assert_eq!(notice, None);
            }
            SearchPanel::Hidden => panic!("panel should be visible"),
        }
    }
}
