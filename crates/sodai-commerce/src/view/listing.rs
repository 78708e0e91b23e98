//! `/category/<id>` page projection.

use crate::catalog::{Catalog, Listing};
use crate::i18n::Language;
use crate::ids::CategoryId;
use crate::view::{project_card, ProductCard};

/// A category or subcategory landing page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView {
    pub title: String,
    /// The top-level category that owns the page.
    pub owner: CategoryId,
    pub cards: Vec<ProductCard>,
}

/// Project the page for `id`, or `None` when no category or subcategory has it.
pub fn project_listing(catalog: &Catalog, id: &str, lang: Language) -> Option<ListingView> {
    let listing = catalog.find_listing(id)?;
    let owner = listing.owner();

    let cards = match listing {
        Listing::Category(category) => {
            let direct = category
                .items
                .iter()
                .map(|p| project_card(p, None, category.kind, lang));
            let nested = category.subcategories.iter().flat_map(|sub| {
                sub.items
                    .iter()
                    .map(move |p| project_card(p, Some(&sub.id), category.kind, lang))
            });
            direct.chain(nested).collect()
        }
        Listing::Subcategory { subcategory, .. } => subcategory
            .items
            .iter()
            .map(|p| project_card(p, Some(&subcategory.id), owner.kind, lang))
            .collect(),
    };

    Some(ListingView {
        title: listing.name().get(lang).to_string(),
        owner: owner.id.clone(),
        cards,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, CategoryKind, Product, Subcategory};
    use crate::i18n::Localized;
    use crate::money::Taka;

    fn catalog() -> Catalog {
        let mut karim = Product::new("s1", Localized::new("Karim", "করিম"), Taka::new(500));
        karim.expertise = Some(Localized::new("Wiring", "ওয়্যারিং"));
        Catalog::new(vec![Category::new(
            "homeservice",
            Localized::new("Home Service", "হোম সার্ভিস"),
            CategoryKind::Service,
        )
        .with_subcategory(
            Subcategory::new("electrician", Localized::new("Electrician", "ইলেকট্রিশিয়ান"))
                .with_item(karim),
        )])
    }

    #[test]
    fn test_subcategory_listing() {
        let view = project_listing(&catalog(), "electrician", Language::Bn).unwrap();
        assert_eq!(view.title, "ইলেকট্রিশিয়ান");
        assert_eq!(view.owner, "homeservice");
        assert_eq!(view.cards.len(), 1);
        assert!(view.cards[0].is_profile());
    }

    #[test]
    fn test_category_listing_collects_nested_products() {
        let view = project_listing(&catalog(), "homeservice", Language::En).unwrap();
        assert_eq!(view.title, "Home Service");
        assert_eq!(view.cards[0].name, "Karim");
        assert_eq!(
            view.cards[0].subcategory_id.as_ref().map(|s| s.as_str()),
            Some("electrician")
        );
    }

    #[test]
    fn test_unknown_listing() {
        assert!(project_listing(&catalog(), "nope", Language::En).is_none());
    }
}
