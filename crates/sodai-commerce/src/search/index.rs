//! Flattened catalog index for search.

use crate::catalog::{Catalog, CategoryKind, Product};
use crate::i18n::Localized;
use crate::ids::SubcategoryId;

/// A subcategory with its inherited category type.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedSubcategory {
    pub id: SubcategoryId,
    pub name: Localized,
    pub kind: CategoryKind,
}

/// A product with the subcategory and type it inherits.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedProduct {
    pub product: Product,
    pub subcategory_id: SubcategoryId,
    pub subcategory_name: Localized,
    pub kind: CategoryKind,
}

/// Flat view of every subcategory and subcategory product, in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogIndex {
    subcategories: Vec<IndexedSubcategory>,
    products: Vec<IndexedProduct>,
}

impl CatalogIndex {
    /// Flatten the catalog tree.
    pub fn build(catalog: &Catalog) -> Self {
        let mut index = Self::default();
        for category in catalog.categories() {
            for sub in &category.subcategories {
                index.subcategories.push(IndexedSubcategory {
                    id: sub.id.clone(),
                    name: sub.name.clone(),
                    kind: category.kind,
                });
                index.products.extend(sub.items.iter().map(|product| IndexedProduct {
                    product: product.clone(),
                    subcategory_id: sub.id.clone(),
                    subcategory_name: sub.name.clone(),
                    kind: category.kind,
                }));
            }
        }
        tracing::debug!(
            subcategories = index.subcategories.len(),
            products = index.products.len(),
            "catalog index built"
        );
        index
    }

    pub fn subcategories(&self) -> &[IndexedSubcategory] {
        &self.subcategories
    }

    pub fn products(&self) -> &[IndexedProduct] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.subcategories.is_empty() && self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Subcategory};
    use crate::money::Taka;

    #[test]
    fn test_build_inherits_kind_and_subcategory() {
        let plumber = Product::new("s1", Localized::new("Rahim", "রহিম"), Taka::new(400));
        let catalog = Catalog::new(vec![
            Category::new("homeservice", Localized::new("Home", "হোম"), CategoryKind::Service)
                .with_subcategory(
                    Subcategory::new("plumber", Localized::new("Plumber", "প্লাম্বার"))
                        .with_item(plumber),
                )
                .with_subcategory(Subcategory::new("painter", Localized::new("Painter", "রং"))),
        ]);

        let index = CatalogIndex::build(&catalog);
        assert_eq!(index.subcategories().len(), 2);
        assert_eq!(index.products().len(), 1);

        let entry = &index.products()[0];
        assert_eq!(entry.subcategory_id, "plumber");
        assert_eq!(entry.kind, CategoryKind::Service);
        assert_eq!(index.subcategories()[1].kind, CategoryKind::Service);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(CatalogIndex::build(&Catalog::empty()).is_empty());
    }
}
