//! The loaded catalog tree.

use crate::catalog::{Category, Product, Subcategory};
use crate::error::CommerceError;
use crate::i18n::{resolve_key, Language, Localized};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

#[derive(Deserialize)]
struct CatalogData {
    #[serde(default)]
    categories: Vec<Category>,
}

/// The category/subcategory/product tree, read-only after load.
///
/// Keeps the raw document alongside the typed tree so dotted localization
/// keys can be resolved against fields the typed model does not know about.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    document: Value,
}

/// What a `/category/<id>` page shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Listing<'a> {
    /// A top-level category.
    Category(&'a Category),
    /// A subcategory and the category that owns it.
    Subcategory {
        parent: &'a Category,
        subcategory: &'a Subcategory,
    },
}

impl<'a> Listing<'a> {
    pub fn name(&self) -> &'a Localized {
        match self {
            Listing::Category(category) => &category.name,
            Listing::Subcategory { subcategory, .. } => &subcategory.name,
        }
    }

    /// The top-level category whose menu contains this listing.
    pub fn owner(&self) -> &'a Category {
        match self {
            Listing::Category(category) => category,
            Listing::Subcategory { parent, .. } => parent,
        }
    }
}

impl Catalog {
    /// A catalog with no categories.
    pub fn empty() -> Self {
        Self {
            categories: Vec::new(),
            document: Value::Object(serde_json::Map::new()),
        }
    }

    /// Build a catalog from typed categories.
    pub fn new(categories: Vec<Category>) -> Self {
        let document = serde_json::json!({ "categories": categories });
        Self {
            categories,
            document,
        }
    }

    /// Decode a catalog document (`{ "categories": [...] }`).
    pub fn from_value(document: Value) -> Result<Self, CommerceError> {
        let data: CatalogData = serde_json::from_value(document.clone())
            .map_err(|e| CommerceError::InvalidCatalog(e.to_string()))?;
        let catalog = Self {
            categories: data.categories,
            document,
        };
        for id in catalog.duplicate_product_ids() {
            tracing::warn!(product_id = %id, "duplicate product id in catalog");
        }
        Ok(catalog)
    }

    /// Decode a catalog document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let document: Value =
            serde_json::from_str(json).map_err(|e| CommerceError::InvalidCatalog(e.to_string()))?;
        Self::from_value(document)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The raw catalog document.
    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Find a top-level category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Find a product anywhere in the tree.
    pub fn find_product(&self, id: &ProductId) -> Option<&Product> {
        self.categories
            .iter()
            .flat_map(|c| c.products())
            .find(|p| &p.id == id)
    }

    /// Resolve a `/category/<id>` page: categories first, then subcategories.
    pub fn find_listing(&self, id: &str) -> Option<Listing<'_>> {
        if let Some(category) = self.category(id) {
            return Some(Listing::Category(category));
        }
        self.categories.iter().find_map(|parent| {
            parent
                .subcategory(id)
                .map(|subcategory| Listing::Subcategory {
                    parent,
                    subcategory,
                })
        })
    }

    /// Resolve a dotted localization key against the raw document.
    pub fn resolve(&self, key: &str, lang: Language) -> Option<String> {
        resolve_key(&self.document, key, lang)
    }

    fn duplicate_product_ids(&self) -> Vec<&ProductId> {
        let mut seen = HashSet::new();
        self.categories
            .iter()
            .flat_map(|c| c.products())
            .filter(|p| !seen.insert(&p.id))
            .map(|p| &p.id)
            .collect()
    }
}

impl Serialize for Catalog {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.document.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = Value::deserialize(deserializer)?;
        Catalog::from_value(document).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &str = r#"{
        "categories": [
            {
                "id": "homeservice",
                "type": "service",
                "name": { "en": "Home Service", "bn": "হোম সার্ভিস" },
                "subcategories": [
                    { "id": "electrician", "name": { "en": "Electrician", "bn": "ইলেকট্রিশিয়ান" },
                      "items": [ { "id": "s1", "name": { "en": "Karim", "bn": "করিম" }, "price": 500, "unit": "per visit" } ] },
                    { "id": "plumber", "name": { "en": "Plumber", "bn": "প্লাম্বার" }, "items": [] }
                ]
            },
            {
                "id": "grocery",
                "type": "goods",
                "name": { "en": "Grocery", "bn": "মুদি" },
                "subcategories": [
                    { "id": "rice", "name": { "en": "Rice", "bn": "চাল" },
                      "items": [ { "id": "p1", "name": { "en": "Miniket Rice", "bn": "মিনিকেট চাল" }, "price": 50 } ] }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(DATA).unwrap();
        assert_eq!(catalog.categories().len(), 2);
        assert!(catalog.category("grocery").is_some());
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_invalid_document() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(CommerceError::InvalidCatalog(_))
        ));
        assert!(Catalog::from_json(r#"{"categories": 3}"#).is_err());
        assert!(Catalog::from_json("{}").unwrap().is_empty());
    }

    #[test]
    fn test_find_product() {
        let catalog = Catalog::from_json(DATA).unwrap();
        let p = catalog.find_product(&ProductId::new("p1")).unwrap();
        assert_eq!(p.name.en, "Miniket Rice");
        assert!(catalog.find_product(&ProductId::new("nope")).is_none());
    }

    #[test]
    fn test_find_listing() {
        let catalog = Catalog::from_json(DATA).unwrap();

        let listing = catalog.find_listing("grocery").unwrap();
        assert!(matches!(listing, Listing::Category(_)));
        assert_eq!(listing.owner().id, "grocery");

        let listing = catalog.find_listing("electrician").unwrap();
        assert_eq!(listing.owner().id, "homeservice");
        assert_eq!(listing.name().en, "Electrician");
        assert!(matches!(listing, Listing::Subcategory { subcategory, .. } if subcategory.items[0].id == "s1"));

        assert!(catalog.find_listing("unknown").is_none());
    }

    #[test]
    fn test_resolve_keys() {
        let catalog = Catalog::from_json(DATA).unwrap();
        assert_eq!(
            catalog.resolve("categories.grocery.subcategories.rice.name", Language::Bn),
            Some("চাল".to_string())
        );
        assert_eq!(catalog.resolve("categories.grocery.nope", Language::En), None);
    }

    #[test]
    fn test_typed_construction_resolves_too() {
        let catalog = Catalog::from_json(DATA).unwrap();
        let rebuilt = Catalog::new(catalog.categories().to_vec());
        assert_eq!(
            rebuilt.resolve("categories.homeservice.name", Language::En),
            Some("Home Service".to_string())
        );
    }
}
