//! Header category menus.

use std::collections::HashMap;

use crate::catalog::{Catalog, Category};
use crate::i18n::Language;
use crate::ids::{CategoryId, SubcategoryId};
use crate::view::category_path;

/// A navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLink {
    pub label: String,
    pub href: String,
}

/// One row of a category dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// A subcategory with products: a toggleable group of product links.
    Group {
        id: SubcategoryId,
        label: String,
        links: Vec<MenuLink>,
    },
    /// An empty subcategory: a direct link to its page.
    Link(MenuLink),
}

/// The dropdown for one top-level category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMenu {
    pub category_id: CategoryId,
    pub title: String,
    /// Open because the current page belongs to this category.
    pub active: bool,
    pub entries: Vec<MenuEntry>,
}

/// Dropdowns and groups the user has opened or closed by hand.
///
/// Keys are the category id for a dropdown and `<category>/<subcategory>`
/// for a group. Overrides outlive re-projection, so a language switch or a
/// cart update leaves an opened dropdown open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuToggles {
    overrides: HashMap<String, bool>,
}

impl MenuToggles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group_key(category_id: &CategoryId, subcategory_id: &SubcategoryId) -> String {
        format!("{}/{}", category_id, subcategory_id)
    }

    /// Whether `key` is open, falling back to `default` if never toggled.
    pub fn is_open(&self, key: &str, default: bool) -> bool {
        self.overrides.get(key).copied().unwrap_or(default)
    }

    /// Flip `key` and return its new state.
    pub fn toggle(&mut self, key: &str, default: bool) -> bool {
        let open = !self.is_open(key, default);
        self.overrides.insert(key.to_string(), open);
        open
    }
}

/// Project every category's dropdown. `current_listing` is the id from the
/// current `/category/<id>` path, if any.
pub fn project_menu(
    catalog: &Catalog,
    current_listing: Option<&str>,
    lang: Language,
) -> Vec<CategoryMenu> {
    let active_owner = current_listing
        .and_then(|id| catalog.find_listing(id))
        .map(|listing| listing.owner().id.clone());

    catalog
        .categories()
        .iter()
        .map(|category| CategoryMenu {
            category_id: category.id.clone(),
            title: category.name.get(lang).to_string(),
            active: active_owner.as_ref() == Some(&category.id),
            entries: menu_entries(catalog, category, lang),
        })
        .collect()
}

fn menu_entries(catalog: &Catalog, category: &Category, lang: Language) -> Vec<MenuEntry> {
    category
        .subcategories
        .iter()
        .map(|sub| {
            let key = format!("categories.{}.subcategories.{}.name", category.id, sub.id);
            let label = catalog
                .resolve(&key, lang)
                .unwrap_or_else(|| sub.name.get(lang).to_string());
            let href = category_path(sub.id.as_str());

            if sub.is_empty() {
                MenuEntry::Link(MenuLink { label, href })
            } else {
                let links = sub
                    .items
                    .iter()
                    .map(|item| MenuLink {
                        label: item.name.get(lang).to_string(),
                        href: href.clone(),
                    })
                    .collect();
                MenuEntry::Group {
                    id: sub.id.clone(),
                    label,
                    links,
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &str = r#"{
        "categories": [
            { "id": "homeservice", "type": "service", "name": { "en": "Home Service", "bn": "হোম সার্ভিস" },
              "subcategories": [
                { "id": "electrician", "name": { "en": "Electrician", "bn": "ইলেকট্রিশিয়ান" },
                  "items": [ { "id": "s1", "name": { "en": "Karim", "bn": "করিম" }, "price": 500 } ] },
                { "id": "plumber", "name": { "en": "Plumber", "bn": "প্লাম্বার" }, "items": [] }
              ] },
            { "id": "grocery", "name": { "en": "Grocery", "bn": "মুদি" },
              "subcategories": [ { "id": "rice", "name": { "en": "Rice", "bn": "চাল" } } ] }
        ]
    }"#;

    #[test]
    fn test_groups_and_links() {
        let catalog = Catalog::from_json(DATA).unwrap();
        let menus = project_menu(&catalog, None, Language::En);

        assert_eq!(menus.len(), 2);
        assert!(menus.iter().all(|m| !m.active));
        assert_eq!(
            menus[0].entries[0],
            MenuEntry::Group {
                id: SubcategoryId::new("electrician"),
                label: "Electrician".to_string(),
                links: vec![MenuLink {
                    label: "Karim".to_string(),
                    href: "/category/electrician".to_string()
                }],
            }
        );
        assert_eq!(
            menus[0].entries[1],
            MenuEntry::Link(MenuLink {
                label: "Plumber".to_string(),
                href: "/category/plumber".to_string()
            })
        );
    }

    #[test]
    fn test_active_dropdown_follows_listing_owner() {
        let catalog = Catalog::from_json(DATA).unwrap();

        let menus = project_menu(&catalog, Some("plumber"), Language::Bn);
        assert!(menus[0].active);
        assert!(!menus[1].active);
        assert_eq!(menus[0].title, "হোম সার্ভিস");

        let menus = project_menu(&catalog, Some("grocery"), Language::Bn);
        assert!(menus[1].active);

        let menus = project_menu(&catalog, Some("unknown"), Language::Bn);
        assert!(menus.iter().all(|m| !m.active));
    }

    #[test]
    fn test_toggles_survive_reprojection() {
        let catalog = Catalog::from_json(DATA).unwrap();
        let mut toggles = MenuToggles::new();

        let menus = project_menu(&catalog, Some("plumber"), Language::En);
        let service = &menus[0];
        let grocery = &menus[1];
        let group = MenuToggles::group_key(&service.category_id, &SubcategoryId::new("electrician"));

        assert!(toggles.toggle(grocery.category_id.as_str(), grocery.active));
        assert!(!toggles.toggle(service.category_id.as_str(), service.active));
        assert!(!toggles.is_open(&group, false));
        assert!(toggles.toggle(&group, false));

        let menus = project_menu(&catalog, Some("plumber"), Language::Bn);
        assert!(toggles.is_open(menus[1].category_id.as_str(), menus[1].active));
        assert!(!toggles.is_open(menus[0].category_id.as_str(), menus[0].active));
        assert!(toggles.is_open(&group, false));
    }
}
