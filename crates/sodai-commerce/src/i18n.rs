//! Bilingual text: the language preference, localized catalog fields,
//! fixed UI labels and dotted-key resolution into the catalog document.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// Bengali.
    #[default]
    Bn,
}

/// Every supported language, in switcher order.
pub const SUPPORTED_LANGUAGES: &[Language] = &[Language::En, Language::Bn];

impl Language {
    /// Language code as persisted and used in catalog objects.
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Bn => "bn",
        }
    }

    /// Name shown in the language switcher.
    pub const fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Bn => "বাংলা",
        }
    }

    /// Parse a language code, ignoring case and surrounding whitespace.
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "bn" => Some(Language::Bn),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A text value with one entry per supported language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Localized {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub bn: String,
}

impl Localized {
    pub fn new(en: impl Into<String>, bn: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            bn: bn.into(),
        }
    }

    /// Text for the given language.
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::Bn => &self.bn,
        }
    }

    /// Whether either language's text contains an already-lowercased needle.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        self.en.to_lowercase().contains(needle) || self.bn.to_lowercase().contains(needle)
    }
}

/// Fixed UI strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    AddToCart,
    HireNow,
    Rating,
    Arrival,
    Delivery,
    GenericBrand,
    NoDescription,
    StandardDelivery,
    NoProductsFound,
    NotAvailable,
    Sending,
    PlaceOrder,
    OrderFailed,
    CartEmpty,
    Sale,
    Off,
}

impl Label {
    /// Text for the given language.
    pub const fn text(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Label::AddToCart, Language::En) => "Add to Cart",
            (Label::AddToCart, Language::Bn) => "কার্টে যোগ করুন",
            (Label::HireNow, Language::En) => "Hire Now",
            (Label::HireNow, Language::Bn) => "হায়ার করুন",
            (Label::Rating, Language::En) => "Rating",
            (Label::Rating, Language::Bn) => "রেটিং",
            (Label::Arrival, Language::En) => "Arrival:",
            (Label::Arrival, Language::Bn) => "পৌঁছাবে:",
            (Label::Delivery, Language::En) => "Delivery:",
            (Label::Delivery, Language::Bn) => "ডেলিভারি:",
            // The remaining strings ship untranslated.
            (Label::GenericBrand, _) => "Generic",
            (Label::NoDescription, _) => "No description available.",
            (Label::StandardDelivery, _) => "Standard",
            (Label::NoProductsFound, _) => "No products found.",
            (Label::NotAvailable, _) => "N/A",
            (Label::Sending, _) => "Sending...",
            (Label::PlaceOrder, _) => "Place Order",
            (Label::OrderFailed, _) => "Failed to place order. Please try again.",
            (Label::CartEmpty, _) => "Your cart is empty!",
            (Label::Sale, _) => "Sale",
            (Label::Off, _) => "OFF",
        }
    }
}

/// Resolve a dotted key path (e.g. `categories.grocery.subcategories.rice.name`)
/// inside a catalog document and pick the text for `lang`.
///
/// Object nodes are indexed by key and array nodes by the `id` of their
/// elements (or by position). Returns `None` when any segment is missing or
/// the final node is not displayable text.
pub fn resolve_key(document: &Value, key: &str, lang: Language) -> Option<String> {
    let mut current = document;
    for segment in key.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items
                .iter()
                .find(|item| item.get("id").and_then(Value::as_str) == Some(segment))
                .or_else(|| segment.parse::<usize>().ok().and_then(|i| items.get(i)))?,
            _ => return None,
        };
    }

    match current {
        Value::Object(map) => match map.get(lang.code()) {
            Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
            _ => None,
        },
        Value::String(text) => Some(text.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
