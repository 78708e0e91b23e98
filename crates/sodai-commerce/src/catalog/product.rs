//! Product types.

use crate::i18n::{Label, Language, Localized};
use crate::ids::ProductId;
use crate::money::Taka;
use serde::{Deserialize, Serialize};

/// Units priced per engagement rather than per item shipped.
const SERVICE_UNITS: &[&str] = &["per hour", "per visit", "per work"];

/// Path prefix for catalog images.
pub const STATIC_PREFIX: &str = "/static/";

/// How an order for a product reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fulfillment {
    /// A provider arrives at the customer (service units).
    Arrival,
    /// Goods are delivered.
    Delivery,
}

impl Fulfillment {
    /// Label shown next to the delivery time.
    pub fn label(self, lang: Language) -> &'static str {
        match self {
            Fulfillment::Arrival => Label::Arrival.text(lang),
            Fulfillment::Delivery => Label::Delivery.text(lang),
        }
    }
}

/// A product (or bookable service profile) in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: Localized,
    /// Current price.
    pub price: Taka,
    /// Price before discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Taka>,
    /// Average rating, 0 to 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews_count: Option<u32>,
    /// Image path relative to the static root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<Localized>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<Localized>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<Localized>,
    /// Years of experience (service profiles).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Localized>,
    /// Specialties (service profiles).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expertise: Option<Localized>,
    /// Unit label, e.g. "1 kg" or "per visit".
    #[serde(default)]
    pub unit: String,
    /// Page URL pushed into history while the detail view is open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Product {
    /// Create a product with only the required fields set.
    pub fn new(id: impl Into<ProductId>, name: Localized, price: Taka) -> Self {
        Self {
            id: id.into(),
            name,
            price,
            original_price: None,
            rating: None,
            reviews_count: None,
            image: None,
            short_description: None,
            delivery_time: None,
            brand: None,
            experience: None,
            expertise: None,
            unit: String::new(),
            url: None,
        }
    }

    /// Check if the product is discounted.
    pub fn is_on_sale(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }

    /// Whole-percent discount, when on sale.
    pub fn discount_percent(&self) -> Option<u32> {
        self.original_price
            .and_then(|original| self.price.discount_percent_from(original))
    }

    /// Number of stars to draw: the rating rounded to the nearest integer.
    ///
    /// `None` when there is no rating (a rating of 0 counts as none).
    pub fn star_count(&self) -> Option<u8> {
        self.rating
            .filter(|r| *r > 0.0)
            .map(|r| r.round().clamp(0.0, 5.0) as u8)
    }

    /// Single-letter stand-in when the product has no image.
    pub fn placeholder_initial(&self) -> char {
        self.name
            .en
            .chars()
            .next()
            .or_else(|| self.name.bn.chars().next())
            .unwrap_or('?')
    }

    /// Absolute image source, if the product has an image.
    pub fn image_src(&self) -> Option<String> {
        self.image
            .as_deref()
            .map(|path| format!("{}{}", STATIC_PREFIX, path.trim_start_matches('/')))
    }

    /// Whether the unit describes a visit rather than shipped goods.
    pub fn fulfillment(&self) -> Fulfillment {
        if SERVICE_UNITS.contains(&self.unit.as_str()) {
            Fulfillment::Arrival
        } else {
            Fulfillment::Delivery
        }
    }
}

/// Text of an optional localized field, or a fixed default label.
pub(crate) fn localized_or(field: Option<&Localized>, lang: Language, default: Label) -> String {
    field
        .map(|text| text.get(lang).to_string())
        .unwrap_or_else(|| default.text(lang).to_string())
}
