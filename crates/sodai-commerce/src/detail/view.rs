//! Detail view projection.

use crate::catalog::{localized_or, Product};
use crate::i18n::{Label, Language};
use crate::ids::ProductId;
use crate::money::Taka;
use crate::view::CardImage;

/// Star rating line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingView {
    /// Rating rounded to the nearest whole star.
    pub stars: u8,
    pub reviews: u32,
}

impl RatingView {
    /// The stars as text, e.g. "⭐⭐⭐⭐".
    pub fn stars_text(&self) -> String {
        "\u{2b50}".repeat(usize::from(self.stars))
    }
}

/// Strike-through price and percentage badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountView {
    pub original: Taka,
    pub percent: u32,
    /// Suffix after the percentage.
    pub label: &'static str,
}

/// Everything the open detail view displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetailView {
    pub product_id: ProductId,
    pub image: CardImage,
    pub brand: String,
    pub name: String,
    pub price: Taka,
    /// Omitted when the product has no rating.
    pub rating: Option<RatingView>,
    /// Present only when the original price is above the price.
    pub discount: Option<DiscountView>,
    pub description: String,
    pub fulfillment_label: &'static str,
    pub delivery_time: String,
    pub quantity: u32,
    pub line_total: Taka,
    pub action: &'static str,
}

impl ProductDetailView {
    pub fn project(product: &Product, quantity: u32, lang: Language) -> Self {
        let discount = product
            .original_price
            .zip(product.discount_percent())
            .map(|(original, percent)| DiscountView {
                original,
                percent,
                label: Label::Off.text(lang),
            });

        Self {
            product_id: product.id.clone(),
            image: CardImage::of(product),
            brand: localized_or(product.brand.as_ref(), lang, Label::GenericBrand),
            name: product.name.get(lang).to_string(),
            price: product.price,
            rating: product.star_count().map(|stars| RatingView {
                stars,
                reviews: product.reviews_count.unwrap_or(0),
            }),
            discount,
            description: localized_or(
                product.short_description.as_ref(),
                lang,
                Label::NoDescription,
            ),
            fulfillment_label: product.fulfillment().label(lang),
            delivery_time: localized_or(
                product.delivery_time.as_ref(),
                lang,
                Label::StandardDelivery,
            ),
            quantity,
            line_total: product.price * quantity,
            action: Label::AddToCart.text(lang),
        }
    }
}
