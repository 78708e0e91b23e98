//! Product cards shared by search results and listing pages.

use crate::catalog::{CategoryKind, Product};
use crate::i18n::{Label, Language};
use crate::ids::{ProductId, SubcategoryId};
use crate::money::Taka;

/// Card or detail image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardImage {
    Picture { src: String, alt: String },
    /// No image: show this letter instead.
    Placeholder(char),
}

impl CardImage {
    pub fn of(product: &Product) -> Self {
        match product.image_src() {
            Some(src) => CardImage::Picture {
                src,
                alt: product.name.en.clone(),
            },
            None => CardImage::Placeholder(product.placeholder_initial()),
        }
    }
}

/// Type-specific part of a card.
#[derive(Debug, Clone, PartialEq)]
pub enum CardBody {
    /// Service provider profile.
    Profile {
        rating_caption: &'static str,
        /// Rating as shown, or "N/A".
        rating: String,
        experience: Option<String>,
        expertise: Option<String>,
        action: &'static str,
    },
    /// Goods.
    Standard {
        /// Badge text, present when the product is on sale.
        sale: Option<&'static str>,
        rating: String,
        reviews: u32,
        action: &'static str,
    },
}

/// A clickable product card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: ProductId,
    /// Subcategory the product was found under, used for result navigation.
    pub subcategory_id: Option<SubcategoryId>,
    pub name: String,
    pub image: CardImage,
    pub price: Taka,
    pub body: CardBody,
}

impl ProductCard {
    pub fn is_profile(&self) -> bool {
        matches!(self.body, CardBody::Profile { .. })
    }
}

/// Project one product as a card for its inherited category type.
pub fn project_card(
    product: &Product,
    subcategory_id: Option<&SubcategoryId>,
    kind: CategoryKind,
    lang: Language,
) -> ProductCard {
    let rating = product.rating.filter(|r| *r > 0.0);
    let body = if kind.is_service() {
        CardBody::Profile {
            rating_caption: Label::Rating.text(lang),
            rating: rating
                .map(|r| r.to_string())
                .unwrap_or_else(|| Label::NotAvailable.text(lang).to_string()),
            experience: product.experience.as_ref().map(|t| t.get(lang).to_string()),
            expertise: product.expertise.as_ref().map(|t| t.get(lang).to_string()),
            action: Label::HireNow.text(lang),
        }
    } else {
        CardBody::Standard {
            sale: product.is_on_sale().then(|| Label::Sale.text(lang)),
            rating: rating.unwrap_or(0.0).to_string(),
            reviews: product.reviews_count.unwrap_or(0),
            action: Label::AddToCart.text(lang),
        }
    };

    ProductCard {
        id: product.id.clone(),
        subcategory_id: subcategory_id.cloned(),
        name: product.name.get(lang).to_string(),
        image: CardImage::of(product),
        price: product.price,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Localized;

    fn electrician() -> Product {
        let mut p = Product::new("s1", Localized::new("Karim", "করিম"), Taka::new(500));
        p.experience = Some(Localized::new("5 years", "৫ বছর"));
        p
    }

    #[test]
    fn test_service_card_is_profile() {
        let sub = SubcategoryId::new("electrician");
        let card = project_card(&electrician(), Some(&sub), CategoryKind::Service, Language::Bn);

        assert!(card.is_profile());
        assert_eq!(card.name, "করিম");
        assert_eq!(card.image, CardImage::Placeholder('K'));
        match card.body {
            CardBody::Profile {
                rating,
                action,
                experience,
                ..
            } => {
                assert_eq!(rating, "N/A");
                assert_eq!(action, "হায়ার করুন");
                assert_eq!(experience.as_deref(), Some("৫ বছর"));
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn test_goods_card_with_sale() {
        let mut p = Product::new("p1", Localized::new("Rice", "চাল"), Taka::new(100));
        p.original_price = Some(Taka::new(150));
        p.rating = Some(4.5);
        p.image = Some("rice.png".to_string());

        let card = project_card(&p, None, CategoryKind::Goods, Language::En);
        assert_eq!(
            card.image,
            CardImage::Picture {
                src: "/static/rice.png".to_string(),
                alt: "Rice".to_string()
            }
        );
        assert_eq!(
            card.body,
            CardBody::Standard {
                sale: Some("Sale"),
                rating: "4.5".to_string(),
                reviews: 0,
                action: "Add to Cart",
            }
        );
    }

    #[test]
    fn test_goods_card_defaults() {
        let p = Product::new("p1", Localized::new("Rice", "চাল"), Taka::new(50));
        let card = project_card(&p, None, CategoryKind::Goods, Language::En);
        match card.body {
            CardBody::Standard { sale, rating, reviews, .. } => {
                assert_eq!(sale, None);
                assert_eq!(rating, "0");
                assert_eq!(reviews, 0);
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn test_sale_badge_follows_language() {
        let mut p = Product::new("p1", Localized::new("Rice", "চাল"), Taka::new(100));
        p.original_price = Some(Taka::new(120));

        for lang in [Language::En, Language::Bn] {
            match project_card(&p, None, CategoryKind::Goods, lang).body {
                CardBody::Standard { sale, .. } => assert_eq!(sale, Some(Label::Sale.text(lang))),
                other => panic!("unexpected body: {other:?}"),
            }
        }
    }
}
