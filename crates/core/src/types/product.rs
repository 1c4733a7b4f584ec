//! Catalog product records.
//!
//! Products are read-only reference data for the session: they are
//! deserialized from the catalog JSON once and never mutated. Field names
//! follow the catalog asset's camelCase convention.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchasable product from the static catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: String,
    pub name: String,
    pub category: String,
    /// Base price in the store currency.
    pub price: Decimal,
    /// Sale price; overrides the base price when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Decimal>,
    /// Average rating, 0 to 5.
    pub rating: f64,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    /// Image URL.
    pub image: String,
    /// Promotional offer tag (e.g. `summer_sale`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer: Option<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// A customer review attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub rating: f64,
    pub text: String,
}

impl Product {
    /// The price the customer actually pays: sale price if set, otherwise
    /// the base price.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        self.sale_price.unwrap_or(self.price)
    }

    /// Whether the product is currently on sale.
    #[must_use]
    pub const fn on_sale(&self) -> bool {
        self.sale_price.is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_effective_price_prefers_sale_price() {
        let json = r#"{
            "id": "p1",
            "name": "Blue Shirt",
            "category": "men",
            "price": 30,
            "salePrice": 25,
            "rating": 3.2,
            "sizes": ["L"],
            "colors": ["blue"],
            "image": "/img/p1.jpg"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.effective_price(), decimal("25"));
        assert!(product.on_sale());
    }

    #[test]
    fn test_effective_price_falls_back_to_base() {
        let json = r#"{
            "id": "p2",
            "name": "Red Shirt",
            "category": "men",
            "price": 20,
            "rating": 4.6,
            "sizes": ["M"],
            "colors": ["red"],
            "image": "/img/p2.jpg"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.effective_price(), decimal("20"));
        assert!(!product.on_sale());
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "id": "p3",
            "name": "Hat",
            "category": "men",
            "price": 12.5,
            "rating": 4.0,
            "sizes": [],
            "colors": [],
            "image": "/img/p3.jpg"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.sale_price, None);
        assert_eq!(product.offer, None);
        assert!(product.reviews.is_empty());
        assert_eq!(product.price, decimal("12.5"));
    }

    #[test]
    fn test_offer_and_reviews_roundtrip() {
        let json = r#"{
            "id": "p4",
            "name": "Summer Dress",
            "category": "women",
            "price": 45,
            "rating": 4.8,
            "sizes": ["S", "M"],
            "colors": ["yellow"],
            "image": "/img/p4.jpg",
            "offer": "summer_sale",
            "reviews": [{"rating": 5, "text": "Lovely fit."}]
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.offer.as_deref(), Some("summer_sale"));
        assert_eq!(product.reviews.len(), 1);
        assert_eq!(product.reviews.first().unwrap().text, "Lovely fit.");
    }
}
