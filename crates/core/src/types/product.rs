//! Product types as delivered by the upstream catalog API.
//!
//! The upstream API (a dummyjson-style REST service) is the system of record
//! for product and category data. Products are constructed once per fetch
//! response, are immutable thereafter, and are never persisted locally.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product exactly as the upstream API delivers it.
///
/// Unknown upstream fields (tags, sku, shipping metadata, ...) are ignored
/// on deserialization. `brand` is missing for some upstream records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    /// Discount in percent, 0-100.
    pub discount_percentage: f64,
    /// Rating, 0-5.
    pub rating: f64,
    pub stock: u32,
    #[serde(default)]
    pub brand: Option<String>,
    /// Category slug (e.g. `"smartphones"`).
    pub category: String,
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// A product enriched with its derived `date_added`.
///
/// The upstream API provides no creation timestamp, so `date_added` is
/// assigned deterministically from the product id when a fetch response is
/// converted (see `view::dates` in the catalog crate).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub discount_percentage: f64,
    pub rating: f64,
    pub stock: u32,
    #[serde(default)]
    pub brand: Option<String>,
    pub category: String,
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub date_added: NaiveDate,
}

impl Product {
    /// Attach a derived `date_added` to a raw upstream product.
    #[must_use]
    pub fn from_raw(raw: RawProduct, date_added: NaiveDate) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            description: raw.description,
            price: raw.price,
            discount_percentage: raw.discount_percentage,
            rating: raw.rating,
            stock: raw.stock,
            brand: raw.brand,
            category: raw.category,
            thumbnail: raw.thumbnail,
            images: raw.images,
            date_added,
        }
    }
}

/// The upstream listing envelope (`GET /products`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsPage {
    pub products: Vec<RawProduct>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_product_deserializes_upstream_shape() {
        let raw: RawProduct = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Essence Mascara Lash Princess",
            "description": "A popular mascara.",
            "price": 9.99,
            "discountPercentage": 7.17,
            "rating": 4.94,
            "stock": 5,
            "brand": "Essence",
            "category": "beauty",
            "thumbnail": "https://cdn.example.com/thumb.png",
            "images": ["https://cdn.example.com/1.png"],
            "sku": "ignored-extra-field"
        }))
        .unwrap();

        assert_eq!(raw.id, 1);
        assert_eq!(raw.category, "beauty");
        assert_eq!(raw.brand.as_deref(), Some("Essence"));
        assert_eq!(raw.price.to_string(), "9.99");
    }

    #[test]
    fn test_raw_product_tolerates_missing_brand_and_images() {
        let raw: RawProduct = serde_json::from_value(serde_json::json!({
            "id": 2,
            "title": "Generic Widget",
            "description": "No brand on record.",
            "price": "4.50",
            "discountPercentage": 0.0,
            "rating": 3.1,
            "stock": 12,
            "category": "widgets",
            "thumbnail": "https://cdn.example.com/widget.png"
        }))
        .unwrap();

        assert!(raw.brand.is_none());
        assert!(raw.images.is_empty());
    }

    #[test]
    fn test_product_from_raw_carries_all_fields() {
        let raw: RawProduct = serde_json::from_value(serde_json::json!({
            "id": 7,
            "title": "Lamp",
            "description": "A lamp.",
            "price": 25,
            "discountPercentage": 1.0,
            "rating": 4.0,
            "stock": 3,
            "brand": "Lumen",
            "category": "furniture",
            "thumbnail": "t.png",
            "images": []
        }))
        .unwrap();

        let date = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let product = Product::from_raw(raw, date);
        assert_eq!(product.id, 7);
        assert_eq!(product.date_added, date);
        assert_eq!(product.brand.as_deref(), Some("Lumen"));
    }
}
