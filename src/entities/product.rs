use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::timestamp;

pub const DEFAULT_CATEGORY: &str = "Main Course";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_available")]
    pub is_available: bool,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

/// Partial product update.
///
/// Only fields present in the request body end up in the store update.
/// The nullable columns use `Option<Option<_>>` so an explicit `null`
/// (`Some(None)`) clears the column while a missing key (`None`) leaves it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<Option<String>>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_available() -> bool {
    true
}

// Called only when the key exists, so `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl Product {
    pub fn from_new(id: i64, new: NewProduct, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            size: new.size,
            price: new.price,
            category: new.category,
            image_url: new.image_url,
            is_available: new.is_available,
            created_at,
        }
    }
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn apply(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(size) = &self.size {
            product.size = size.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(image_url) = &self.image_url {
            product.image_url = image_url.clone();
        }
        if let Some(is_available) = self.is_available {
            product.is_available = is_available;
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    fn biryani() -> Product {
        Product::from_new(
            1,
            NewProduct {
                name: "Hyderabadi Biryani".into(),
                description: Some("Dum cooked".into()),
                size: Some("Full".into()),
                price: dec!(320),
                category: DEFAULT_CATEGORY.into(),
                image_url: None,
                is_available: true,
            },
            Utc::now(),
        )
    }

    #[test]
    fn new_product_fills_defaults() {
        let new: NewProduct =
            serde_json::from_value(json!({ "name": "Raita", "price": 40 })).unwrap();
        assert_eq!(new.category, "Main Course");
        assert!(new.is_available);
        assert_eq!(new.description, None);
        assert_eq!(new.price, dec!(40));
    }

    #[test]
    fn new_product_requires_price() {
        assert!(serde_json::from_value::<NewProduct>(json!({ "name": "Raita" })).is_err());
    }

    #[test]
    fn new_product_serializes_price_as_number() {
        let new: NewProduct =
            serde_json::from_value(json!({ "name": "Raita", "price": 40.5 })).unwrap();
        let body = serde_json::to_value(&new).unwrap();
        assert_eq!(body["price"], json!(40.5));
    }

    #[test]
    fn patch_forwards_only_present_fields() {
        let patch: ProductPatch = serde_json::from_value(json!({ "price": 299.0 })).unwrap();
        assert!(!patch.is_empty());
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, json!({ "price": 299.0 }));
    }

    #[test]
    fn patch_keeps_explicit_null_for_nullable_columns() {
        let patch: ProductPatch =
            serde_json::from_value(json!({ "description": null, "name": null })).unwrap();
        assert_eq!(patch.description, Some(None));
        assert_eq!(patch.name, None);
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, json!({ "description": null }));
    }

    #[test]
    fn empty_patch_is_detected() {
        let patch: ProductPatch = serde_json::from_value(json!({})).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn apply_leaves_absent_fields_unchanged() {
        let mut product = biryani();
        let before = product.clone();
        let patch: ProductPatch =
            serde_json::from_value(json!({ "price": 350, "image_url": "https://cdn/b.png" }))
                .unwrap();

        patch.apply(&mut product);
        assert_eq!(product.price, dec!(350));
        assert_eq!(product.image_url.as_deref(), Some("https://cdn/b.png"));
        assert_eq!(product.name, before.name);
        assert_eq!(product.description, before.description);
        assert_eq!(product.size, before.size);
        assert_eq!(product.category, before.category);
        assert_eq!(product.is_available, before.is_available);
        assert_eq!(product.created_at, before.created_at);
    }
}
