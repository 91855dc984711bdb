use serde::{Deserialize, Serialize};

use crate::model::numeric::{serialize_number, Numeric};

/// A catalogue entry of the full product variant (`/api/products`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Product {
    /// Random six character alphanumeric id, unique within the store.
    #[cfg_attr(feature = "openapi", schema(example = "abc123"))]
    pub id: String,
    #[cfg_attr(feature = "openapi", schema(example = "Ноутбук Asus"))]
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(example = "Ноутбуки"))]
    pub category: String,
    #[cfg_attr(feature = "openapi", schema(example = "15.6\", 8GB RAM, 512GB SSD"))]
    pub description: String,
    /// Price in roubles.
    #[serde(serialize_with = "serialize_number")]
    #[cfg_attr(feature = "openapi", schema(example = 55000))]
    pub price: f64,
    /// Units in stock.
    #[cfg_attr(feature = "openapi", schema(example = 5))]
    pub stock: u32,
}

impl Product {
    pub fn from_new(id: String, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            category: new.category,
            description: new.description,
            price: new.price,
            stock: new.stock,
        }
    }
}

/// A validated product without an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
}

/// Body of `POST` and `PATCH` on `/api/products`. Every field is optional on
/// the wire; which ones are required depends on the operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProductPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<f64>, example = 9999))]
    pub price: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<u32>, example = 10))]
    pub stock: Option<Numeric>,
}

/// Partial update: `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u32>,
}

impl ProductPatch {
    pub fn apply(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        Product {
            id: "abc123".to_string(),
            name: "Ноутбук Asus".to_string(),
            category: "Ноутбуки".to_string(),
            description: "15.6\", 8GB RAM, 512GB SSD".to_string(),
            price: 55000.0,
            stock: 5,
        }
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let mut product = laptop();
        let patch = ProductPatch {
            stock: Some(3),
            ..Default::default()
        };

        patch.apply(&mut product);

        assert_eq!(product.stock, 3);
        assert_eq!(
            Product {
                stock: 5,
                ..product.clone()
            },
            laptop()
        );
    }

    #[test]
    fn applying_a_patch_twice_is_idempotent() {
        let patch = ProductPatch {
            name: Some("Ноутбук HP".to_string()),
            price: Some(72000.0),
            ..Default::default()
        };
        let mut once = laptop();
        patch.apply(&mut once);
        let mut twice = once.clone();
        patch.apply(&mut twice);

        assert_eq!(once, twice);
    }

    #[test]
    fn payload_omits_absent_fields() {
        let payload = ProductPayload {
            stock: Some(Numeric::from(3u32)),
            ..Default::default()
        };

        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"stock":3}"#);
    }

    #[test]
    fn product_serializes_whole_price_as_integer() {
        let json = serde_json::to_value(laptop()).unwrap();
        assert_eq!(json["price"], serde_json::json!(55000));
        assert_eq!(json["stock"], serde_json::json!(5));
    }
}
