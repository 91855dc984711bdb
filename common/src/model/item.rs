use serde::{Deserialize, Serialize};

use crate::model::numeric::{serialize_number, Numeric};

/// A record of the minimal `/items` variant: a name and a price, keyed by the
/// epoch millisecond at which it was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    #[serde(serialize_with = "serialize_number")]
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
}

impl Item {
    pub fn from_new(id: u64, new: NewItem) -> Self {
        Self {
            id,
            name: new.name,
            price: new.price,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Numeric>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl ItemPatch {
    pub fn apply(&self, item: &mut Item) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(price) = self.price {
            item.price = price;
        }
    }
}
