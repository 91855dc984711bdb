//! Request payload validation.
//!
//! Create requests must carry every field of the record; patch requests may
//! carry any subset. In both cases the fields that are present go through the
//! same rules: text is trimmed and must not end up empty, blank numbers count
//! as missing, numbers are cast
//! with [`Numeric::to_f64`], prices must be non-negative and stock must be a
//! non-negative whole number. Validation never touches the store, so a
//! rejected request leaves it as it was.

use thiserror::Error;

use crate::messages;
use crate::model::item::{ItemPatch, ItemPayload, NewItem};
use crate::model::numeric::Numeric;
use crate::model::product::{NewProduct, ProductPatch, ProductPayload};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A create request lacks a field, or a required field is blank.
    #[error("{}", messages::ALL_FIELDS_REQUIRED)]
    MissingFields,

    /// A patch tries to blank out a text field.
    #[error("Поле {0} не может быть пустым")]
    EmptyField(&'static str),

    #[error("Некорректное значение поля {0}")]
    InvalidNumber(&'static str),
}

impl ProductPayload {
    pub fn into_new_product(self) -> Result<NewProduct, ValidationError> {
        let (Some(name), Some(category), Some(description), Some(price), Some(stock)) = (
            self.name,
            self.category,
            self.description,
            self.price,
            self.stock,
        ) else {
            return Err(ValidationError::MissingFields);
        };
        if price.is_blank() || stock.is_blank() {
            return Err(ValidationError::MissingFields);
        }

        Ok(NewProduct {
            name: required_text(&name)?,
            category: required_text(&category)?,
            description: required_text(&description)?,
            price: price_value("price", &price)?,
            stock: stock_value("stock", &stock)?,
        })
    }

    pub fn into_patch(self) -> Result<ProductPatch, ValidationError> {
        Ok(ProductPatch {
            name: self.name.map(|v| patch_text("name", &v)).transpose()?,
            category: self.category.map(|v| patch_text("category", &v)).transpose()?,
            description: self
                .description
                .map(|v| patch_text("description", &v))
                .transpose()?,
            price: self.price.map(|v| price_value("price", &v)).transpose()?,
            stock: self.stock.map(|v| stock_value("stock", &v)).transpose()?,
        })
    }
}

impl ItemPayload {
    pub fn into_new_item(self) -> Result<NewItem, ValidationError> {
        let (Some(name), Some(price)) = (self.name, self.price) else {
            return Err(ValidationError::MissingFields);
        };
        if price.is_blank() {
            return Err(ValidationError::MissingFields);
        }

        Ok(NewItem {
            name: required_text(&name)?,
            price: price_value("price", &price)?,
        })
    }

    pub fn into_patch(self) -> Result<ItemPatch, ValidationError> {
        Ok(ItemPatch {
            name: self.name.map(|v| patch_text("name", &v)).transpose()?,
            price: self.price.map(|v| price_value("price", &v)).transpose()?,
        })
    }
}

fn required_text(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(trimmed.to_string())
}

fn patch_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

fn price_value(field: &'static str, value: &Numeric) -> Result<f64, ValidationError> {
    match value.to_f64() {
        Some(price) if price >= 0.0 => Ok(price),
        _ => Err(ValidationError::InvalidNumber(field)),
    }
}

fn stock_value(field: &'static str, value: &Numeric) -> Result<u32, ValidationError> {
    match value.to_f64() {
        Some(stock) if stock >= 0.0 && stock.fract() == 0.0 && stock <= f64::from(u32::MAX) => {
            Ok(stock as u32)
        }
        _ => Err(ValidationError::InvalidNumber(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> ProductPayload {
        ProductPayload {
            name: Some("  Тест ".to_string()),
            category: Some("Тест".to_string()),
            description: Some("Тест".to_string()),
            price: Some(Numeric::from("100")),
            stock: Some(Numeric::from(5u32)),
        }
    }

    #[test]
    fn create_trims_text_and_casts_numbers() {
        let product = full_payload().into_new_product().unwrap();

        assert_eq!(product.name, "Тест");
        assert_eq!(product.price, 100.0);
        assert_eq!(product.stock, 5);
    }

    #[test]
    fn create_requires_every_field() {
        let payload = ProductPayload {
            category: None,
            ..full_payload()
        };

        let err = payload.into_new_product().unwrap_err();
        assert_eq!(err, ValidationError::MissingFields);
        assert_eq!(err.to_string(), "Все поля обязательны");
    }

    #[test]
    fn create_rejects_blank_text() {
        let payload = ProductPayload {
            description: Some("   ".to_string()),
            ..full_payload()
        };

        assert_eq!(
            payload.into_new_product(),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn create_rejects_bad_numbers() {
        let negative_price = ProductPayload {
            price: Some(Numeric::from(-1.0)),
            ..full_payload()
        };
        let fractional_stock = ProductPayload {
            stock: Some(Numeric::from(2.5)),
            ..full_payload()
        };
        let text_stock = ProductPayload {
            stock: Some(Numeric::from("много")),
            ..full_payload()
        };

        assert_eq!(
            negative_price.into_new_product(),
            Err(ValidationError::InvalidNumber("price"))
        );
        assert_eq!(
            fractional_stock.into_new_product(),
            Err(ValidationError::InvalidNumber("stock"))
        );
        assert_eq!(
            text_stock.into_new_product(),
            Err(ValidationError::InvalidNumber("stock"))
        );
    }

    #[test]
    fn blank_numbers_are_missing_not_zero() {
        let blank_stock = ProductPayload {
            stock: Some(Numeric::from("")),
            ..full_payload()
        };
        let blank_price = ProductPayload {
            price: Some(Numeric::from("  ")),
            ..full_payload()
        };
        let blank_item_price = ItemPayload {
            name: Some("Кофе".to_string()),
            price: Some(Numeric::from("")),
        };

        assert_eq!(
            blank_stock.into_new_product(),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            blank_price.into_new_product(),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            blank_item_price.into_new_item(),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn patch_rejects_blank_numbers() {
        let payload = ProductPayload {
            stock: Some(Numeric::from("")),
            ..Default::default()
        };

        assert_eq!(
            payload.into_patch(),
            Err(ValidationError::InvalidNumber("stock"))
        );
    }

    #[test]
    fn patch_keeps_absent_fields_empty() {
        let patch = ProductPayload {
            stock: Some(Numeric::from(3u32)),
            ..Default::default()
        }
        .into_patch()
        .unwrap();

        assert_eq!(
            patch,
            ProductPatch {
                stock: Some(3),
                ..Default::default()
            }
        );
    }

    #[test]
    fn patch_rejects_blanking_a_field() {
        let payload = ProductPayload {
            name: Some(" ".to_string()),
            ..Default::default()
        };

        assert_eq!(
            payload.into_patch(),
            Err(ValidationError::EmptyField("name"))
        );
    }

    #[test]
    fn item_requires_name_and_price() {
        let missing_price = ItemPayload {
            name: Some("Кофе".to_string()),
            price: None,
        };
        let ok = ItemPayload {
            name: Some(" Кофе ".to_string()),
            price: Some(Numeric::from(450u32)),
        };

        assert_eq!(
            missing_price.into_new_item(),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            ok.into_new_item().unwrap(),
            NewItem {
                name: "Кофе".to_string(),
                price: 450.0
            }
        );
    }
}
