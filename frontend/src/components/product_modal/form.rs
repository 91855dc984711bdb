//! Form state of the product modal.
//!
//! Inputs are kept as raw strings while the user types and only turned into a
//! [`ProductPayload`] by [`ProductForm::validate`]. The server validates again;
//! the form is stricter and wants a price above zero.

use common::model::numeric::Numeric;
use common::model::product::{Product, ProductPayload};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Category,
    Description,
    Price,
    Stock,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Заполните все поля")]
    Incomplete,

    #[error("Цена и количество должны быть числами")]
    NotANumber,

    #[error("Цена должна быть больше 0, количество не может быть отрицательным")]
    OutOfRange,

    #[error("Количество должно быть целым числом")]
    FractionalStock,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: String,
    pub stock: String,
}

impl ProductForm {
    /// Empty for a new product, prefilled when editing.
    pub fn from_product(product: Option<&Product>) -> Self {
        match product {
            Some(p) => Self {
                name: p.name.clone(),
                category: p.category.clone(),
                description: p.description.clone(),
                price: p.price.to_string(),
                stock: p.stock.to_string(),
            },
            None => Self::default(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Category => &self.category,
            Field::Description => &self.description,
            Field::Price => &self.price,
            Field::Stock => &self.stock,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Category => &mut self.category,
            Field::Description => &mut self.description,
            Field::Price => &mut self.price,
            Field::Stock => &mut self.stock,
        };
        *slot = value;
    }

    /// Builds the request body. Text fields are trimmed, numbers are sent as
    /// numbers.
    pub fn validate(&self) -> Result<ProductPayload, FormError> {
        let name = self.name.trim();
        let category = self.category.trim();
        let description = self.description.trim();
        let price = self.price.trim();
        let stock = self.stock.trim();

        if [name, category, description, price, stock]
            .iter()
            .any(|s| s.is_empty())
        {
            return Err(FormError::Incomplete);
        }

        let price: f64 = parse_number(price)?;
        let stock: f64 = parse_number(stock)?;
        if price <= 0.0 || stock < 0.0 {
            return Err(FormError::OutOfRange);
        }
        if stock.fract() != 0.0 || stock > f64::from(u32::MAX) {
            return Err(FormError::FractionalStock);
        }

        Ok(ProductPayload {
            name: Some(name.to_string()),
            category: Some(category.to_string()),
            description: Some(description.to_string()),
            price: Some(Numeric::from(price)),
            stock: Some(Numeric::from(stock as u32)),
        })
    }
}

/// Accepts a decimal comma as well, since that is what a Russian keyboard types.
fn parse_number(raw: &str) -> Result<f64, FormError> {
    raw.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or(FormError::NotANumber)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductForm {
        ProductForm {
            name: "  Мышь Logitech ".to_string(),
            category: "Аксессуары".to_string(),
            description: "Беспроводная".to_string(),
            price: "2500".to_string(),
            stock: "12".to_string(),
        }
    }

    #[test]
    fn valid_form_becomes_a_trimmed_payload() {
        let payload = filled().validate().unwrap();

        assert_eq!(payload.name.as_deref(), Some("Мышь Logitech"));
        assert_eq!(payload.price, Some(Numeric::Number(2500.0)));
        assert_eq!(payload.stock, Some(Numeric::Number(12.0)));
    }

    #[test]
    fn blank_field_is_incomplete() {
        let mut form = filled();
        form.set(Field::Category, "   ".to_string());

        assert_eq!(form.validate(), Err(FormError::Incomplete));
        assert_eq!(FormError::Incomplete.to_string(), "Заполните все поля");
    }

    #[test]
    fn price_must_be_positive() {
        let mut form = filled();
        form.set(Field::Price, "0".to_string());

        assert_eq!(form.validate(), Err(FormError::OutOfRange));
    }

    #[test]
    fn zero_stock_is_allowed_negative_is_not() {
        let mut form = filled();
        form.set(Field::Stock, "0".to_string());
        assert!(form.validate().is_ok());

        form.set(Field::Stock, "-1".to_string());
        assert_eq!(form.validate(), Err(FormError::OutOfRange));
    }

    #[test]
    fn stock_must_be_whole() {
        let mut form = filled();
        form.set(Field::Stock, "1.5".to_string());

        assert_eq!(form.validate(), Err(FormError::FractionalStock));
    }

    #[test]
    fn text_in_number_fields_is_rejected() {
        let mut form = filled();
        form.set(Field::Price, "дорого".to_string());

        assert_eq!(form.validate(), Err(FormError::NotANumber));
    }

    #[test]
    fn decimal_comma_is_accepted() {
        let mut form = filled();
        form.set(Field::Price, "19,5".to_string());

        assert_eq!(form.validate().unwrap().price, Some(Numeric::Number(19.5)));
    }

    #[test]
    fn editing_prefills_every_field() {
        let product = Product {
            id: "abc123".to_string(),
            name: "Ноутбук Asus".to_string(),
            category: "Ноутбуки".to_string(),
            description: "15.6\"".to_string(),
            price: 55000.0,
            stock: 5,
        };
        let form = ProductForm::from_product(Some(&product));

        assert_eq!(form.get(Field::Name), "Ноутбук Asus");
        assert_eq!(form.get(Field::Price), "55000");
        assert_eq!(form.get(Field::Stock), "5");
    }
}
