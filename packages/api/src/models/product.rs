//! Product rows and the form payload for listing new produce.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{Error, Result};

/// A product row from the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub farmer_id: i64,
    pub name: String,
    pub price: f64,
    /// Stock on hand, in kilograms.
    pub quantity: i64,
    pub image_url: Option<String>,
}

/// A product joined with the display name of the farmer who listed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProductListing {
    pub id: i64,
    pub farmer_id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub image_url: Option<String>,
    pub farmer_name: String,
}

/// Raw "add product" form fields, exactly as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProduct {
    pub name: Option<String>,
    pub price: Option<String>,
    pub quantity: Option<String>,
    pub image_url: Option<String>,
}

/// A [`NewProduct`] that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ValidProduct {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub image_url: Option<String>,
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl NewProduct {
    pub fn new(name: &str, price: f64, quantity: i64) -> Self {
        Self {
            name: Some(name.to_string()),
            price: Some(price.to_string()),
            quantity: Some(quantity.to_string()),
            image_url: None,
        }
    }

    pub(crate) fn validate(&self) -> Result<ValidProduct> {
        let (Some(name), Some(price), Some(quantity)) = (
            non_blank(&self.name),
            non_blank(&self.price),
            non_blank(&self.quantity),
        ) else {
            return Err(Error::IncompleteInput);
        };

        let price: f64 = price.parse().map_err(|_| Error::InvalidPrice)?;
        if !price.is_finite() || price <= 0.0 {
            return Err(Error::InvalidPrice);
        }

        let quantity: i64 = quantity.parse().map_err(|_| Error::InvalidQuantity)?;
        if quantity < 0 {
            return Err(Error::InvalidQuantity);
        }

        Ok(ValidProduct {
            name: name.to_string(),
            price,
            quantity,
            image_url: non_blank(&self.image_url).map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, price: &str, quantity: &str) -> NewProduct {
        NewProduct {
            name: Some(name.into()),
            price: Some(price.into()),
            quantity: Some(quantity.into()),
            image_url: Some("  ".into()),
        }
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        let valid = form(" Tomato ", "2.5", "20").validate().unwrap();
        assert_eq!(valid.name, "Tomato");
        assert_eq!(valid.price, 2.5);
        assert_eq!(valid.quantity, 20);
        assert_eq!(valid.image_url, None);
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        assert!(matches!(
            form("", "2.5", "20").validate(),
            Err(Error::IncompleteInput)
        ));
        assert!(matches!(
            NewProduct::default().validate(),
            Err(Error::IncompleteInput)
        ));
    }

    #[test]
    fn test_validate_rejects_bad_numbers() {
        assert!(matches!(
            form("Tomato", "0", "20").validate(),
            Err(Error::InvalidPrice)
        ));
        assert!(matches!(
            form("Tomato", "cheap", "20").validate(),
            Err(Error::InvalidPrice)
        ));
        assert!(matches!(
            form("Tomato", "2", "-1").validate(),
            Err(Error::InvalidQuantity)
        ));
        assert!(matches!(
            form("Tomato", "2", "1.5").validate(),
            Err(Error::InvalidQuantity)
        ));
    }
}
