//! # Settled orders
//!
//! Checkout turns the cart into a [`Purchase`] with one [`PurchaseItem`] per cart line.
//! The purchase is persisted, and a [`CheckoutSnapshot`] copy of it is kept in the
//! session so the confirmation page can render without another query.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{Error, Result};

/// Delivery and payment details submitted with the checkout form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutDetails {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub payment_method: Option<String>,
}

impl CheckoutDetails {
    pub fn new(name: &str, address: &str, phone: &str, payment_method: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            address: Some(address.to_string()),
            phone: Some(phone.to_string()),
            payment_method: Some(payment_method.to_string()),
        }
    }

    /// Trimmed `(name, address, phone, payment_method)`, all required.
    pub(crate) fn validate(&self) -> Result<(String, String, String, String)> {
        let field = |f: &Option<String>| {
            f.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .ok_or(Error::IncompleteInput)
        };
        Ok((
            field(&self.name)?,
            field(&self.address)?,
            field(&self.phone)?,
            field(&self.payment_method)?,
        ))
    }
}

/// A row from the `purchases` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Purchase {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub payment_method: String,
    pub total: f64,
    pub placed_at: DateTime<Utc>,
    #[sqlx(skip)]
    pub items: Vec<PurchaseItem>,
}

impl Purchase {
    /// `placed_at` as shown on the order history page.
    pub fn placed_on(&self) -> String {
        self.placed_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// One settled line of a purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PurchaseItem {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub total: f64,
}

/// Frozen copy of a settled cart, stored in the session after checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSnapshot {
    pub purchase_id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub payment_method: String,
    pub total: f64,
    pub items: Vec<PurchaseItem>,
}

impl From<Purchase> for CheckoutSnapshot {
    fn from(p: Purchase) -> Self {
        Self {
            purchase_id: p.id,
            name: p.name,
            address: p.address,
            phone: p.phone,
            payment_method: p.payment_method,
            total: p.total,
            items: p.items,
        }
    }
}
