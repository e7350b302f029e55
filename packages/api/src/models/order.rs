//! Cart lines. An [`Order`] row is one line in a customer's cart.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `orders` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    /// Price times quantity, fixed when the line was added.
    pub total: f64,
}

/// An order joined with its product name, as shown in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CartLine {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub total: f64,
}

/// A customer's cart: every open line plus the bill total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
    pub total: f64,
}

impl Cart {
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let total = lines.iter().map(|l| l.total).sum();
        Self { lines, total }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
