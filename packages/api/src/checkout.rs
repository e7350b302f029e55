//! # Checkout — settling a cart
//!
//! A customer's session moves through three states:
//!
//! ```text
//! Cart (open order lines) --process_checkout--> Settled (snapshot in session)
//! ```
//!
//! [`process_checkout`] deletes the cart lines, records them as a [`Purchase`] with one
//! item per line, and stores a [`CheckoutSnapshot`] in the session for [`view_checkout`].
//! The purchase row is the durable record; the snapshot only drives the confirmation page.

use chrono::Utc;
use sqlx::SqlitePool;
use tower_sessions::Session;
use tracing::{info, warn};

use crate::auth::{checkout_snapshot, store_checkout};
use crate::error::{Error, Result};
use crate::models::{CartLine, CheckoutDetails, CheckoutSnapshot, Purchase, PurchaseItem};

/// Settle every open cart line of `customer_id`.
///
/// An empty cart fails with [`Error::EmptyCart`] and leaves the session untouched. A
/// session that cannot be written after the purchase committed is only logged; the
/// purchase still shows up in [`purchase_history`].
pub async fn process_checkout(
    pool: &SqlitePool,
    session: &Session,
    customer_id: i64,
    details: &CheckoutDetails,
) -> Result<CheckoutSnapshot> {
    let mut tx = pool.begin().await?;

    // Clearing the cart is the first statement, so the transaction takes the write lock
    // before it reads. An error further down rolls the delete back.
    let mut lines: Vec<CartLine> = sqlx::query_as(
        "DELETE FROM orders WHERE user_id = $1
         RETURNING id, product_id,
                   (SELECT name FROM products WHERE products.id = orders.product_id) AS product_name,
                   quantity, total",
    )
    .bind(customer_id)
    .fetch_all(&mut *tx)
    .await?;
    lines.sort_by_key(|line| line.id);

    if lines.is_empty() {
        return Err(Error::EmptyCart);
    }

    let (name, address, phone, payment_method) = details.validate()?;
    let total: f64 = lines.iter().map(|l| l.total).sum();

    let mut purchase: Purchase = sqlx::query_as(
        "INSERT INTO purchases (user_id, name, address, phone, payment_method, total, placed_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
    )
    .bind(customer_id)
    .bind(&name)
    .bind(&address)
    .bind(&phone)
    .bind(&payment_method)
    .bind(total)
    .bind(Utc::now())
    .fetch_one(&mut *tx)
    .await?;

    for line in &lines {
        sqlx::query(
            "INSERT INTO purchase_items (purchase_id, product_id, product_name, quantity, total)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(purchase.id)
        .bind(line.product_id)
        .bind(&line.product_name)
        .bind(line.quantity)
        .bind(line.total)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    purchase.items = lines
        .into_iter()
        .map(|l| PurchaseItem {
            product_id: l.product_id,
            product_name: l.product_name,
            quantity: l.quantity,
            total: l.total,
        })
        .collect();

    info!(
        purchase_id = purchase.id,
        customer_id,
        items = purchase.items.len(),
        total,
        "checkout complete"
    );

    let snapshot = CheckoutSnapshot::from(purchase);
    // Already committed; a lost snapshot only costs the confirmation page.
    if let Err(e) = store_checkout(session, &snapshot).await {
        warn!(purchase_id = snapshot.purchase_id, error = %e, "could not store checkout snapshot");
    }
    Ok(snapshot)
}

/// The checkout most recently settled in this session.
pub async fn view_checkout(session: &Session) -> Result<CheckoutSnapshot> {
    checkout_snapshot(session).await
}

/// Every purchase of `customer_id`, newest first.
pub async fn purchase_history(pool: &SqlitePool, customer_id: i64) -> Result<Vec<Purchase>> {
    let mut purchases: Vec<Purchase> =
        sqlx::query_as("SELECT * FROM purchases WHERE user_id = $1 ORDER BY id DESC")
            .bind(customer_id)
            .fetch_all(pool)
            .await?;

    for purchase in &mut purchases {
        purchase.items = sqlx::query_as(
            "SELECT product_id, product_name, quantity, total
             FROM purchase_items WHERE purchase_id = $1 ORDER BY id",
        )
        .bind(purchase.id)
        .fetch_all(pool)
        .await?;
    }

    Ok(purchases)
}
