//! # Cart — reserving stock as orders
//!
//! Adding to the cart reserves stock immediately: the product's quantity is decremented
//! and the order line inserted in one transaction. The decrement is guarded with
//! `quantity >= ?`, so two customers racing for the last kilograms cannot both win.
//! Removing a line gives the stock back, also in one transaction.
//!
//! Both transactions open with a write statement. SQLite only waits out its busy timeout
//! for a transaction that does not yet hold a read snapshot, so reading first would make
//! concurrent requests fail with `database is locked`.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{Cart, CartLine, Order, Product};

/// Reserve `quantity` kilograms of a product for `customer_id`.
pub async fn add_to_cart(
    pool: &SqlitePool,
    customer_id: i64,
    product_id: i64,
    quantity: i64,
) -> Result<CartLine> {
    if quantity <= 0 {
        return Err(Error::InvalidQuantity);
    }

    let mut tx = pool.begin().await?;

    // Write first; see the module docs.
    let reserved: Option<Product> = sqlx::query_as(
        "UPDATE products SET quantity = quantity - $1
         WHERE id = $2 AND quantity >= $1
         RETURNING *",
    )
    .bind(quantity)
    .bind(product_id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(product) = reserved else {
        let current: Option<Product> = sqlx::query_as("SELECT * FROM products WHERE id = $1")
            .bind(product_id)
            .fetch_optional(&mut *tx)
            .await?;
        return Err(match current {
            Some(product) => {
                debug!(product_id, quantity, available = product.quantity, "not enough stock");
                Error::InsufficientStock {
                    product: product.name,
                    available: product.quantity,
                }
            }
            None => Error::ProductNotFound,
        });
    };

    let total = product.price * quantity as f64;
    let order: Order = sqlx::query_as(
        "INSERT INTO orders (user_id, product_id, quantity, total)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(customer_id)
    .bind(product_id)
    .bind(quantity)
    .bind(total)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    info!(order_id = order.id, customer_id, product_id, quantity, total, "added to cart");
    Ok(CartLine {
        id: order.id,
        product_id,
        product_name: product.name,
        quantity,
        total,
    })
}

/// Drop a cart line and return its stock to the product.
///
/// Lines that do not exist, or belong to another customer, are [`Error::OrderNotFound`].
pub async fn remove_from_cart(pool: &SqlitePool, order_id: i64, customer_id: i64) -> Result<Order> {
    let mut tx = pool.begin().await?;

    let order: Order =
        sqlx::query_as("DELETE FROM orders WHERE id = $1 AND user_id = $2 RETURNING *")
            .bind(order_id)
            .bind(customer_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(Error::OrderNotFound)?;

    sqlx::query("UPDATE products SET quantity = quantity + $1 WHERE id = $2")
        .bind(order.quantity)
        .bind(order.product_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    info!(order_id, customer_id, quantity = order.quantity, "removed from cart");
    Ok(order)
}

/// Every open line for `customer_id`, with the bill total.
pub async fn view_cart(pool: &SqlitePool, customer_id: i64) -> Result<Cart> {
    let lines: Vec<CartLine> = sqlx::query_as(
        "SELECT orders.id, orders.product_id, products.name AS product_name,
                orders.quantity, orders.total
         FROM orders JOIN products ON orders.product_id = products.id
         WHERE orders.user_id = $1
         ORDER BY orders.id",
    )
    .bind(customer_id)
    .fetch_all(pool)
    .await?;

    Ok(Cart::from_lines(lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::register;
    use crate::catalog::{add_product, delete_product, get_product};
    use crate::db::connect_in_memory;
    use crate::models::{NewProduct, Role};

    struct Fixture {
        pool: SqlitePool,
        farmer: i64,
        customer: i64,
        product: i64,
    }

    async fn fixture(stock: i64) -> Fixture {
        let pool = connect_in_memory().await.unwrap();
        let farmer = register(&pool, Role::Farmer, "Ada", "ada", "pw").await.unwrap().id;
        let customer = register(&pool, Role::Customer, "Cy", "cy", "pw").await.unwrap().id;
        let product = add_product(&pool, farmer, &NewProduct::new("Carrot", 1.5, stock))
            .await
            .unwrap()
            .id;
        Fixture {
            pool,
            farmer,
            customer,
            product,
        }
    }

    async fn stock(f: &Fixture) -> i64 {
        get_product(&f.pool, f.product).await.unwrap().quantity
    }

    #[tokio::test]
    async fn test_stock_boundaries() {
        let f = fixture(10).await;

        let err = add_to_cart(&f.pool, f.customer, f.product, 11).await.unwrap_err();
        assert_eq!(err.to_string(), "Insufficient stock for Carrot. Available: 10 kg.");
        assert_eq!(stock(&f).await, 10);

        let line = add_to_cart(&f.pool, f.customer, f.product, 10).await.unwrap();
        assert_eq!(line.total, 15.0);
        assert_eq!(stock(&f).await, 0);

        assert!(matches!(
            add_to_cart(&f.pool, f.customer, f.product, 1).await,
            Err(Error::InsufficientStock { available: 0, .. })
        ));
    }

    #[tokio::test]
    async fn test_unknown_product_and_bad_quantity() {
        let f = fixture(10).await;
        assert!(matches!(
            add_to_cart(&f.pool, f.customer, f.product + 100, 1).await,
            Err(Error::ProductNotFound)
        ));
        assert!(matches!(
            add_to_cart(&f.pool, f.customer, f.product, 0).await,
            Err(Error::InvalidQuantity)
        ));
        assert!(view_cart(&f.pool, f.customer).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_restores_stock() {
        let f = fixture(10).await;
        let before = stock(&f).await;

        let line = add_to_cart(&f.pool, f.customer, f.product, 4).await.unwrap();
        assert_eq!(stock(&f).await, 6);

        let removed = remove_from_cart(&f.pool, line.id, f.customer).await.unwrap();
        assert_eq!(removed.quantity, 4);
        assert_eq!(stock(&f).await, before);

        add_to_cart(&f.pool, f.customer, f.product, 4).await.unwrap();
        assert_eq!(stock(&f).await, 6);
    }

    #[tokio::test]
    async fn test_remove_unknown_or_foreign_line() {
        let f = fixture(10).await;
        let line = add_to_cart(&f.pool, f.customer, f.product, 2).await.unwrap();

        assert!(matches!(
            remove_from_cart(&f.pool, line.id + 1, f.customer).await,
            Err(Error::OrderNotFound)
        ));
        assert!(matches!(
            remove_from_cart(&f.pool, line.id, f.farmer).await,
            Err(Error::OrderNotFound)
        ));
        assert_eq!(stock(&f).await, 8);
    }

    #[tokio::test]
    async fn test_view_cart_totals_lines() {
        let f = fixture(10).await;
        add_to_cart(&f.pool, f.customer, f.product, 2).await.unwrap();
        add_to_cart(&f.pool, f.customer, f.product, 3).await.unwrap();

        let cart = view_cart(&f.pool, f.customer).await.unwrap();
        assert_eq!(cart.lines.len(), 2);
        assert_eq!(cart.lines[0].product_name, "Carrot");
        assert_eq!(cart.total, 7.5);
    }

    #[tokio::test]
    async fn test_deleting_product_clears_its_cart_lines() {
        let f = fixture(10).await;
        add_to_cart(&f.pool, f.customer, f.product, 2).await.unwrap();

        delete_product(&f.pool, f.product, f.farmer, Role::Farmer).await.unwrap();
        assert!(view_cart(&f.pool, f.customer).await.unwrap().is_empty());
    }
}
