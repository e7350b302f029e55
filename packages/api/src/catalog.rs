//! # Catalog — farmers list produce, customers browse it
//!
//! Farmer-facing: [`list_own_products`], [`add_product`], [`delete_product`] and
//! [`restock_product`]. Deleting and restocking check that the product belongs to the
//! requesting farmer; the role alone is not enough.
//!
//! Customer-facing: [`browse_products`], optionally narrowed to one exact product name.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::{NewProduct, Product, ProductListing, Role};

/// Filter value that selects the whole catalog.
pub const ALL_PRODUCTS: &str = "all";

const LISTING_SELECT: &str = "SELECT products.id, products.farmer_id, products.name, products.price,
            products.quantity, products.image_url, users.name AS farmer_name
     FROM products JOIN users ON products.farmer_id = users.id";

/// The catalog as seen by a customer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub products: Vec<ProductListing>,
    /// Distinct product names, sorted, for the filter dropdown.
    pub names: Vec<String>,
}

/// Products listed by `farmer_id`, with the farmer's display name.
pub async fn list_own_products(pool: &SqlitePool, farmer_id: i64) -> Result<Vec<ProductListing>> {
    let sql = format!("{LISTING_SELECT} WHERE products.farmer_id = $1 ORDER BY products.id");
    Ok(sqlx::query_as(&sql).bind(farmer_id).fetch_all(pool).await?)
}

/// List a new product for `farmer_id`.
pub async fn add_product(pool: &SqlitePool, farmer_id: i64, new: &NewProduct) -> Result<Product> {
    let valid = new.validate()?;

    let product: Product = sqlx::query_as(
        "INSERT INTO products (farmer_id, name, price, quantity, image_url)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(farmer_id)
    .bind(&valid.name)
    .bind(valid.price)
    .bind(valid.quantity)
    .bind(&valid.image_url)
    .fetch_one(pool)
    .await?;

    info!(product_id = product.id, farmer_id, name = %product.name, "product added");
    Ok(product)
}

pub async fn get_product(pool: &SqlitePool, product_id: i64) -> Result<Product> {
    sqlx::query_as("SELECT * FROM products WHERE id = $1")
        .bind(product_id)
        .fetch_optional(pool)
        .await?
        .ok_or(Error::ProductNotFound)
}

/// Fetch a product and make sure `requester_id` is the farmer who owns it.
async fn owned_product(
    pool: &SqlitePool,
    product_id: i64,
    requester_id: i64,
    requester_role: Role,
) -> Result<Product> {
    if requester_role != Role::Farmer {
        return Err(Error::Forbidden);
    }
    let product = get_product(pool, product_id).await?;
    if product.farmer_id != requester_id {
        return Err(Error::Forbidden);
    }
    Ok(product)
}

/// Delete a product. Open cart lines for it are removed by the foreign key cascade.
pub async fn delete_product(
    pool: &SqlitePool,
    product_id: i64,
    requester_id: i64,
    requester_role: Role,
) -> Result<()> {
    owned_product(pool, product_id, requester_id, requester_role).await?;

    sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(product_id)
        .execute(pool)
        .await?;

    info!(product_id, farmer_id = requester_id, "product deleted");
    Ok(())
}

/// Add `amount` kilograms to a product's stock.
///
/// Stock on hand plus what sits reserved in carts must stay within `i64`, since removing
/// a cart line adds its quantity back. A restock that would break that is
/// [`Error::InvalidQuantity`].
pub async fn restock_product(
    pool: &SqlitePool,
    product_id: i64,
    farmer_id: i64,
    amount: i64,
) -> Result<Product> {
    if amount <= 0 {
        return Err(Error::InvalidQuantity);
    }
    owned_product(pool, product_id, farmer_id, Role::Farmer).await?;

    let product: Product = sqlx::query_as(
        "UPDATE products SET quantity = quantity + $1
         WHERE id = $2
           AND quantity + (SELECT COALESCE(SUM(quantity), 0) FROM orders WHERE product_id = $2)
               <= $3
         RETURNING *",
    )
    .bind(amount)
    .bind(product_id)
    .bind(i64::MAX - amount)
    .fetch_optional(pool)
    .await?
    .ok_or(Error::InvalidQuantity)?;

    info!(product_id, amount, quantity = product.quantity, "product restocked");
    Ok(product)
}

/// Every product, or only those named exactly `filter`.
///
/// `None`, an empty string and [`ALL_PRODUCTS`] all select the full catalog.
pub async fn browse_products(pool: &SqlitePool, filter: Option<&str>) -> Result<Catalog> {
    let filter = filter
        .map(str::trim)
        .filter(|f| !f.is_empty() && *f != ALL_PRODUCTS);

    let products: Vec<ProductListing> = match filter {
        Some(name) => {
            let sql = format!("{LISTING_SELECT} WHERE products.name = $1 ORDER BY products.id");
            sqlx::query_as(&sql).bind(name).fetch_all(pool).await?
        }
        None => {
            let sql = format!("{LISTING_SELECT} ORDER BY products.id");
            sqlx::query_as(&sql).fetch_all(pool).await?
        }
    };

    let names: Vec<(String,)> = sqlx::query_as("SELECT DISTINCT name FROM products ORDER BY name")
        .fetch_all(pool)
        .await?;

    Ok(Catalog {
        products,
        names: names.into_iter().map(|(n,)| n).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::register;
    use crate::db::connect_in_memory;

    async fn farmer(pool: &SqlitePool, username: &str) -> i64 {
        register(pool, Role::Farmer, username, username, "pw")
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_add_and_list_own_products() {
        let pool = connect_in_memory().await.unwrap();
        let ada = farmer(&pool, "ada").await;
        let bo = farmer(&pool, "bo").await;

        add_product(&pool, ada, &NewProduct::new("Tomato", 2.0, 20)).await.unwrap();
        add_product(&pool, bo, &NewProduct::new("Potato", 1.0, 50)).await.unwrap();

        let mine = list_own_products(&pool, ada).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].name, "Tomato");
        assert_eq!(mine[0].farmer_name, "ada");
        assert_eq!(mine[0].quantity, 20);
    }

    #[tokio::test]
    async fn test_add_product_reports_incomplete_input() {
        let pool = connect_in_memory().await.unwrap();
        let ada = farmer(&pool, "ada").await;

        let blank = NewProduct {
            name: Some("Tomato".into()),
            price: Some("".into()),
            quantity: Some("3".into()),
            image_url: None,
        };
        assert!(matches!(
            add_product(&pool, ada, &blank).await,
            Err(Error::IncompleteInput)
        ));
        assert!(list_own_products(&pool, ada).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_requires_owner() {
        let pool = connect_in_memory().await.unwrap();
        let ada = farmer(&pool, "ada").await;
        let bo = farmer(&pool, "bo").await;
        let tomato = add_product(&pool, ada, &NewProduct::new("Tomato", 2.0, 20))
            .await
            .unwrap();

        assert!(matches!(
            delete_product(&pool, tomato.id, bo, Role::Farmer).await,
            Err(Error::Forbidden)
        ));
        assert!(matches!(
            delete_product(&pool, tomato.id, ada, Role::Customer).await,
            Err(Error::Forbidden)
        ));
        assert!(get_product(&pool, tomato.id).await.is_ok());

        delete_product(&pool, tomato.id, ada, Role::Farmer).await.unwrap();
        assert!(matches!(
            get_product(&pool, tomato.id).await,
            Err(Error::ProductNotFound)
        ));
        assert!(matches!(
            delete_product(&pool, tomato.id, ada, Role::Farmer).await,
            Err(Error::ProductNotFound)
        ));
    }

    #[tokio::test]
    async fn test_restock() {
        let pool = connect_in_memory().await.unwrap();
        let ada = farmer(&pool, "ada").await;
        let bo = farmer(&pool, "bo").await;
        let tomato = add_product(&pool, ada, &NewProduct::new("Tomato", 2.0, 20))
            .await
            .unwrap();

        let restocked = restock_product(&pool, tomato.id, ada, 5).await.unwrap();
        assert_eq!(restocked.quantity, 25);

        assert!(matches!(
            restock_product(&pool, tomato.id, bo, 5).await,
            Err(Error::Forbidden)
        ));
        assert!(matches!(
            restock_product(&pool, tomato.id, ada, 0).await,
            Err(Error::InvalidQuantity)
        ));
        assert_eq!(get_product(&pool, tomato.id).await.unwrap().quantity, 25);
    }

    #[tokio::test]
    async fn test_browse_filters_by_exact_name() {
        let pool = connect_in_memory().await.unwrap();
        let ada = farmer(&pool, "ada").await;
        let bo = farmer(&pool, "bo").await;
        add_product(&pool, ada, &NewProduct::new("Tomato", 2.0, 20)).await.unwrap();
        add_product(&pool, bo, &NewProduct::new("Tomato", 2.5, 10)).await.unwrap();
        add_product(&pool, bo, &NewProduct::new("Cherry Tomato", 4.0, 5)).await.unwrap();

        let tomatoes = browse_products(&pool, Some("Tomato")).await.unwrap();
        assert_eq!(tomatoes.products.len(), 2);
        assert!(tomatoes.products.iter().all(|p| p.name == "Tomato"));
        assert_eq!(tomatoes.names, vec!["Cherry Tomato", "Tomato"]);

        for everything in [None, Some(ALL_PRODUCTS), Some("")] {
            let catalog = browse_products(&pool, everything).await.unwrap();
            assert_eq!(catalog.products.len(), 3);
        }

        let nothing = browse_products(&pool, Some("tomato")).await.unwrap();
        assert!(nothing.products.is_empty());
    }

    #[tokio::test]
    async fn test_restock_cannot_overflow_stock() {
        let pool = connect_in_memory().await.unwrap();
        let ada = farmer(&pool, "ada").await;
        let tomato = add_product(&pool, ada, &NewProduct::new("Tomato", 2.0, 20))
            .await
            .unwrap();

        assert!(matches!(
            restock_product(&pool, tomato.id, ada, i64::MAX).await,
            Err(Error::InvalidQuantity)
        ));
        assert!(matches!(
            restock_product(&pool, tomato.id, ada, i64::MAX - 19).await,
            Err(Error::InvalidQuantity)
        ));

        let full = restock_product(&pool, tomato.id, ada, i64::MAX - 20).await.unwrap();
        assert_eq!(full.quantity, i64::MAX);

        let catalog = browse_products(&pool, None).await.unwrap();
        assert_eq!(catalog.products[0].quantity, i64::MAX);
        assert_eq!(list_own_products(&pool, ada).await.unwrap()[0].quantity, i64::MAX);

        let fractional = sqlx::query("UPDATE products SET quantity = 9.5 WHERE id = $1")
            .bind(tomato.id)
            .execute(&pool)
            .await;
        assert!(fractional.is_err());
    }

    #[tokio::test]
    async fn test_restock_counts_reserved_stock() {
        let pool = connect_in_memory().await.unwrap();
        let ada = farmer(&pool, "ada").await;
        let cy = register(&pool, Role::Customer, "Cy", "cy", "pw").await.unwrap().id;
        let tomato = add_product(&pool, ada, &NewProduct::new("Tomato", 2.0, 20))
            .await
            .unwrap();
        crate::cart::add_to_cart(&pool, cy, tomato.id, 5).await.unwrap();

        // 15 on hand and 5 reserved: only i64::MAX - 20 more fits.
        assert!(matches!(
            restock_product(&pool, tomato.id, ada, i64::MAX - 15).await,
            Err(Error::InvalidQuantity)
        ));
        restock_product(&pool, tomato.id, ada, i64::MAX - 20).await.unwrap();
        assert_eq!(get_product(&pool, tomato.id).await.unwrap().quantity, i64::MAX - 5);
    }
}
