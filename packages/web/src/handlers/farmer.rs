//! Farmer dashboard: list, add, delete and restock produce.

use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use market_api::models::NewProduct;
use market_api::{auth, catalog, Error, Role};
use serde::Deserialize;
use tower_sessions::Session;

use super::{page_context, report};
use crate::app::AppState;
use crate::error::AppError;
use crate::views;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RestockForm {
    pub amount: String,
}

pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let farmer = auth::require_role(&session, Role::Farmer).await?;
    let products = catalog::list_own_products(&state.pool, farmer.id).await?;
    Ok(views::farmer(page_context(&session).await?, products))
}

pub async fn add_product(
    State(state): State<AppState>,
    session: Session,
    Form(product): Form<NewProduct>,
) -> Result<Redirect, AppError> {
    let farmer = auth::require_role(&session, Role::Farmer).await?;
    let result = catalog::add_product(&state.pool, farmer.id, &product).await;
    report(&session, result, "Product added successfully.", "/farmer").await
}

pub async fn delete_product(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<i64>,
) -> Result<Redirect, AppError> {
    let farmer = auth::require_role(&session, Role::Farmer).await?;
    let result = catalog::delete_product(&state.pool, product_id, farmer.id, farmer.role).await;
    report(&session, result, "Product deleted successfully.", "/farmer").await
}

pub async fn restock_product(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<i64>,
    Form(form): Form<RestockForm>,
) -> Result<Redirect, AppError> {
    let farmer = auth::require_role(&session, Role::Farmer).await?;
    let result = match form.amount.trim().parse::<i64>() {
        Ok(amount) => catalog::restock_product(&state.pool, product_id, farmer.id, amount).await,
        Err(_) => Err(Error::InvalidQuantity),
    };
    report(&session, result, "Product restocked.", "/farmer").await
}
