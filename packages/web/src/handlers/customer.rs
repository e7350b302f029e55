//! Customer catalog with the product-name filter.

use axum::extract::{Query, State};
use axum::response::Html;
use axum::Form;
use market_api::catalog::{self, ALL_PRODUCTS};
use market_api::{auth, Role};
use serde::Deserialize;
use tower_sessions::Session;

use super::page_context;
use crate::app::AppState;
use crate::error::AppError;
use crate::views;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FilterForm {
    pub filter_category: String,
}

pub async fn browse(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<FilterForm>,
) -> Result<Html<String>, AppError> {
    show(&state, &session, filter).await
}

pub async fn filter(
    State(state): State<AppState>,
    session: Session,
    Form(filter): Form<FilterForm>,
) -> Result<Html<String>, AppError> {
    show(&state, &session, filter).await
}

async fn show(
    state: &AppState,
    session: &Session,
    filter: FilterForm,
) -> Result<Html<String>, AppError> {
    auth::require_role(session, Role::Customer).await?;

    let selected = match filter.filter_category.trim() {
        "" => ALL_PRODUCTS.to_string(),
        name => name.to_string(),
    };
    let products = catalog::browse_products(&state.pool, Some(&selected)).await?;
    Ok(views::customer(page_context(session).await?, products, selected))
}
