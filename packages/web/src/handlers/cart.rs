//! Cart endpoints. `/add_to_cart` answers with JSON for the catalog page's script.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use axum::{Form, Json};
use market_api::models::CartLine;
use market_api::{auth, cart, Error, Role};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use super::{page_context, report};
use crate::app::AppState;
use crate::error::{status_for, AppError};
use crate::views;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddToCartForm {
    pub product_id: String,
    pub quantity: String,
}

/// JSON body of every `/add_to_cart` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

fn reply(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<MessageBody>) {
    (
        status,
        Json(MessageBody {
            message: message.into(),
        }),
    )
}

pub async fn add_to_cart(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> (StatusCode, Json<MessageBody>) {
    match reserve(&state, &session, &form).await {
        Ok(line) => reply(
            StatusCode::OK,
            format!("Added {} kg of {} to cart!", line.quantity, line.product_name),
        ),
        Err(Error::NotLoggedIn) => reply(
            StatusCode::FORBIDDEN,
            "You need to be logged in to add items to your cart.",
        ),
        Err(e) if e.is_user_facing() => reply(status_for(&e), e.to_string()),
        Err(e) => {
            tracing::error!(error = %e, "add to cart failed");
            reply(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong.")
        }
    }
}

async fn reserve(
    state: &AppState,
    session: &Session,
    form: &AddToCartForm,
) -> market_api::Result<CartLine> {
    let customer = auth::require_role(session, Role::Customer).await?;
    let product_id: i64 = form
        .product_id
        .trim()
        .parse()
        .map_err(|_| Error::ProductNotFound)?;
    let quantity: i64 = form
        .quantity
        .trim()
        .parse()
        .map_err(|_| Error::InvalidQuantity)?;
    cart::add_to_cart(&state.pool, customer.id, product_id, quantity).await
}

pub async fn view_cart(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let customer = auth::require_role(&session, Role::Customer).await?;
    let cart = cart::view_cart(&state.pool, customer.id).await?;
    Ok(views::cart(page_context(&session).await?, cart))
}

pub async fn delete_from_cart(
    State(state): State<AppState>,
    session: Session,
    Path(order_id): Path<i64>,
) -> Result<Redirect, AppError> {
    let customer = auth::require_role(&session, Role::Customer).await?;
    let result = cart::remove_from_cart(&state.pool, order_id, customer.id).await;
    report(&session, result, "Item deleted from cart successfully.", "/cart").await
}
