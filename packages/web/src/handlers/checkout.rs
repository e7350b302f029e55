//! Checkout, the confirmation page and purchase history.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use market_api::models::CheckoutDetails;
use market_api::{auth, checkout, Role};
use tower_sessions::Session;

use super::{flash_redirect, page_context};
use crate::app::AppState;
use crate::error::AppError;
use crate::views;

pub async fn process_checkout(
    State(state): State<AppState>,
    session: Session,
    Form(details): Form<CheckoutDetails>,
) -> Result<Redirect, AppError> {
    let customer = auth::require_role(&session, Role::Customer).await?;
    match checkout::process_checkout(&state.pool, &session, customer.id, &details).await {
        Ok(_) => {
            flash_redirect(
                &session,
                "Thank you for your purchase! Your order has been placed.",
                "/checkout",
            )
            .await
        }
        Err(e) if e.is_user_facing() => flash_redirect(&session, e.to_string(), "/cart").await,
        Err(e) => Err(e.into()),
    }
}

pub async fn view_checkout(session: Session) -> Result<Response, AppError> {
    auth::require_role(&session, Role::Customer).await?;
    match checkout::view_checkout(&session).await {
        Ok(snapshot) => Ok(views::checkout(page_context(&session).await?, snapshot).into_response()),
        Err(e) if e.is_user_facing() => {
            Ok(flash_redirect(&session, e.to_string(), "/cart").await?.into_response())
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn order_history(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let customer = auth::require_role(&session, Role::Customer).await?;
    let purchases = checkout::purchase_history(&state.pool, customer.id).await?;
    Ok(views::orders(page_context(&session).await?, purchases))
}
