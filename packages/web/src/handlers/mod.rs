//! Request handlers, grouped by who uses them.

pub mod account;
pub mod cart;
pub mod checkout;
pub mod customer;
pub mod farmer;

use axum::response::Redirect;
use market_api::auth;
use tower_sessions::Session;

use crate::error::AppError;
use crate::views::PageContext;

/// Queue `message` for the next page and redirect to `to`.
pub(crate) async fn flash_redirect(
    session: &Session,
    message: impl Into<String>,
    to: &str,
) -> Result<Redirect, AppError> {
    auth::set_flash(session, message).await?;
    Ok(Redirect::to(to))
}

/// Flash the outcome of a form submission and redirect to `to`.
///
/// User errors are flashed like a success message; internal errors propagate.
pub(crate) async fn report<T>(
    session: &Session,
    result: market_api::Result<T>,
    success: &str,
    to: &str,
) -> Result<Redirect, AppError> {
    match result {
        Ok(_) => flash_redirect(session, success, to).await,
        Err(e) if e.is_user_facing() => flash_redirect(session, e.to_string(), to).await,
        Err(e) => Err(e.into()),
    }
}

/// Who is logged in, plus any pending flash message.
pub(crate) async fn page_context(session: &Session) -> Result<PageContext, AppError> {
    Ok(PageContext {
        user: auth::current_user(session).await?,
        flash: auth::take_flash(session).await?,
    })
}
