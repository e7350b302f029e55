//! # Session context
//!
//! Everything the marketplace remembers about a browser lives under three keys of the
//! `tower-sessions` [`Session`]:
//!
//! | Key | Type | Set by |
//! |-----|------|--------|
//! | [`SESSION_USER_KEY`] | [`UserInfo`] | [`establish`] after a successful login |
//! | [`SESSION_CHECKOUT_KEY`] | [`CheckoutSnapshot`] | [`store_checkout`] after checkout |
//! | [`SESSION_FLASH_KEY`] | `String` | [`set_flash`], consumed by [`take_flash`] |
//!
//! The role stored with the user decides which pages are reachable. Operations that
//! mutate someone's data still check ownership against the database.

use tower_sessions::Session;

use crate::error::{Error, Result};
use crate::models::{CheckoutSnapshot, Role, UserInfo};

/// Key for storing the logged-in user in the session.
pub const SESSION_USER_KEY: &str = "user";
/// Key for the most recent checkout.
pub const SESSION_CHECKOUT_KEY: &str = "checkout";
/// Key for the one-shot message shown on the next rendered page.
pub const SESSION_FLASH_KEY: &str = "flash";

/// The logged-in user, if any.
pub async fn current_user(session: &Session) -> Result<Option<UserInfo>> {
    Ok(session.get(SESSION_USER_KEY).await?)
}

/// The logged-in user, or [`Error::NotLoggedIn`].
pub async fn require_user(session: &Session) -> Result<UserInfo> {
    current_user(session).await?.ok_or(Error::NotLoggedIn)
}

/// The logged-in user if they hold `role`; [`Error::Forbidden`] otherwise.
pub async fn require_role(session: &Session, role: Role) -> Result<UserInfo> {
    let user = require_user(session).await?;
    if user.role != role {
        return Err(Error::Forbidden);
    }
    Ok(user)
}

/// Bind `user` to the session under a fresh session id.
///
/// A checkout snapshot left over from a previous login is discarded.
pub async fn establish(session: &Session, user: &UserInfo) -> Result<()> {
    session.cycle_id().await?;
    session
        .remove::<CheckoutSnapshot>(SESSION_CHECKOUT_KEY)
        .await?;
    session.insert(SESSION_USER_KEY, user).await?;
    Ok(())
}

/// Clear all session state.
pub async fn logout(session: &Session) -> Result<()> {
    session.flush().await?;
    Ok(())
}

pub async fn set_flash(session: &Session, message: impl Into<String>) -> Result<()> {
    session.insert(SESSION_FLASH_KEY, message.into()).await?;
    Ok(())
}

/// Remove and return the pending flash message.
pub async fn take_flash(session: &Session) -> Result<Option<String>> {
    Ok(session.remove(SESSION_FLASH_KEY).await?)
}

pub async fn store_checkout(session: &Session, snapshot: &CheckoutSnapshot) -> Result<()> {
    session.insert(SESSION_CHECKOUT_KEY, snapshot).await?;
    Ok(())
}

/// The most recent checkout, or [`Error::NoRecentOrder`].
pub async fn checkout_snapshot(session: &Session) -> Result<CheckoutSnapshot> {
    session
        .get(SESSION_CHECKOUT_KEY)
        .await?
        .ok_or(Error::NoRecentOrder)
}

#[cfg(test)]
pub(crate) fn memory_session() -> Session {
    use std::sync::Arc;
    use tower_sessions::MemoryStore;

    Session::new(None, Arc::new(MemoryStore::default()), None)
}
