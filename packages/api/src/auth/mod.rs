//! Authentication: local accounts, password hashing and session context.

mod accounts;
mod password;
mod session;

pub use accounts::{find_user, login, register};
pub use password::{hash_password, verify_password};
pub use session::{
    checkout_snapshot, current_user, establish, logout, require_role, require_user, set_flash,
    store_checkout, take_flash, SESSION_CHECKOUT_KEY, SESSION_FLASH_KEY, SESSION_USER_KEY,
};

#[cfg(test)]
pub(crate) use session::memory_session;
