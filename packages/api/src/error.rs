//! # Error taxonomy for marketplace operations
//!
//! Every domain operation returns [`Result<T>`]. The variants split into two groups:
//!
//! - **User-facing** errors ([`Error::is_user_facing`] returns `true`): bad input,
//!   missing session, stock shortfalls and the like. The web layer turns these into a
//!   flash message and a redirect, or a JSON body with a 4xx status. Their `Display`
//!   text is safe to show to the user.
//! - **Internal** errors: database, migration, session store and password hashing
//!   faults. These are logged and answered with a generic 500.

use thiserror::Error;

/// Convenience alias used by every operation in this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Username already exists. Please choose another one.")]
    DuplicateUsername,
    #[error("Invalid username or password.")]
    InvalidCredentials,
    #[error("You need to be logged in.")]
    NotLoggedIn,
    #[error("You are not allowed to do that.")]
    Forbidden,
    #[error("Please fill in all fields.")]
    IncompleteInput,
    #[error("Unknown account type: {0}")]
    InvalidRole(String),
    #[error("Price must be a number greater than zero.")]
    InvalidPrice,
    #[error("Quantity must be a whole number of kilograms.")]
    InvalidQuantity,
    #[error("Product not found.")]
    ProductNotFound,
    #[error("Insufficient stock for {product}. Available: {available} kg.")]
    InsufficientStock { product: String, available: i64 },
    #[error("Order not found.")]
    OrderNotFound,
    #[error("Your cart is empty.")]
    EmptyCart,
    #[error("No recent order found. Please add items to your cart.")]
    NoRecentOrder,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
    #[error("password hashing error: {0}")]
    PasswordHash(String),
}

impl Error {
    /// Whether the error describes something the user did, rather than a server fault.
    pub fn is_user_facing(&self) -> bool {
        !matches!(
            self,
            Error::Database(_) | Error::Migrate(_) | Error::Session(_) | Error::PasswordHash(_)
        )
    }
}
