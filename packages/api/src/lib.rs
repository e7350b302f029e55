//! # Market API — data operations for the farm marketplace
//!
//! This crate holds everything the web frontend calls: the SQLite store, the domain
//! models, and the operations farmers and customers perform. Handlers in `market-web`
//! only read the session, call one of the functions below and render the result.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Registration, login, Argon2id password hashing, session context helpers |
//! | [`catalog`] | Farmer product management and customer browsing |
//! | [`cart`] | Reserving stock as cart lines and releasing it again |
//! | [`checkout`] | Settling a cart into a purchase and the session snapshot |
//! | [`db`] | Connection pool and embedded migrations |
//! | [`models`] | Row types (`User`, `Product`, `Order`, `Purchase`) and form payloads |
//! | [`error`] | The [`Error`] taxonomy shared by every operation |
//!
//! ## Operations
//!
//! Every operation is an `async fn` taking a `&SqlitePool` (and, for checkout, the
//! `tower_sessions::Session`). Operations that write more than one row run inside a
//! single transaction.
//!
//! - **Accounts**: `register`, `login`, `logout`
//! - **Catalog**: `list_own_products`, `add_product`, `delete_product`, `restock_product`, `browse_products`
//! - **Cart**: `add_to_cart`, `remove_from_cart`, `view_cart`
//! - **Checkout**: `process_checkout`, `view_checkout`, `purchase_history`

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod db;
pub mod error;
pub mod models;

pub use error::{Error, Result};
pub use models::{Role, UserInfo};
