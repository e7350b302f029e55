//! # Market web — HTTP frontend for the farm marketplace
//!
//! An axum application serving server-rendered pages. Each handler reads the
//! `tower-sessions` session, calls one operation from `market-api`, and then renders a
//! page, redirects with a flash message, or (for `/add_to_cart`) answers with JSON.
//!
//! The binary (`src/main.rs`) wires the [`router`] to a SQLite pool and a SQLite-backed
//! session store; tests use the same router with an in-memory store.

pub mod app;
pub mod error;
pub mod handlers;
pub mod settings;
pub mod views;

pub use app::{router, AppState};
pub use error::AppError;
