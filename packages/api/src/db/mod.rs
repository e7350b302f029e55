//! # Database module — SQLite connection pool and schema
//!
//! This module owns the persistent store used by every operation in the `market-api`
//! crate: three live tables (`users`, `products`, `orders`) plus the settled-order
//! tables (`purchases`, `purchase_items`).
//!
//! ## Design
//!
//! The pool is created once by the binary and handed to each operation as a
//! `&SqlitePool`; tests open their own in-memory pool. The schema lives in
//! `migrations/` and is embedded at compile time with [`sqlx::migrate!`], so running
//! it on every startup is safe.
//!
//! ## Re-exports
//!
//! - [`connect`] — opens a file-backed pool and runs migrations.
//! - [`connect_in_memory`] — a single-connection in-memory pool with migrations applied.
//! - [`migrate`] — runs the embedded migrations against an existing pool.

mod pool;

pub use pool::{connect, connect_in_memory, migrate};
