//! Router and shared state.

use axum::routing::{get, post};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::handlers::{account, cart, checkout, customer, farmer};

#[derive(Clone, Debug)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// All marketplace routes. The caller adds the session layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(account::home))
        .route("/register", get(account::register_page).post(account::register))
        .route("/login", get(account::login_page).post(account::login))
        .route("/logout", get(account::logout))
        .route("/farmer", get(farmer::dashboard).post(farmer::add_product))
        .route("/delete_product/{id}", post(farmer::delete_product))
        .route("/restock_product/{id}", post(farmer::restock_product))
        .route("/customer", get(customer::browse).post(customer::filter))
        .route("/add_to_cart", post(cart::add_to_cart))
        .route("/cart", get(cart::view_cart))
        .route("/delete_from_cart/{id}", post(cart::delete_from_cart))
        .route("/process_checkout", post(checkout::process_checkout))
        .route("/checkout", get(checkout::view_checkout))
        .route("/orders", get(checkout::order_history))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
