//! Data models for the marketplace.

mod order;
mod product;
mod purchase;
mod user;

pub use order::{Cart, CartLine, Order};
pub use product::{NewProduct, Product, ProductListing};
pub use purchase::{CheckoutDetails, CheckoutSnapshot, Purchase, PurchaseItem};
pub use user::{Role, User, UserInfo};
