//! Server-rendered pages.
//!
//! Each page is a Dioxus component rendered to a string with `dioxus-ssr`. The
//! functions exported here are what handlers call: they take the data to show and
//! return a complete HTML document.

use axum::response::Html;
use dioxus::prelude::*;
use market_api::catalog::Catalog;
use market_api::models::{Cart, CheckoutSnapshot, ProductListing, Purchase};

mod cart;
mod checkout;
mod customer;
mod farmer;
mod home;
mod layout;
mod login;
mod register;

use cart::CartPage;
use checkout::{CheckoutPage, OrdersPage};
use customer::CustomerPage;
use farmer::FarmerPage;
use home::HomePage;
pub use layout::PageContext;
use login::LoginPage;
use register::RegisterPage;

fn render(page: Element) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render_element(page)
    ))
}

pub fn home(ctx: PageContext) -> Html<String> {
    render(rsx! { HomePage { ctx: ctx } })
}

pub fn login(ctx: PageContext) -> Html<String> {
    render(rsx! { LoginPage { ctx: ctx } })
}

pub fn register(ctx: PageContext) -> Html<String> {
    render(rsx! { RegisterPage { ctx: ctx } })
}

pub fn farmer(ctx: PageContext, products: Vec<ProductListing>) -> Html<String> {
    render(rsx! { FarmerPage { ctx: ctx, products: products } })
}

pub fn customer(ctx: PageContext, catalog: Catalog, filter: String) -> Html<String> {
    render(rsx! { CustomerPage { ctx: ctx, catalog: catalog, filter: filter } })
}

pub fn cart(ctx: PageContext, cart: Cart) -> Html<String> {
    render(rsx! { CartPage { ctx: ctx, cart: cart } })
}

pub fn checkout(ctx: PageContext, snapshot: CheckoutSnapshot) -> Html<String> {
    render(rsx! { CheckoutPage { ctx: ctx, snapshot: snapshot } })
}

pub fn orders(ctx: PageContext, purchases: Vec<Purchase>) -> Html<String> {
    render(rsx! { OrdersPage { ctx: ctx, purchases: purchases } })
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_api::{Role, UserInfo};

    fn customer_ctx() -> PageContext {
        PageContext {
            user: Some(UserInfo {
                id: 1,
                role: Role::Customer,
                name: "Cass".into(),
            }),
            flash: Some("Login successful!".into()),
        }
    }

    #[test]
    fn test_layout_shows_flash_and_user() {
        let Html(page) = home(customer_ctx());
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("Login successful!"));
        assert!(page.contains("Cass"));
        assert!(page.contains("/cart"));
    }

    #[test]
    fn test_anonymous_nav_offers_login() {
        let Html(page) = home(PageContext::default());
        assert!(page.contains("/login"));
        assert!(page.contains("/register"));
        assert!(!page.contains("/logout"));
    }

    #[test]
    fn test_customer_page_lists_products_and_filter() {
        let catalog = Catalog {
            products: vec![ProductListing {
                id: 3,
                farmer_id: 2,
                name: "Tomato".into(),
                price: 2.0,
                quantity: 20,
                image_url: None,
                farmer_name: "Fran".into(),
            }],
            names: vec!["Tomato".into()],
        };
        let Html(page) = customer(customer_ctx(), catalog, "Tomato".into());
        assert!(page.contains("Tomato"));
        assert!(page.contains("Fran"));
        assert!(page.contains("2.00"));
        assert!(page.contains("add-to-cart"));
    }

    #[test]
    fn test_cart_page_shows_total() {
        let basket = Cart::from_lines(vec![market_api::models::CartLine {
            id: 9,
            product_id: 3,
            product_name: "Kale".into(),
            quantity: 2,
            total: 7.5,
        }]);
        let Html(page) = cart(customer_ctx(), basket);
        assert!(page.contains("Kale"));
        assert!(page.contains("7.50"));
        assert!(page.contains("/delete_from_cart/9"));
    }
}
