//! Shared page chrome: document head, navigation bar and flash message.

use dioxus::prelude::*;
use market_api::UserInfo;

/// What every page needs besides its own data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageContext {
    pub user: Option<UserInfo>,
    pub flash: Option<String>,
}

const STYLE: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif; margin: 0; color: #2f3b2f; background: #f7f9f4; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 2rem; background: #3d6b35; }
header a, header span { color: #fff; text-decoration: none; margin-left: 1rem; }
header .brand { font-weight: 700; font-size: 1.25rem; margin-left: 0; }
main { max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
.flash { padding: 0.625rem 1rem; background: #fff8db; border: 1px solid #f0d86e; border-radius: 4px; }
.card { display: flex; flex-direction: column; gap: 0.5rem; max-width: 360px; padding: 1rem; background: #fff; border-radius: 6px; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; }
.product { padding: 1rem; background: #fff; border-radius: 6px; }
.product img { width: 100%; border-radius: 4px; }
.muted { color: #6f786b; }
table { width: 100%; border-collapse: collapse; background: #fff; }
th, td { padding: 0.5rem; text-align: left; border-bottom: 1px solid #e3e8dc; }
.row-actions form { display: inline-flex; gap: 0.25rem; margin-right: 0.5rem; }
button, .button { padding: 0.5rem 1rem; border: none; border-radius: 4px; background: #3d6b35; color: #fff; cursor: pointer; text-decoration: none; }
.button.secondary { background: #8aa57f; }
button.danger { background: #b5473a; }
button:disabled { opacity: 0.5; cursor: not-allowed; }
"#;

/// Page skeleton. `children` becomes the body of `<main>`.
#[component]
pub fn Page(title: String, ctx: PageContext, children: Element) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{title} · Farm Market" }
            style { dangerous_inner_html: STYLE }
        }
        body {
            header {
                a { class: "brand", href: "/", "Farm Market" }
                nav {
                    if let Some(user) = ctx.user.clone() {
                        span { "Hello, {user.name}" }
                        if user.is_farmer() {
                            a { href: "/farmer", "My produce" }
                        } else {
                            a { href: "/customer", "Shop" }
                            a { href: "/cart", "Cart" }
                            a { href: "/orders", "Orders" }
                        }
                        a { href: "/logout", "Log out" }
                    } else {
                        a { href: "/login", "Log in" }
                        a { href: "/register", "Register" }
                    }
                }
            }
            main {
                if let Some(message) = ctx.flash.clone() {
                    p { class: "flash", "{message}" }
                }
                {children}
            }
        }
    }
}
