use dioxus::prelude::*;

use super::layout::{Page, PageContext};

#[component]
pub fn HomePage(ctx: PageContext) -> Element {
    rsx! {
        Page { title: "Welcome", ctx: ctx,
            section {
                h1 { "Fresh produce, straight from the farm" }
                p { "Farmers list what they grow. Customers buy it by the kilogram." }
                p {
                    a { class: "button", href: "/customer", "Start shopping" }
                    " "
                    a { class: "button secondary", href: "/farmer", "Sell your harvest" }
                }
            }
        }
    }
}
