//! Login page with username/password form.

use dioxus::prelude::*;

use super::layout::{Page, PageContext};

/// Login page component.
#[component]
pub fn LoginPage(ctx: PageContext) -> Element {
    rsx! {
        Page { title: "Log in", ctx: ctx,
            h1 { "Log in" }
            form { class: "card", method: "post", action: "/login",
                label { r#for: "username", "Username" }
                input {
                    id: "username",
                    r#type: "text",
                    name: "username",
                    autocomplete: "username",
                    required: true,
                }
                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    r#type: "password",
                    name: "password",
                    autocomplete: "current-password",
                    required: true,
                }
                button { r#type: "submit", "Log in" }
            }
            p { class: "muted",
                "No account yet? "
                a { href: "/register", "Register" }
            }
        }
    }
}
