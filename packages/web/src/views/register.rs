//! Registration page with role, name, username and password.

use dioxus::prelude::*;

use super::layout::{Page, PageContext};

/// Register page component.
#[component]
pub fn RegisterPage(ctx: PageContext) -> Element {
    rsx! {
        Page { title: "Create account", ctx: ctx,
            h1 { "Create account" }
            form { class: "card", method: "post", action: "/register",
                label { r#for: "role", "I am a" }
                select { id: "role", name: "role", required: true,
                    option { value: "customer", "Customer" }
                    option { value: "farmer", "Farmer" }
                }
                label { r#for: "name", "Name" }
                input { id: "name", r#type: "text", name: "name", required: true }
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
                    autocomplete: "new-password",
                    required: true,
                }
                button { r#type: "submit", "Sign up" }
            }
            p { class: "muted",
                "Already have an account? "
                a { href: "/login", "Log in" }
            }
        }
    }
}
