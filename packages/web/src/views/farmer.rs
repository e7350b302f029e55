use dioxus::prelude::*;
use market_api::models::ProductListing;

use super::layout::{Page, PageContext};

/// Farmer dashboard: the "list new produce" form and the farmer's own products.
#[component]
pub fn FarmerPage(ctx: PageContext, products: Vec<ProductListing>) -> Element {
    let name = ctx
        .user
        .as_ref()
        .map(|user| user.name.clone())
        .unwrap_or_default();

    rsx! {
        Page { title: "My produce", ctx: ctx,
            h1 { "Welcome, {name}" }
            form { class: "card", method: "post", action: "/farmer",
                h2 { "List new produce" }
                label { r#for: "name", "Product name" }
                input { id: "name", r#type: "text", name: "name", required: true }
                label { r#for: "price", "Price per kg" }
                input {
                    id: "price",
                    r#type: "number",
                    name: "price",
                    min: "0.01",
                    step: "0.01",
                    required: true,
                }
                label { r#for: "quantity", "Stock (kg)" }
                input {
                    id: "quantity",
                    r#type: "number",
                    name: "quantity",
                    min: "0",
                    step: "1",
                    required: true,
                }
                label { r#for: "image_url", "Image URL" }
                input {
                    id: "image_url",
                    r#type: "url",
                    name: "image_url",
                    placeholder: "optional",
                }
                button { r#type: "submit", "Add product" }
            }

            h2 { "Your listings" }
            if products.is_empty() {
                p { class: "muted", "You have not listed anything yet." }
            } else {
                table {
                    thead {
                        tr {
                            th { "Product" }
                            th { "Price / kg" }
                            th { "Stock (kg)" }
                            th {}
                        }
                    }
                    tbody {
                        for product in products.iter() {
                            tr { key: "{product.id}",
                                td { "{product.name}" }
                                td { "{product.price:.2}" }
                                td { "{product.quantity}" }
                                td { class: "row-actions",
                                    form {
                                        method: "post",
                                        action: "/restock_product/{product.id}",
                                        input {
                                            r#type: "number",
                                            name: "amount",
                                            min: "1",
                                            step: "1",
                                            required: true,
                                        }
                                        button { r#type: "submit", "Restock" }
                                    }
                                    form {
                                        method: "post",
                                        action: "/delete_product/{product.id}",
                                        button { r#type: "submit", class: "danger", "Delete" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
