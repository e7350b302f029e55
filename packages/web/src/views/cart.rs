use dioxus::prelude::*;
use market_api::models::Cart;

use super::layout::{Page, PageContext};

/// Cart contents and the delivery form that settles them.
#[component]
pub fn CartPage(ctx: PageContext, cart: Cart) -> Element {
    rsx! {
        Page { title: "Cart", ctx: ctx,
            h1 { "Your cart" }
            if cart.is_empty() {
                p { class: "muted",
                    "Your cart is empty. "
                    a { href: "/customer", "Keep shopping" }
                }
            } else {
                table {
                    thead {
                        tr {
                            th { "Product" }
                            th { "Quantity (kg)" }
                            th { "Total" }
                            th {}
                        }
                    }
                    tbody {
                        for line in cart.lines.iter() {
                            tr { key: "{line.id}",
                                td { "{line.product_name}" }
                                td { "{line.quantity}" }
                                td { "{line.total:.2}" }
                                td {
                                    form { method: "post", action: "/delete_from_cart/{line.id}",
                                        button { r#type: "submit", class: "danger", "Remove" }
                                    }
                                }
                            }
                        }
                    }
                    tfoot {
                        tr {
                            th { "Total" }
                            td {}
                            th { "{cart.total:.2}" }
                            td {}
                        }
                    }
                }

                form { class: "card", method: "post", action: "/process_checkout",
                    h2 { "Delivery details" }
                    label { r#for: "name", "Full name" }
                    input { id: "name", r#type: "text", name: "name", required: true }
                    label { r#for: "address", "Address" }
                    input { id: "address", r#type: "text", name: "address", required: true }
                    label { r#for: "phone", "Phone" }
                    input { id: "phone", r#type: "tel", name: "phone", required: true }
                    label { r#for: "payment_method", "Payment" }
                    select { id: "payment_method", name: "payment_method", required: true,
                        option { value: "cash", "Cash on delivery" }
                        option { value: "card", "Card" }
                        option { value: "upi", "UPI" }
                    }
                    button { r#type: "submit", "Place order" }
                }
            }
        }
    }
}
