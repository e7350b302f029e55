//! Order confirmation and purchase history.

use dioxus::prelude::*;
use market_api::models::{CheckoutSnapshot, Purchase, PurchaseItem};

use super::layout::{Page, PageContext};

#[component]
fn ItemTable(items: Vec<PurchaseItem>, total: f64) -> Element {
    rsx! {
        table {
            thead {
                tr {
                    th { "Product" }
                    th { "Quantity (kg)" }
                    th { "Total" }
                }
            }
            tbody {
                for item in items.iter() {
                    tr {
                        td { "{item.product_name}" }
                        td { "{item.quantity}" }
                        td { "{item.total:.2}" }
                    }
                }
            }
            tfoot {
                tr {
                    th { "Total" }
                    td {}
                    th { "{total:.2}" }
                }
            }
        }
    }
}

/// Confirmation for the most recent checkout.
#[component]
pub fn CheckoutPage(ctx: PageContext, snapshot: CheckoutSnapshot) -> Element {
    rsx! {
        Page { title: "Order placed", ctx: ctx,
            h1 { "Thank you, {snapshot.name}!" }
            p { "Order #{snapshot.purchase_id} will be delivered to {snapshot.address}." }
            p { class: "muted",
                "Phone: {snapshot.phone} · Payment: {snapshot.payment_method}"
            }
            ItemTable { items: snapshot.items.clone(), total: snapshot.total }
            p {
                a { class: "button", href: "/customer", "Continue shopping" }
            }
        }
    }
}

/// Every purchase the customer has settled, newest first.
#[component]
pub fn OrdersPage(ctx: PageContext, purchases: Vec<Purchase>) -> Element {
    rsx! {
        Page { title: "Orders", ctx: ctx,
            h1 { "Your orders" }
            if purchases.is_empty() {
                p { class: "muted", "You have not placed any orders yet." }
            }
            for purchase in purchases.iter() {
                section { key: "{purchase.id}",
                    h2 { "Order #{purchase.id}" }
                    p { class: "muted",
                        "{purchase.placed_on()} · {purchase.payment_method} · {purchase.address}"
                    }
                    ItemTable { items: purchase.items.clone(), total: purchase.total }
                }
            }
        }
    }
}
