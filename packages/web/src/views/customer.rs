//! Customer catalog with the category filter and asynchronous add-to-cart.

use dioxus::prelude::*;
use market_api::catalog::{Catalog, ALL_PRODUCTS};

use super::layout::{Page, PageContext};

/// Submits `.add-to-cart` forms in the background and shows the JSON message.
const ADD_TO_CART_JS: &str = r#"
document.querySelectorAll("form.add-to-cart").forEach(function (form) {
  form.addEventListener("submit", async function (event) {
    event.preventDefault();
    try {
      const response = await fetch(form.action, {
        method: "POST",
        body: new URLSearchParams(new FormData(form)),
      });
      const body = await response.json();
      alert(body.message);
      if (response.ok) {
        window.location.reload();
      }
    } catch (err) {
      alert("Could not reach the server.");
    }
  });
});
"#;

#[component]
pub fn CustomerPage(ctx: PageContext, catalog: Catalog, filter: String) -> Element {
    rsx! {
        Page { title: "Shop", ctx: ctx,
            h1 { "Fresh produce" }
            form { method: "post", action: "/customer",
                label { r#for: "filter_category", "Show " }
                select { id: "filter_category", name: "filter_category",
                    option { value: ALL_PRODUCTS, selected: filter == ALL_PRODUCTS, "All products" }
                    for name in catalog.names.iter() {
                        option { key: "{name}", value: "{name}", selected: *name == filter, "{name}" }
                    }
                }
                " "
                button { r#type: "submit", "Filter" }
            }

            if catalog.products.is_empty() {
                p { class: "muted", "Nothing on offer right now." }
            }
            div { class: "grid",
                for product in catalog.products.iter() {
                    article { key: "{product.id}", class: "product",
                        if let Some(url) = product.image_url.clone() {
                            img { src: "{url}", alt: "{product.name}" }
                        }
                        h3 { "{product.name}" }
                        p { "{product.price:.2} per kg" }
                        p { class: "muted",
                            "{product.quantity} kg available from {product.farmer_name}"
                        }
                        form { class: "add-to-cart", method: "post", action: "/add_to_cart",
                            input { r#type: "hidden", name: "product_id", value: "{product.id}" }
                            input {
                                r#type: "number",
                                name: "quantity",
                                value: "1",
                                min: "1",
                                max: "{product.quantity}",
                                step: "1",
                                required: true,
                            }
                            button { r#type: "submit", disabled: product.quantity == 0, "Add to cart" }
                        }
                    }
                }
            }
            script { dangerous_inner_html: ADD_TO_CART_JS }
        }
    }
}
