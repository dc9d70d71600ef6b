//! Storefront HTML.

use std::fmt::Write;

use super::models::{StorefrontState, ALL_CATEGORIES};
use crate::{
    api::models::{CartItem, Product},
    html::{document, escape, money, post_button, BRAND},
};

/// Renders the whole storefront screen, or the loading screen while the
/// catalog has not arrived yet.
pub fn page(state: &StorefrontState) -> String {
    if state.loading {
        return document(
            BRAND,
            &format!("<main><p class=\"muted\">Loading {BRAND}...</p></main>"),
        );
    }

    let mut body = String::new();
    body.push_str(&header(state));
    body.push_str("<main>");
    if state.cart_open {
        body.push_str(&cart_panel(state));
    }
    body.push_str(&search_controls(state));
    body.push_str(&featured_section(state));
    body.push_str(&catalog_section(state));
    body.push_str("</main>");
    body.push_str(&footer(state));

    document(BRAND, &body)
}

fn header(state: &StorefrontState) -> String {
    let count = state.total_items();
    let badge = if count > 0 {
        format!(" <span class=\"badge\" id=\"cart-count\">{count}</span>")
    } else {
        String::new()
    };
    let toggle = if state.cart_open { "closed" } else { "open" };

    format!(
        "<header><h1>{BRAND}</h1><div>\
         <span class=\"muted\">Secure Shopping</span> \
         <span class=\"muted\">Free Shipping</span> \
         <a href=\"/?cart={toggle}\">Cart{badge}</a> {}\
         </div></header>",
        post_button("/screen/admin", "Admin", "")
    )
}

fn cart_panel(state: &StorefrontState) -> String {
    let mut out = String::from("<section class=\"card\" id=\"cart\"><h2>Shopping Cart</h2>");
    let _ = write!(
        out,
        "<p class=\"muted\">{} items in your cart</p>",
        state.total_items()
    );

    if state.cart.is_empty() {
        out.push_str(
            "<p>Your cart is empty</p><a href=\"/?cart=closed\">Continue Shopping</a></section>",
        );
        return out;
    }

    for item in &state.cart.items {
        // Lines for products no longer in the catalog are not shown.
        if let Some(product) = state.product(&item.product_id) {
            out.push_str(&cart_line(item, product));
        }
    }

    let _ = write!(
        out,
        "<hr><p id=\"cart-total\"><strong>Total: {}</strong></p>{} \
         <button type=\"button\">Checkout</button></section>",
        money(state.cart.total),
        post_button("/cart/clear", "Clear Cart", "")
    );

    out
}

fn cart_line(item: &CartItem, product: &Product) -> String {
    let id = escape(&item.product_id.to_string());
    let step = |quantity: i64, label: &str| {
        format!(
            "<form class=\"inline\" method=\"post\" action=\"/cart/update\">\
             <input type=\"hidden\" name=\"product_id\" value=\"{id}\">\
             <input type=\"hidden\" name=\"quantity\" value=\"{quantity}\">\
             <button>{label}</button></form>"
        )
    };

    format!(
        "<div class=\"cart-line\"><img src=\"{}\" alt=\"{}\" width=\"64\" height=\"64\">\
         <strong>{}</strong> <span class=\"muted\">{}</span> {} <span>{}</span> {}</div>",
        escape(&product.image_url),
        escape(&product.name),
        escape(&product.name),
        money(item.price),
        step(item.quantity - 1, "-"),
        item.quantity,
        step(item.quantity + 1, "+"),
    )
}

fn search_controls(state: &StorefrontState) -> String {
    let mut options = format!(
        "<option value=\"{ALL_CATEGORIES}\"{}>All Categories</option>",
        selected(state.category.as_str() == ALL_CATEGORIES)
    );
    for category in &state.categories {
        let _ = write!(
            options,
            "<option value=\"{0}\"{1}>{0}</option>",
            escape(category),
            selected(state.category.as_str() == category)
        );
    }

    format!(
        "<section><h2>Professional Products</h2>\
         <p class=\"muted\">Discover premium quality products curated for professionals who demand excellence</p>\
         <form method=\"get\" action=\"/\">\
         <input type=\"search\" name=\"search\" placeholder=\"Search products...\" value=\"{}\">\
         <select name=\"category\">{options}</select> <button>Filter</button></form></section>",
        escape(&state.search_term)
    )
}

fn featured_section(state: &StorefrontState) -> String {
    let mut out = String::from("<section id=\"featured\"><h3>Featured Products</h3><div class=\"grid\">");
    for product in state.featured_products() {
        out.push_str(&product_card(product, true));
    }
    out.push_str("</div></section>");
    out
}

fn catalog_section(state: &StorefrontState) -> String {
    let products = state.filtered_products();
    let mut out = format!(
        "<section id=\"catalog\"><h3>All Products ({})</h3>",
        products.len()
    );

    if products.is_empty() {
        out.push_str(
            "<p>No products found</p>\
             <p class=\"muted\">Try adjusting your search or filter criteria</p></section>",
        );
        return out;
    }

    out.push_str("<div class=\"grid\">");
    for product in products {
        out.push_str(&product_card(product, false));
    }
    out.push_str("</div></section>");
    out
}

fn product_card(product: &Product, featured: bool) -> String {
    let description = if featured {
        format!("<p class=\"muted\">{}</p>", escape(&product.description))
    } else {
        String::new()
    };
    let stock = if featured {
        format!("{} in stock", product.stock)
    } else {
        format!("{} left", product.stock)
    };

    format!(
        "<article class=\"card product\" data-id=\"{id}\">\
         <img src=\"{img}\" alt=\"{name}\">\
         <span class=\"badge\">{category}</span><h4>{name}</h4>{description}\
         <p><strong>{price}</strong> <span class=\"muted\">{stock}</span></p>\
         <form method=\"post\" action=\"/cart/add\">\
         <input type=\"hidden\" name=\"product_id\" value=\"{id}\">\
         <button>Add to Cart</button></form></article>",
        id = escape(&product.id.to_string()),
        img = escape(&product.image_url),
        name = escape(&product.name),
        category = escape(&product.category),
        price = money(product.price),
    )
}

fn footer(state: &StorefrontState) -> String {
    let mut links = String::new();
    for category in &state.categories {
        let _ = write!(
            links,
            "<li><a href=\"/?category={}\">{}</a></li>",
            urlencoding::encode(category),
            escape(category)
        );
    }

    format!(
        "<footer><h3>{BRAND}</h3>\
         <p>Your trusted platform for professional-grade products.</p>\
         <h4>Categories</h4><ul>{links}</ul>\
         <p>&copy; 2024 {BRAND}. All rights reserved.</p></footer>"
    )
}

fn selected(is_selected: bool) -> &'static str {
    if is_selected {
        " selected"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{Cart, RecordId};

    fn lamp() -> Product {
        Product {
            id: RecordId::Number(1),
            name: "Desk Lamp".into(),
            description: "Warm <b>light</b>".into(),
            price: 29.99,
            category: "Home & Design".into(),
            image_url: "https://img.example/lamp.jpg".into(),
            stock: 5,
            featured: true,
        }
    }

    fn loaded() -> StorefrontState {
        StorefrontState {
            products: vec![lamp()],
            categories: vec!["Home & Design".into()],
            loading: false,
            ..StorefrontState::default()
        }
    }

    #[test]
    fn loading_screen_until_catalog_arrives() {
        let html = page(&StorefrontState::default());
        assert!(html.contains("Loading EcommercePro..."));
        assert!(!html.contains("All Products"));
    }

    #[test]
    fn renders_catalog_and_escapes_text() {
        let html = page(&loaded());

        assert!(html.contains("All Products (1)"));
        assert!(html.contains("Desk Lamp"));
        assert!(html.contains("Warm &lt;b&gt;light&lt;/b&gt;"));
        assert!(html.contains("$29.99"));
        assert!(html.contains("href=\"/?category=Home%20%26%20Design\""));
    }

    #[test]
    fn empty_filter_result_message() {
        let state = StorefrontState {
            search_term: "chair".into(),
            ..loaded()
        };

        let html = page(&state);

        assert!(html.contains("All Products (0)"));
        assert!(html.contains("No products found"));
    }

    #[test]
    fn cart_total_comes_from_backend_value() {
        let state = StorefrontState {
            cart: Cart {
                items: vec![CartItem {
                    product_id: RecordId::Number(1),
                    quantity: 2,
                    price: 29.99,
                }],
                // Deliberately not 2 * 29.99.
                total: 50.0,
            },
            cart_open: true,
            ..loaded()
        };

        let html = page(&state);

        assert!(html.contains("Total: $50.00"));
        assert!(html.contains("<span class=\"badge\" id=\"cart-count\">2</span>"));
        assert!(html.contains("name=\"quantity\" value=\"1\""));
        assert!(html.contains("name=\"quantity\" value=\"3\""));
    }

    #[test]
    fn empty_cart_panel() {
        let state = StorefrontState {
            cart_open: true,
            ..loaded()
        };

        let html = page(&state);

        assert!(html.contains("Your cart is empty"));
        assert!(!html.contains("cart-count"));
    }
}
