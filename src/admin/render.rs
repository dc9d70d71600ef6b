//! Admin console HTML.

use std::fmt::Write;

use super::{
    helpers::{
        average_order_value, category_share, format_date, short_id, status_badge_class,
        LOW_STOCK_PREVIEW,
    },
    models::{AdminState, AdminTab, PRODUCT_CATEGORIES},
};
use crate::{
    api::models::{Order, OrderStatus, Product, ProductForm},
    html::{document, escape, money, post_button},
};

const TITLE: &str = "Admin Panel";

/// Renders the admin screen with `tab` active.
pub fn page(state: &AdminState, tab: AdminTab) -> String {
    if state.loading {
        return document(
            TITLE,
            "<main><p class=\"muted\">Loading Admin Panel...</p></main>",
        );
    }

    let content = match tab {
        AdminTab::Dashboard => dashboard(state),
        AdminTab::Products => products(state),
        AdminTab::Orders => orders(state),
        AdminTab::Analytics => analytics(state),
    };

    let body = format!(
        "<header><h1>{TITLE}</h1>{}</header><main>{}{content}</main>",
        post_button("/screen/store", "Back to Store", ""),
        tabs(tab)
    );

    document(TITLE, &body)
}

/// Confirmation prompt shown before a product is deleted.
pub fn delete_confirmation(product_id: &str, product: Option<&Product>) -> String {
    let name = product.map_or_else(|| escape(product_id), |p| escape(&p.name));
    let action = format!("/admin/products/{}/delete", urlencoding::encode(product_id));

    let body = format!(
        "<main class=\"card\"><h2>Delete product</h2>\
         <p>Are you sure you want to delete <strong>{name}</strong>?</p>\
         <form method=\"post\" action=\"{action}\">\
         <button name=\"confirm\" value=\"yes\" class=\"danger\">Delete</button> \
         <button name=\"confirm\" value=\"no\">Cancel</button></form></main>"
    );

    document(TITLE, &body)
}

fn tabs(active: AdminTab) -> String {
    let mut out = String::from("<nav class=\"tabs\">");
    for tab in AdminTab::ALL {
        if tab == active {
            let _ = write!(out, "<strong>{}</strong> ", tab.label());
        } else {
            let _ = write!(out, "<a href=\"{}\">{}</a>", tab.href(), tab.label());
        }
    }
    out.push_str("</nav>");
    out
}

// =============================================================================
// Dashboard
// =============================================================================

fn dashboard(state: &AdminState) -> String {
    let stats = &state.stats;

    let mut out = format!(
        "<section class=\"grid\" id=\"stat-cards\">\
         <div class=\"card\"><h4>Total Products</h4><p id=\"total-products\">{}</p><p class=\"muted\">In the catalog</p></div>\
         <div class=\"card\"><h4>Total Orders</h4><p id=\"total-orders\">{}</p><p class=\"muted\">Orders processed</p></div>\
         <div class=\"card\"><h4>Revenue</h4><p id=\"total-revenue\">{}</p><p class=\"muted\">Total sales</p></div>\
         <div class=\"card\"><h4>Low Stock</h4><p id=\"low-stock-count\">{}</p><p class=\"muted\">Products &lt; 10 units</p></div>\
         </section>",
        stats.total_products,
        stats.total_orders,
        money(stats.total_revenue),
        stats.low_stock_products.len()
    );

    out.push_str("<section class=\"grid\"><div class=\"card\"><h3>Low Stock Products</h3>");
    if stats.low_stock_products.is_empty() {
        out.push_str("<p class=\"muted\">No low stock products</p>");
    } else {
        out.push_str("<ul>");
        for product in stats.low_stock_products.iter().take(LOW_STOCK_PREVIEW) {
            let _ = write!(
                out,
                "<li>{} <span class=\"badge\">{} in stock</span></li>",
                escape(&product.name),
                product.stock
            );
        }
        out.push_str("</ul>");
    }
    out.push_str("</div>");

    out.push_str("<div class=\"card\"><h3>Recent Orders</h3><p class=\"muted\">Last 5 orders</p>");
    if stats.recent_orders.is_empty() {
        out.push_str("<p class=\"muted\">No orders yet</p>");
        out.push_str(&post_button("/admin/sample-order", "Create Demo Order", ""));
    } else {
        out.push_str("<ul>");
        for order in &stats.recent_orders {
            let _ = write!(
                out,
                "<li>{} {}</li>",
                money(order.total),
                status_badge(&order.status)
            );
        }
        out.push_str("</ul>");
    }
    out.push_str("</div></section>");

    out
}

// =============================================================================
// Products
// =============================================================================

fn products(state: &AdminState) -> String {
    let mut out = format!(
        "<h2>Product Management</h2>{}",
        post_button("/admin/product-form/open", "New Product", "")
    );

    if state.creating {
        out.push_str(&product_form(
            "Create New Product",
            "/admin/products",
            "Create Product",
            "/admin/product-form/cancel",
            &state.form,
        ));
    }

    if let Some(product) = &state.editing {
        let action = format!("/admin/products/{}", product.id.path_segment());
        out.push_str(&product_form(
            "Edit Product",
            &action,
            "Save Changes",
            "/admin/editor/cancel",
            &state.form,
        ));
    }

    out.push_str("<div class=\"grid\">");
    for product in &state.products {
        out.push_str(&product_card(product));
    }
    out.push_str("</div>");

    out
}

fn product_card(product: &Product) -> String {
    let segment = product.id.path_segment();
    let featured = if product.featured {
        " <span class=\"badge\">Featured</span>"
    } else {
        ""
    };

    format!(
        "<article class=\"card product\" data-id=\"{eid}\">\
         <img src=\"{img}\" alt=\"{name}\">\
         <span class=\"badge\">{category}</span>{featured}\
         <h4>{name}</h4><p class=\"muted\">{description}</p>\
         <p><strong>${price}</strong> <span class=\"muted\">Stock: {stock}</span></p>\
         {edit} <a class=\"danger\" href=\"/admin/products/{segment}/delete\">Delete</a></article>",
        eid = escape(&product.id.to_string()),
        img = escape(&product.image_url),
        name = escape(&product.name),
        category = escape(&product.category),
        description = escape(&product.description),
        price = product.price,
        stock = product.stock,
        edit = post_button(&format!("/admin/products/{segment}/edit"), "Edit", ""),
    )
}

fn product_form(
    title: &str,
    action: &str,
    submit: &str,
    cancel_action: &str,
    form: &ProductForm,
) -> String {
    let mut categories = String::from("<option value=\"\">Select category</option>");
    for category in PRODUCT_CATEGORIES {
        let selected = if form.category == category { " selected" } else { "" };
        let _ = write!(
            categories,
            "<option value=\"{0}\"{selected}>{0}</option>",
            escape(category)
        );
    }
    let checked = if form.featured { " checked" } else { "" };

    format!(
        "<section class=\"card\" id=\"product-form\"><h3>{title}</h3>\
         <form method=\"post\" action=\"{action}\">\
         <label>Name <input name=\"name\" value=\"{name}\" placeholder=\"Product name\"></label>\
         <label>Category <select name=\"category\">{categories}</select></label>\
         <label>Price <input name=\"price\" type=\"number\" step=\"0.01\" value=\"{price}\" placeholder=\"0.00\"></label>\
         <label>Stock <input name=\"stock\" type=\"number\" value=\"{stock}\" placeholder=\"Units in stock\"></label>\
         <label>Description <textarea name=\"description\">{description}</textarea></label>\
         <label>Image URL <input name=\"image_url\" value=\"{image_url}\" placeholder=\"https://example.com/image.jpg\"></label>\
         <label><input type=\"checkbox\" name=\"featured\" value=\"true\"{checked}> Featured product</label>\
         <button>{submit}</button></form>{cancel}</section>",
        title = escape(title),
        action = escape(action),
        name = escape(&form.name),
        price = escape(&form.price),
        stock = escape(&form.stock),
        description = escape(&form.description),
        image_url = escape(&form.image_url),
        submit = escape(submit),
        cancel = post_button(cancel_action, "Cancel", ""),
    )
}

// =============================================================================
// Orders
// =============================================================================

fn orders(state: &AdminState) -> String {
    let mut out = format!(
        "<h2>Order Management</h2>{}\
         <table><thead><tr><th>Order ID</th><th>Total</th><th>Status</th><th>Date</th><th>Actions</th></tr></thead><tbody>",
        post_button("/admin/sample-order", "Create Demo Order", "")
    );

    for order in &state.orders {
        out.push_str(&order_row(order));
    }

    out.push_str("</tbody></table>");
    out
}

fn order_row(order: &Order) -> String {
    let mut options = String::new();
    for status in &OrderStatus::SELECTABLE {
        let selected = if status == &order.status { " selected" } else { "" };
        let _ = write!(
            options,
            "<option value=\"{}\"{selected}>{}</option>",
            status.as_str(),
            status.label()
        );
    }

    let date = order
        .created_at
        .as_deref()
        .map(format_date)
        .unwrap_or_default();

    format!(
        "<tr data-id=\"{eid}\"><td><code>{short}</code></td><td>{total}</td><td>{badge}</td><td>{date}</td>\
         <td><form method=\"post\" action=\"/admin/orders/{segment}/status\">\
         <select name=\"status\">{options}</select> <button>Update</button></form></td></tr>",
        eid = escape(&order.id.to_string()),
        segment = order.id.path_segment(),
        short = escape(&short_id(&order.id)),
        total = money(order.total),
        badge = status_badge(&order.status),
        date = escape(&date),
    )
}

// =============================================================================
// Analytics
// =============================================================================

fn analytics(state: &AdminState) -> String {
    let stats = &state.stats;
    let mut out = String::from(
        "<h2>Analytics</h2><section class=\"grid\"><div class=\"card\"><h3>Category Distribution</h3>",
    );

    if stats.category_stats.is_empty() {
        out.push_str("<p class=\"muted\">No category data</p>");
    } else {
        out.push_str("<ul id=\"category-stats\">");
        for entry in &stats.category_stats {
            let share = category_share(entry.count, stats.total_products);
            let _ = write!(
                out,
                "<li>{} <span class=\"bar\"><span style=\"width:{share:.0}%\"></span></span> {}</li>",
                escape(&entry.category),
                entry.count
            );
        }
        out.push_str("</ul>");
    }

    let _ = write!(
        out,
        "</div><div class=\"card\"><h3>Summary</h3><dl>\
         <dt>Active products</dt><dd>{}</dd>\
         <dt>Total orders</dt><dd>{}</dd>\
         <dt>Total revenue</dt><dd>{}</dd>\
         <dt>Average order value</dt><dd id=\"average-order\">{}</dd>\
         </dl></div></section>",
        stats.total_products,
        stats.total_orders,
        money(stats.total_revenue),
        money(average_order_value(stats))
    );

    out
}

fn status_badge(status: &OrderStatus) -> String {
    format!(
        "<span class=\"badge {}\">{}</span>",
        status_badge_class(status),
        escape(status.as_str())
    )
}
