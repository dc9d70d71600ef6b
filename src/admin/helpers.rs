//! Admin Display Helpers
//!
//! Small pure functions for presenting backend aggregates.

use chrono::{DateTime, NaiveDateTime};

use crate::api::models::{OrderStatus, RecordId, Stats};

/// Low-stock products listed on the dashboard.
pub const LOW_STOCK_PREVIEW: usize = 5;

/// Characters of an order id shown in the orders table.
const SHORT_ID_LEN: usize = 8;

/// Badge style for an order status.
pub fn status_badge_class(status: &OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "bg-yellow",
        OrderStatus::Paid => "bg-green",
        OrderStatus::Shipped => "bg-blue",
        OrderStatus::Delivered => "bg-purple",
        OrderStatus::Cancelled => "bg-red",
        OrderStatus::Other(_) => "bg-gray",
    }
}

/// Revenue per order, or zero when there are no orders.
pub fn average_order_value(stats: &Stats) -> f64 {
    if stats.total_orders == 0 {
        return 0.0;
    }

    stats.total_revenue / stats.total_orders as f64
}

/// Percentage of the catalog in one category, or zero for an empty catalog.
pub fn category_share(count: u64, total_products: u64) -> f64 {
    if total_products == 0 {
        return 0.0;
    }

    count as f64 / total_products as f64 * 100.0
}

/// Abbreviated order id, e.g. `1f0c2a9b...`.
pub fn short_id(id: &RecordId) -> String {
    let full = id.to_string();
    let short: String = full.chars().take(SHORT_ID_LEN).collect();

    format!("{short}...")
}

/// Calendar date of an ISO-8601 timestamp, with or without an offset.
/// Unparseable input is shown as received.
pub fn format_date(timestamp: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return parsed.format("%Y-%m-%d").to_string();
    }

    match NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(parsed) => parsed.format("%Y-%m-%d").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_per_status() {
        assert_eq!(status_badge_class(&OrderStatus::Pending), "bg-yellow");
        assert_eq!(status_badge_class(&OrderStatus::Cancelled), "bg-red");
        assert_eq!(
            status_badge_class(&OrderStatus::Other("refunded".into())),
            "bg-gray"
        );
    }

    #[test]
    fn average_guards_zero_orders() {
        let mut stats = Stats::default();
        assert_eq!(average_order_value(&stats), 0.0);

        stats.total_orders = 2;
        stats.total_revenue = 599.98;
        assert!((average_order_value(&stats) - 299.99).abs() < 1e-9);
    }

    #[test]
    fn share_of_catalog() {
        assert_eq!(category_share(1, 4), 25.0);
        assert_eq!(category_share(3, 0), 0.0);
    }

    #[test]
    fn short_ids() {
        assert_eq!(
            short_id(&RecordId::from("1f0c2a9b-77aa-4d1e")),
            "1f0c2a9b..."
        );
        assert_eq!(short_id(&RecordId::Number(42)), "42...");
    }

    #[test]
    fn dates_with_and_without_offset() {
        assert_eq!(format_date("2024-05-01T10:00:00.123456"), "2024-05-01");
        assert_eq!(format_date("2024-05-01T10:00:00"), "2024-05-01");
        assert_eq!(format_date("2024-05-01T23:30:00+02:00"), "2024-05-01");
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
