use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::derivation::{Amount, Record};

pub const ORDER_COLUMNS: &str = "id, first_name, last_name, email, phone, address, city, zip, country,
                payment_method,
                total::FLOAT8 AS total,
                status, tracking_number, carrier, created_at";

pub const ORDER_ITEM_COLUMNS: &str = "id, order_id, product_id, name,
                price::FLOAT8 AS price,
                quantity, size, image_url, sku";

/// Fulfilment state of an order. The database constrains it to these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(alias = "pending")]
    Pending,
    #[serde(alias = "shipped")]
    Shipped,
    #[serde(alias = "delivered")]
    Delivered,
    #[serde(alias = "cancelled")]
    Cancelled,
    #[serde(alias = "completed")]
    Completed,
}

impl OrderStatus {
    /// Statuses charted on the dashboard breakdown, in display order.
    pub const CHARTED: [OrderStatus; 3] = [OrderStatus::Shipped, OrderStatus::Pending, OrderStatus::Delivered];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOrderStatusError(String);

impl fmt::Display for ParseOrderStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown order status {:?}", self.0)
    }
}

impl std::error::Error for ParseOrderStatusError {}

impl FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "Shipped" => Ok(OrderStatus::Shipped),
            "Delivered" => Ok(OrderStatus::Delivered),
            "Cancelled" => Ok(OrderStatus::Cancelled),
            "Completed" => Ok(OrderStatus::Completed),
            other => Err(ParseOrderStatusError(other.to_string())),
        }
    }
}

impl TryFrom<String> for OrderStatus {
    type Error = ParseOrderStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Order {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub payment_method: String,
    pub total: f64,
    #[sqlx(try_from = "String")]
    pub status: OrderStatus,
    pub tracking_number: Option<String>,
    pub carrier: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn customer_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

impl Record for Order {
    type Status = OrderStatus;

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn status(&self) -> OrderStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.first_name.as_str(), self.last_name.as_str(), self.email.as_str()]
    }
}

impl Amount for Order {
    fn amount(&self) -> f64 {
        self.total
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: Option<i64>,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub size: Option<String>,
    pub image_url: Option<String>,
    pub sku: Option<String>,
}

impl Amount for OrderItem {
    fn amount(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[cfg(test)]
pub(crate) fn sample_order(id: i64, first_name: &str, status: OrderStatus, total: f64, created_at: Option<DateTime<Utc>>) -> Order {
    Order {
        id,
        first_name: first_name.to_string(),
        last_name: "Doe".into(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        phone: None,
        address: None,
        city: None,
        zip: None,
        country: None,
        payment_method: "Credit Card".into(),
        total,
        status,
        tracking_number: None,
        carrier: None,
        created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivation::filter::FilterParams;
    use crate::derivation::{aggregate_total, apply_filters};

    #[test]
    fn parses_every_known_status() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
            OrderStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
        assert!("Lost".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn status_filter_is_literal_equality() {
        let now = Utc::now();
        let orders = vec![
            sample_order(1, "Ana", OrderStatus::Pending, 10.0, Some(now)),
            sample_order(2, "Ben", OrderStatus::Shipped, 20.0, Some(now)),
        ];
        let params = FilterParams {
            status: Some(OrderStatus::Shipped),
            ..FilterParams::default()
        };
        let filtered = apply_filters(orders, &params, &now);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn search_matches_first_name_prefix() {
        let now = Utc::now();
        let orders = vec![
            sample_order(1, "Ana", OrderStatus::Pending, 10.0, Some(now)),
            sample_order(2, "Ben", OrderStatus::Pending, 20.0, Some(now)),
        ];
        let params = FilterParams {
            search: "an".into(),
            ..FilterParams::default()
        };
        let filtered = apply_filters(orders, &params, &now);
        assert_eq!(filtered.iter().map(|o| o.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn line_items_subtotal() {
        let items = vec![
            OrderItem {
                id: 1,
                order_id: 1,
                product_id: None,
                name: "Tee".into(),
                price: 12.5,
                quantity: 2,
                size: Some("M".into()),
                image_url: None,
                sku: None,
            },
            OrderItem {
                id: 2,
                order_id: 1,
                product_id: Some(4),
                name: "Jeans".into(),
                price: 40.0,
                quantity: 1,
                size: None,
                image_url: None,
                sku: None,
            },
        ];
        assert_eq!(aggregate_total(&items), 65.0);
    }
}
