// src/dtos/order.rs
use serde::{Deserialize, Serialize};

use crate::derivation::{aggregate_total, Amount};
use crate::models::order::{Order, OrderItem, OrderStatus};

#[derive(Debug, Serialize)]
pub struct OrderSummary {
    pub id: i64,
    pub customer_name: String,
    pub email: String,
    pub total: f64,
    pub payment_method: String,
    pub status: OrderStatus,
    pub created_at: Option<String>,
}

impl From<Order> for OrderSummary {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            customer_name: order.customer_name(),
            email: order.email,
            total: order.total,
            payment_method: order.payment_method,
            status: order.status,
            created_at: order.created_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderItemResponse {
    pub id: i64,
    pub product_id: Option<i64>,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub size: Option<String>,
    pub image_url: Option<String>,
    pub sku: Option<String>,
    pub line_total: f64,
}

impl From<&OrderItem> for OrderItemResponse {
    fn from(item: &OrderItem) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
            size: item.size.clone(),
            image_url: item.image_url.clone(),
            sku: item.sku.clone(),
            line_total: item.amount(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderDetailResponse {
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
    pub status: OrderStatus,
    pub tracking_number: Option<String>,
    pub carrier: Option<String>,
    pub created_at: Option<String>,
    pub items: Vec<OrderItemResponse>,
    pub subtotal: f64,
    pub total: f64,
}

impl OrderDetailResponse {
    pub fn new(order: Order, items: &[OrderItem]) -> Self {
        Self {
            subtotal: aggregate_total(items),
            items: items.iter().map(OrderItemResponse::from).collect(),
            id: order.id,
            first_name: order.first_name,
            last_name: order.last_name,
            email: order.email,
            phone: order.phone,
            address: order.address,
            city: order.city,
            zip: order.zip,
            country: order.country,
            payment_method: order.payment_method,
            status: order.status,
            tracking_number: order.tracking_number,
            carrier: order.carrier,
            created_at: order.created_at.map(|dt| dt.to_rfc3339()),
            total: order.total,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
    pub tracking_number: Option<String>,
    pub carrier: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::sample_order;

    #[test]
    fn detail_subtotals_line_items() {
        let order = sample_order(7, "Ana", OrderStatus::Pending, 65.0, None);
        let items = vec![
            OrderItem {
                id: 1,
                order_id: 7,
                product_id: Some(2),
                name: "Tee".into(),
                price: 12.5,
                quantity: 2,
                size: None,
                image_url: None,
                sku: None,
            },
            OrderItem {
                id: 2,
                order_id: 7,
                product_id: None,
                name: "Jeans".into(),
                price: 40.0,
                quantity: 1,
                size: None,
                image_url: None,
                sku: None,
            },
        ];
        let detail = OrderDetailResponse::new(order, &items);
        assert_eq!(detail.subtotal, 65.0);
        assert_eq!(detail.items[0].line_total, 25.0);
        assert!(detail.created_at.is_none());
    }

    #[test]
    fn status_update_rejects_unknown_status() {
        let bad = serde_json::from_str::<UpdateOrderStatusRequest>(r#"{"status":"Lost"}"#);
        assert!(bad.is_err());
        let ok: UpdateOrderStatusRequest = serde_json::from_str(r#"{"status":"shipped","carrier":"DHL"}"#).unwrap();
        assert_eq!(ok.status, OrderStatus::Shipped);
    }
}
