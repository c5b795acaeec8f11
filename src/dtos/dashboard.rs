// src/dtos/dashboard.rs
use serde::Serialize;

use crate::derivation::StockStatus;
use crate::dtos::order::OrderSummary;
use crate::models::order::OrderStatus;
use crate::models::product::Product;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub sales_chart: Vec<SalesBucket>,
    pub status_breakdown: Vec<StatusCount>,
    pub recent_orders: Vec<OrderSummary>,
    pub top_selling: Vec<TopSellingProduct>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct DashboardStats {
    pub total_revenue: f64,
    pub total_orders: usize,
    pub total_products: i64,
    pub total_customers: i64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SalesBucket {
    pub label: &'static str,
    pub sales: f64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct StatusCount {
    pub status: OrderStatus,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct TopSellingProduct {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub category: String,
    pub price: f64,
    pub stock: i32,
    pub stock_status: StockStatus,
}

impl From<Product> for TopSellingProduct {
    fn from(product: Product) -> Self {
        Self {
            stock_status: product.stock_status(),
            id: product.id,
            name: product.name,
            image_url: product.image_url,
            category: product.category,
            price: product.price,
            stock: product.stock,
        }
    }
}
