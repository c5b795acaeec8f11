// src/handlers/dashboard.rs
use axum::{extract::State, Json};
use chrono::{DateTime, Local, TimeZone};
use crate::derivation::{aggregate_total, matches_date_range, DateRange};
use crate::dtos::dashboard::{DashboardResponse, DashboardStats, SalesBucket, StatusCount, TopSellingProduct};
use crate::dtos::order::OrderSummary;
use crate::error::AppError;
use crate::handlers::order::fetch_orders;
use crate::models::order::{Order, OrderStatus};
use crate::models::product::{Product, PRODUCT_COLUMNS};
use crate::state::AppState;
use tracing::instrument;

pub const RECENT_ORDERS_LIMIT: usize = 7;
pub const TOP_SELLING_TAG: &str = "bestselling";

// GET /dashboard - Summary tiles and chart data
#[instrument(skip(state))]
pub async fn get_dashboard(State(state): State<AppState>) -> Result<Json<DashboardResponse>, AppError> {
    let orders = fetch_orders(&state.db_pool).await?;

    let total_products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(&state.db_pool)
        .await?;
    let total_customers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
        .fetch_one(&state.db_pool)
        .await?;

    let top_selling = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE tags = $1 ORDER BY name"
    ))
    .bind(TOP_SELLING_TAG)
    .fetch_all(&state.db_pool)
    .await?;

    Ok(Json(build_dashboard(
        orders,
        total_products,
        total_customers,
        top_selling,
        &Local::now(),
    )))
}

/// Assembles the dashboard from already fetched data. `orders` must be newest first.
pub fn build_dashboard<Tz: TimeZone>(
    orders: Vec<Order>,
    total_products: i64,
    total_customers: i64,
    top_selling: Vec<Product>,
    now: &DateTime<Tz>,
) -> DashboardResponse {
    let stats = DashboardStats {
        total_revenue: aggregate_total(&orders),
        total_orders: orders.len(),
        total_products,
        total_customers,
    };

    DashboardResponse {
        stats,
        sales_chart: sales_chart(&orders, now),
        status_breakdown: status_breakdown(&orders),
        recent_orders: orders
            .into_iter()
            .take(RECENT_ORDERS_LIMIT)
            .map(OrderSummary::from)
            .collect(),
        top_selling: top_selling.into_iter().map(TopSellingProduct::from).collect(),
    }
}

fn sales_chart<Tz: TimeZone>(orders: &[Order], now: &DateTime<Tz>) -> Vec<SalesBucket> {
    DateRange::CHART_BUCKETS
        .iter()
        .map(|&range| SalesBucket {
            label: range.label(),
            sales: aggregate_total(
                orders
                    .iter()
                    .filter(|order| matches_date_range(order.created_at, range, now)),
            ),
        })
        .collect()
}

/// Counts per charted status; statuses with no orders are left out.
fn status_breakdown(orders: &[Order]) -> Vec<StatusCount> {
    OrderStatus::CHARTED
        .iter()
        .map(|&status| StatusCount {
            status,
            count: orders.iter().filter(|o| o.status == status).count(),
        })
        .filter(|entry| entry.count > 0)
        .collect()
}
