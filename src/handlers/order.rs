// src/handlers/order.rs
use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Local;
use crate::derivation::derive;
use crate::dtos::list::{ListQuery, PaginatedResponse};
use crate::dtos::order::{OrderDetailResponse, OrderSummary, UpdateOrderStatusRequest};
use crate::error::AppError;
use crate::models::order::{Order, OrderItem, OrderStatus, ORDER_COLUMNS, ORDER_ITEM_COLUMNS};
use crate::state::AppState;
use sqlx::PgPool;
use tracing::{info, instrument};

pub(crate) async fn fetch_orders(db_pool: &PgPool) -> Result<Vec<Order>, AppError> {
    let orders = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC NULLS LAST, id DESC"
    ))
    .fetch_all(db_pool)
    .await?;
    Ok(orders)
}

// GET /orders - Derived order list
#[instrument(skip(state))]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<ListQuery<OrderStatus>>,
) -> Result<Json<PaginatedResponse<OrderSummary>>, AppError> {
    let view = query.into_view_state(state.config.page_size)?;
    let orders = fetch_orders(&state.db_pool).await?;
    let derived = derive(orders, &view, &Local::now());
    Ok(Json(PaginatedResponse::from_view(derived)))
}

// GET /orders/:id - Order with line items
#[instrument(skip(state))]
pub async fn get_order(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<OrderDetailResponse>, AppError> {
    let order = sqlx::query_as::<_, Order>(&format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"))
        .bind(id)
        .fetch_optional(&state.db_pool)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))?;

    let items = sqlx::query_as::<_, OrderItem>(&format!(
        "SELECT {ORDER_ITEM_COLUMNS} FROM order_items WHERE order_id = $1 ORDER BY id"
    ))
    .bind(id)
    .fetch_all(&state.db_pool)
    .await?;

    Ok(Json(OrderDetailResponse::new(order, &items)))
}

// PATCH /orders/:id/status
#[instrument(skip(state, payload), fields(status = %payload.status))]
pub async fn update_order_status(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> Result<Json<OrderSummary>, AppError> {
    let order = sqlx::query_as::<_, Order>(&format!(
        "UPDATE orders SET
         status = $1,
         tracking_number = COALESCE($2, tracking_number),
         carrier = COALESCE($3, carrier)
         WHERE id = $4
         RETURNING {ORDER_COLUMNS}"
    ))
    .bind(payload.status.as_str())
    .bind(&payload.tracking_number)
    .bind(&payload.carrier)
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Order not found"))?;

    info!(id, status = %order.status, "Order status updated");
    Ok(Json(OrderSummary::from(order)))
}
