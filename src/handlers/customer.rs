// src/handlers/customer.rs
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Local;
use crate::derivation::{derive, CustomerStatus};
use crate::dtos::customer::CustomerResponse;
use crate::dtos::list::{ListQuery, PaginatedResponse};
use crate::error::AppError;
use crate::models::customer::Customer;
use crate::state::AppState;
use tracing::instrument;

// GET /customers - Customers with order counts and derived status
#[instrument(skip(state))]
pub async fn list_customers(
    State(state): State<AppState>,
    Query(query): Query<ListQuery<CustomerStatus>>,
) -> Result<Json<PaginatedResponse<CustomerResponse>>, AppError> {
    let view = query.into_view_state(state.config.page_size)?;

    let customers = sqlx::query_as::<_, Customer>(
        "SELECT c.id, c.first_name, c.last_name, c.email, c.image_url,
                c.banned, c.locked, c.created_at,
                COUNT(o.id) AS order_count
         FROM customers c
         LEFT JOIN orders o ON o.email = c.email
         GROUP BY c.id
         ORDER BY c.first_name, c.id"
    )
    .fetch_all(&state.db_pool)
    .await?;

    let derived = derive(customers, &view, &Local::now());
    Ok(Json(PaginatedResponse::from_view(derived)))
}
