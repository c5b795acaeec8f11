use axum::{
    routing::{get, patch},
    Router,
};
use crate::handlers::order::{list_orders, get_order, update_order_status};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_orders))
        .route("/orders/{id}", get(get_order))
        .route("/orders/{id}/status", patch(update_order_status))
}
