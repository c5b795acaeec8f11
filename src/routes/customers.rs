use axum::{routing::get, Router};
use crate::handlers::customer::list_customers;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/customers", get(list_customers))
}
