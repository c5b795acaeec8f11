use axum::{Router, routing::{post, get}};
use crate::state::AppState;
use crate::handlers::user::{register_admin, login_admin, get_me};

pub fn open_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register_admin))
        .route("/auth/login", post(login_admin))
}

pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/auth/me", get(get_me))
}
