pub mod products;
pub mod users;
pub mod orders;
pub mod customers;
pub mod dashboard;

use axum::{http::HeaderValue, middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use crate::config::AppConfig;
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router<AppState> {
    let open = Router::new()
        .route("/", get(|| async { "Storefront Admin API" }))
        .route("/health", get(health_check))
        .merge(users::open_routes());

    let protected = Router::new()
        .merge(users::protected_routes())
        .merge(products::routes())
        .merge(orders::routes())
        .merge(customers::routes())
        .merge(dashboard::routes())
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    open.merge(protected)
}

/// The full application under the `/api` base path.
pub fn build_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    Router::new()
        .nest("/api", create_router(state.clone()))
        .layer(cors)
        .with_state(state)
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    match config.cors_origin.as_deref() {
        None => CorsLayer::permissive(),
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(origin) => CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(Any)
                .allow_headers(Any),
            Err(e) => {
                tracing::warn!(%origin, error = %e, "Invalid CORS_ORIGIN, allowing any origin");
                CorsLayer::permissive()
            }
        },
    }
}

async fn health_check() -> &'static str {
    "OK"
}
