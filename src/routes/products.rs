use axum::{
    routing::get,
    Router,
};
use crate::handlers::product::{
    list_products, get_product, get_product_by_slug, create_product, update_product, delete_product, delete_products
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product).delete(delete_products))
        .route("/products/{id}", get(get_product).put(update_product).delete(delete_product))
        .route("/products/slug/{slug}", get(get_product_by_slug))
}
