// src/handlers/product.rs
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Local;
use crate::derivation::{derive, StockStatus};
use crate::dtos::list::{ListQuery, PaginatedResponse};
use crate::dtos::product::{
    BulkDeleteRequest, BulkDeleteResponse, CreateProductRequest, ProductResponse, UpdateProductRequest,
};
use crate::error::{map_unique_violation, AppError};
use crate::models::product::{Product, PRODUCT_COLUMNS};
use crate::state::AppState;
use tracing::{error, info, instrument};

// GET /products - Derived product list
#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery<StockStatus>>,
) -> Result<Json<PaginatedResponse<ProductResponse>>, AppError> {
    let view = query.into_view_state(state.config.page_size)?;

    let products = match sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at DESC NULLS LAST, id DESC"
    ))
    .fetch_all(&state.db_pool)
    .await
    {
        Ok(products) => products,
        Err(e) => {
            error!(?e, "Failed to fetch products");
            return Err(e.into());
        }
    };

    let derived = derive(products, &view, &Local::now());
    Ok(Json(PaginatedResponse::from_view(derived)))
}

// GET /products/:id
#[instrument(skip(state))]
pub async fn get_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(ProductResponse::from(product)))
}

// GET /products/slug/:slug
#[instrument(skip(state))]
pub async fn get_product_by_slug(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE slug = $1"
    ))
    .bind(&slug)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(ProductResponse::from(product)))
}

// POST /products
#[instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let slug = payload.validate()?;

    let product = sqlx::query_as::<_, Product>(&format!(
        "INSERT INTO products
            (name, slug, price, description, image_url, category, tags,
             discount_percent, is_new, colors, sizes, stock, sku, status)
         VALUES ($1, $2, $3::FLOAT8, $4, $5, $6, $7, $8::FLOAT8, $9, $10, $11, $12, $13, $14)
         RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(payload.name.trim())
    .bind(&slug)
    .bind(payload.price)
    .bind(&payload.description)
    .bind(&payload.image_url)
    .bind(payload.category.trim())
    .bind(&payload.tags)
    .bind(payload.discount_percent.unwrap_or(0.0))
    .bind(payload.is_new)
    .bind(&payload.colors)
    .bind(&payload.sizes)
    .bind(payload.stock)
    .bind(&payload.sku)
    .bind(payload.status.as_str())
    .fetch_one(&state.db_pool)
    .await
    .map_err(|e| map_unique_violation(e, "Product slug already exists"))?;

    info!(id = product.id, slug = %product.slug, "Product created");
    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

// PUT /products/:id
#[instrument(skip(state, payload))]
pub async fn update_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(mut payload): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    payload.validate()?;

    let product = sqlx::query_as::<_, Product>(&format!(
        "UPDATE products SET
         name = COALESCE($1, name),
         slug = COALESCE($2, slug),
         price = COALESCE($3::FLOAT8, price),
         description = COALESCE($4, description),
         image_url = COALESCE($5, image_url),
         category = COALESCE($6, category),
         tags = COALESCE($7, tags),
         discount_percent = COALESCE($8::FLOAT8, discount_percent),
         is_new = COALESCE($9, is_new),
         colors = COALESCE($10, colors),
         sizes = COALESCE($11, sizes),
         stock = COALESCE($12, stock),
         sku = COALESCE($13, sku),
         status = COALESCE($14, status)
         WHERE id = $15
         RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(payload.name.as_deref().map(str::trim))
    .bind(&payload.slug)
    .bind(payload.price)
    .bind(&payload.description)
    .bind(&payload.image_url)
    .bind(payload.category.as_deref().map(str::trim))
    .bind(&payload.tags)
    .bind(payload.discount_percent)
    .bind(payload.is_new)
    .bind(&payload.colors)
    .bind(&payload.sizes)
    .bind(payload.stock)
    .bind(&payload.sku)
    .bind(payload.status.map(|s| s.as_str()))
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await
    .map_err(|e| map_unique_violation(e, "Product slug already exists"))?
    .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(ProductResponse::from(product)))
}

// DELETE /products/:id
#[instrument(skip(state))]
pub async fn delete_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(&state.db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Product not found"));
    }

    info!(id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}

// DELETE /products - Remove several products at once
#[instrument(skip(state, payload), fields(count = payload.ids.len()))]
pub async fn delete_products(
    State(state): State<AppState>,
    Json(payload): Json<BulkDeleteRequest>,
) -> Result<Json<BulkDeleteResponse>, AppError> {
    if payload.ids.is_empty() {
        return Err(AppError::validation("No product ids provided"));
    }

    let result = sqlx::query("DELETE FROM products WHERE id = ANY($1)")
        .bind(&payload.ids)
        .execute(&state.db_pool)
        .await?;

    info!(deleted = result.rows_affected(), "Products deleted");
    Ok(Json(BulkDeleteResponse {
        deleted: result.rows_affected(),
    }))
}
