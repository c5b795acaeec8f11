// src/dtos/product.rs
use serde::{Deserialize, Serialize};

use crate::derivation::StockStatus;
use crate::error::AppError;
use crate::models::product::{Product, PublicationStatus};

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub slug: Option<String>,
    pub price: f64,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: String,
    pub tags: Option<String>,
    pub discount_percent: Option<f64>,
    #[serde(default, alias = "new")]
    pub is_new: bool,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    pub stock: i32,
    pub sku: Option<String>,
    #[serde(default)]
    pub status: PublicationStatus,
}

impl CreateProductRequest {
    /// Checks field ranges and returns the slug to store.
    pub fn validate(&self) -> Result<String, AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Product name is required"));
        }
        validate_price(self.price)?;
        validate_stock(self.stock)?;
        if let Some(discount) = self.discount_percent {
            validate_discount(discount)?;
        }

        let slug = match self.slug.as_deref() {
            Some(s) if !s.trim().is_empty() => slugify(s),
            _ => slugify(&self.name),
        };
        if slug.is_empty() {
            return Err(AppError::validation("Slug must contain letters or digits"));
        }
        Ok(slug)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub discount_percent: Option<f64>,
    #[serde(alias = "new")]
    pub is_new: Option<bool>,
    pub colors: Option<Vec<String>>,
    pub sizes: Option<Vec<String>>,
    pub stock: Option<i32>,
    pub sku: Option<String>,
    pub status: Option<PublicationStatus>,
}

impl UpdateProductRequest {
    /// Validates the fields that are present and normalises the slug.
    pub fn validate(&mut self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Product name cannot be empty"));
            }
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(stock) = self.stock {
            validate_stock(stock)?;
        }
        if let Some(discount) = self.discount_percent {
            validate_discount(discount)?;
        }
        if let Some(slug) = self.slug.take() {
            let slug = slugify(&slug);
            if slug.is_empty() {
                return Err(AppError::validation("Slug must contain letters or digits"));
            }
            self.slug = Some(slug);
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    #[serde(alias = "documentIds")]
    pub ids: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct BulkDeleteResponse {
    pub deleted: u64,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub price: f64,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: String,
    pub tags: Option<String>,
    pub discount_percent: f64,
    pub is_new: bool,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub stock: i32,
    pub sku: Option<String>,
    pub publication_status: PublicationStatus,
    pub stock_status: StockStatus,
    pub created_at: Option<String>,
}

// Convert from Model to Response DTO
impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let stock_status = product.stock_status();
        Self {
            id: product.id,
            name: product.name,
            slug: product.slug,
            price: product.price,
            description: product.description,
            image_url: product.image_url,
            category: product.category,
            tags: product.tags,
            discount_percent: product.discount_percent,
            is_new: product.is_new,
            colors: product.colors,
            sizes: product.sizes,
            stock: product.stock,
            sku: product.sku,
            publication_status: product.status.parse().unwrap_or_default(),
            stock_status,
            created_at: product.created_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

fn validate_price(price: f64) -> Result<(), AppError> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::validation("Price cannot be negative"));
    }
    Ok(())
}

fn validate_stock(stock: i32) -> Result<(), AppError> {
    if stock < 0 {
        return Err(AppError::validation("Stock cannot be negative"));
    }
    Ok(())
}

fn validate_discount(discount: f64) -> Result<(), AppError> {
    if !(0.0..=100.0).contains(&discount) {
        return Err(AppError::validation("Discount percent must be between 0 and 100"));
    }
    Ok(())
}

/// Lowercase, ASCII alphanumerics separated by single dashes.
pub fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut pending_dash = false;
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
