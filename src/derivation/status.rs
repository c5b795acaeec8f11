// src/derivation/status.rs
use serde::{Deserialize, Serialize};

/// Stock level below which a product is shown as low stock.
pub const LOW_STOCK_THRESHOLD: i32 = 5;

/// Presentational stock badge. Derived from `stock`, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(alias = "published")]
    Published,
    #[serde(rename = "Low Stock", alias = "LowStock", alias = "low_stock")]
    LowStock,
    #[serde(rename = "Out of Stock", alias = "OutOfStock", alias = "out_of_stock")]
    OutOfStock,
}

pub fn classify_stock_status(stock: i32) -> StockStatus {
    if stock <= 0 {
        StockStatus::OutOfStock
    } else if stock < LOW_STOCK_THRESHOLD {
        StockStatus::LowStock
    } else {
        StockStatus::Published
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerStatus {
    #[serde(alias = "active")]
    Active,
    #[serde(alias = "blocked")]
    Blocked,
}

/// A customer flagged as banned or locked by the identity source is blocked.
pub fn classify_customer_status(banned: bool, locked: bool) -> CustomerStatus {
    if banned || locked {
        CustomerStatus::Blocked
    } else {
        CustomerStatus::Active
    }
}
