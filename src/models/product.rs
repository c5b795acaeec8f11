use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::derivation::{classify_stock_status, Record, StockStatus};

/// Columns selected for every product query; money columns come back as FLOAT8.
pub const PRODUCT_COLUMNS: &str = "id, name, slug,
                price::FLOAT8            AS price,
                description, image_url, category, tags,
                discount_percent::FLOAT8 AS discount_percent,
                is_new, colors, sizes, stock, sku, status, created_at";

#[derive(Debug, Clone, FromRow)]
pub struct Product {
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
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn stock_status(&self) -> StockStatus {
        classify_stock_status(self.stock)
    }
}

impl Record for Product {
    type Status = StockStatus;

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn status(&self) -> StockStatus {
        self.stock_status()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.slug.as_str()];
        fields.extend(self.sku.as_deref());
        fields
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn price(&self) -> Option<f64> {
        Some(self.price)
    }
}

/// Editorial publication state stored alongside the product. Unrelated to
/// the derived [`StockStatus`] badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublicationStatus {
    Published,
    #[default]
    Draft,
    #[serde(alias = "Archieved")]
    Archived,
}

impl PublicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PublicationStatus::Published => "Published",
            PublicationStatus::Draft => "Draft",
            PublicationStatus::Archived => "Archived",
        }
    }
}

impl fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PublicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Published" => Ok(PublicationStatus::Published),
            "Draft" => Ok(PublicationStatus::Draft),
            "Archived" | "Archieved" => Ok(PublicationStatus::Archived),
            other => Err(format!("unknown publication status {other:?}")),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_product(name: &str, stock: i32) -> Product {
    Product {
        id: 1,
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        price: 25.0,
        description: None,
        image_url: None,
        category: "tshirt".into(),
        tags: None,
        discount_percent: 0.0,
        is_new: false,
        colors: vec![],
        sizes: vec![],
        stock,
        sku: Some("1001".into()),
        status: "Published".into(),
        created_at: Some(Utc::now()),
    }
}
