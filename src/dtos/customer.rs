// src/dtos/customer.rs
use serde::Serialize;

use crate::derivation::{CustomerStatus, Record};
use crate::models::customer::Customer;

#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
    pub order_quantity: i64,
    pub status: CustomerStatus,
    pub created_at: Option<String>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            name: customer.display_name(),
            status: customer.status(),
            id: customer.id,
            email: customer.email,
            image_url: customer.image_url,
            order_quantity: customer.order_count,
            created_at: customer.created_at.map(|dt| dt.to_rfc3339()),
        }
    }
}
