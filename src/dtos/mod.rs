pub mod customer;
pub mod dashboard;
pub mod list;
pub mod order;
pub mod product;
pub mod user;
