//! Domain entities and value objects.

pub mod catalog;
pub mod product;
pub mod types;
