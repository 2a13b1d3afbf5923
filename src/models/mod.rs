//! Diesel row types mirroring the database schema.

pub mod catalog;
pub mod product;
pub mod product_image;
