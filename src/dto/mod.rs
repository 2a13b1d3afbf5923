//! JSON shapes returned by the API.

pub mod products;
