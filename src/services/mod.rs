pub use errors::{ServiceError, ServiceResult};

pub mod access;
pub mod errors;
pub mod products;
