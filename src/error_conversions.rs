//! Error conversion glue between layers.
//!
//! The domain and repository layers must not depend on service error types,
//! so the conversions into [`ServiceError`] live here.

use actix_web::error::BlockingError;

use crate::forms::products::AddProductFormError;
use crate::repository::RepositoryError;
use crate::services::ServiceError;

impl From<AddProductFormError> for ServiceError {
    fn from(val: AddProductFormError) -> Self {
        match val {
            AddProductFormError::MissingField(field) => ServiceError::MissingField(field.into()),
            AddProductFormError::Validation(message) => ServiceError::Form(message),
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(val: RepositoryError) -> Self {
        ServiceError::StorageFailure(val.to_string())
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(val: std::io::Error) -> Self {
        ServiceError::StorageFailure(val.to_string())
    }
}

impl From<BlockingError> for ServiceError {
    fn from(val: BlockingError) -> Self {
        ServiceError::StorageFailure(val.to_string())
    }
}
