use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// A required text field was absent or blank.
    #[error("{0} is required")]
    MissingField(String),
    /// The submitted form was malformed in some other way.
    #[error("{0}")]
    Form(String),
    /// The shared secret was missing or wrong.
    #[error("unauthorized")]
    Unauthorized,
    /// Any persistence or filesystem failure.
    #[error("storage failure: {0}")]
    StorageFailure(String),
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField(_) | Self::Form(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::StorageFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::MissingField(field) => json!({
                "error": "name and prog are required",
                "details": format!("{field} is required"),
            }),
            Self::Form(message) => json!({ "error": "Invalid form", "details": message }),
            Self::Unauthorized => json!({ "error": "Unauthorized" }),
            Self::StorageFailure(message) => json!({ "error": "Storage error", "details": message }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
