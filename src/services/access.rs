use super::{ServiceError, ServiceResult};

/// Compares the supplied key with the configured shared secret.
///
/// Without a configured secret every request passes.
pub fn check_api_key(configured: Option<&str>, provided: Option<&str>) -> ServiceResult<()> {
    match configured {
        None => Ok(()),
        Some(expected) if provided == Some(expected) => Ok(()),
        Some(_) => Err(ServiceError::Unauthorized),
    }
}
