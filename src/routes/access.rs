use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use serde::Deserialize;

use crate::config::ServerConfig;
use crate::services::ServiceError;
use crate::services::access::check_api_key;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Deserialize)]
struct ApiKeyQuery {
    api_key: Option<String>,
}

/// Extractor that rejects the request with 401 unless the shared secret
/// matches.
///
/// The key is read from the `x-api-key` header, falling back to the
/// `api_key` query parameter. Declare it before body extractors so that the
/// check runs before any upload is read.
#[derive(Debug, Clone, Copy)]
pub struct ApiAccess;

fn provided_key(req: &HttpRequest) -> Option<String> {
    let header = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    header.or_else(|| {
        web::Query::<ApiKeyQuery>::from_query(req.query_string())
            .ok()
            .and_then(|query| query.into_inner().api_key)
    })
}

impl FromRequest for ApiAccess {
    type Error = ServiceError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let Some(config) = req.app_data::<web::Data<ServerConfig>>() else {
            log::error!("Server configuration is not registered; denying API access");
            return ready(Err(ServiceError::Unauthorized));
        };

        let provided = provided_key(req);
        ready(check_api_key(config.api_key(), provided.as_deref()).map(|_| ApiAccess))
    }
}
