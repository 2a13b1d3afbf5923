//! Process-wide handles shared by every worker.

use actix_cors::Cors;
use actix_multipart::form::MultipartFormConfig;
use actix_web::web;
use tera::Tera;

use crate::config::ServerConfig;
use crate::forms::products::MAX_IMAGES;
use crate::repository::DieselRepository;
use crate::routes;
use crate::services::ServiceError;
use crate::uploads::{PUBLIC_PREFIX, UploadStore};

const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;
const MAX_TEXT_BYTES: usize = 1024 * 1024;

/// Accepts cross-origin `GET`/`POST` requests from any origin with any headers.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST"])
        .allow_any_header()
        .max_age(3600)
}

/// Resources opened at startup and injected into handlers.
///
/// The database pool lives inside the repository and is closed when the last
/// clone of the state is dropped at shutdown.
#[derive(Clone)]
pub struct AppState {
    config: web::Data<ServerConfig>,
    repo: web::Data<DieselRepository>,
    store: Option<web::Data<UploadStore>>,
    tera: web::Data<Tera>,
}

impl AppState {
    /// `store` is `None` when uploads are disabled.
    pub fn new(
        config: ServerConfig,
        repo: DieselRepository,
        store: Option<UploadStore>,
        tera: Tera,
    ) -> Self {
        Self {
            config: web::Data::new(config),
            repo: web::Data::new(repo),
            store: store.map(web::Data::new),
            tera: web::Data::new(tera),
        }
    }

    /// Registers shared data, static uploads and all routes.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        let multipart = MultipartFormConfig::default()
            .total_limit(MAX_IMAGES * MAX_IMAGE_BYTES + MAX_TEXT_BYTES)
            .error_handler(|err, _req| ServiceError::Form(err.to_string()).into());

        cfg.app_data(self.config.clone())
            .app_data(self.repo.clone())
            .app_data(self.tera.clone())
            .app_data(multipart);

        if let Some(store) = &self.store {
            cfg.app_data(store.clone()).service(actix_files::Files::new(
                &format!("/{PUBLIC_PREFIX}"),
                store.root().to_path_buf(),
            ));
        }

        routes::configure(cfg);
    }
}
