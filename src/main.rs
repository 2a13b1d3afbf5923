use std::process::ExitCode;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use tera::Tera;

use product_catalog::app::{AppState, cors};
use product_catalog::config::ServerConfig;
use product_catalog::db::{establish_connection_pool, run_migrations};
use product_catalog::repository::DieselRepository;
use product_catalog::uploads::UploadStore;

#[actix_web::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to open database '{}': {e}", config.database_url);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run_migrations(&pool) {
        log::error!("{e}");
        return ExitCode::FAILURE;
    }

    let store = if config.uploads_enabled {
        let store = UploadStore::new(&config.upload_dir);
        if let Err(e) = store.ensure_root() {
            log::error!(
                "Failed to create upload directory {}: {e}",
                store.root().display()
            );
            return ExitCode::FAILURE;
        }
        Some(store)
    } else {
        log::info!("Image uploads are disabled");
        None
    };

    let tera = match Tera::new(&format!("{}/**/*", config.templates_dir)) {
        Ok(tera) => tera,
        Err(e) => {
            log::error!("Failed to load templates: {e}");
            return ExitCode::FAILURE;
        }
    };

    let address = (config.bind_address.clone(), config.app_port);
    let state = AppState::new(config, DieselRepository::new(pool), store, tera);

    let server = match HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(Logger::default())
            .configure(|cfg| state.configure(cfg))
    })
    .bind(&address)
    {
        Ok(server) => server,
        Err(e) => {
            log::error!("Failed to bind {}:{}: {e}", address.0, address.1);
            return ExitCode::FAILURE;
        }
    };

    log::info!("Server listening on {}:{}", address.0, address.1);
    let result = server.run().await;
    log::info!("Server stopped, database pool closed");

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Server error: {e}");
            ExitCode::FAILURE
        }
    }
}
