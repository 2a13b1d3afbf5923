use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use actix_web::web;
use tera::{Context, Tera};

use crate::forms::products::MAX_IMAGES;

pub mod access;
pub mod api;
pub mod main;

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(body),
        Err(e) => {
            log::error!("Failed to render template '{template}': {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn base_context(current_page: &str) -> Context {
    let mut context = Context::new();
    context.insert("current_page", current_page);
    context.insert("max_images", &MAX_IMAGES);
    context
}

/// Registers the API and page handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api::create_product)
        .service(api::list_products)
        .service(main::index)
        .service(main::show_products)
        .service(main::add_product);
}
