use actix_web::{Responder, get, web};
use tera::Tera;

use crate::routes::{base_context, render_template};

#[get("/")]
pub async fn index(tera: web::Data<Tera>) -> impl Responder {
    render_template(&tera, "main/index.html", &base_context("index"))
}

#[get("/products")]
pub async fn show_products(tera: web::Data<Tera>) -> impl Responder {
    render_template(&tera, "products/index.html", &base_context("products"))
}

#[get("/add-product")]
pub async fn add_product(tera: web::Data<Tera>) -> impl Responder {
    render_template(&tera, "products/add.html", &base_context("add-product"))
}
