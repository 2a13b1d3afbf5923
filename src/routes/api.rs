use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, ResponseError, get, post, web};

use crate::forms::products::{AddProductForm, AddProductFormPayload};
use crate::repository::DieselRepository;
use crate::routes::access::ApiAccess;
use crate::services::ServiceError;
use crate::services::products::{
    create_product as create_product_service, list_products as list_products_service,
};
use crate::uploads::UploadStore;

#[post("/api/products")]
pub async fn create_product(
    _access: ApiAccess,
    repo: web::Data<DieselRepository>,
    store: Option<web::Data<UploadStore>>,
    MultipartForm(form): MultipartForm<AddProductForm>,
) -> impl Responder {
    let payload: AddProductFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return ServiceError::from(e).error_response(),
    };

    let store = store.as_ref().map(|store| store.get_ref());
    match create_product_service(payload, repo.get_ref(), store).await {
        Ok(created) => HttpResponse::Ok().json(created),
        Err(err) => err.error_response(),
    }
}

#[get("/api/products")]
pub async fn list_products(_access: ApiAccess, repo: web::Data<DieselRepository>) -> impl Responder {
    let repo = repo.get_ref().clone();
    match web::block(move || list_products_service(&repo)).await {
        Ok(Ok(products)) => HttpResponse::Ok().json(products),
        Ok(Err(err)) => err.error_response(),
        Err(e) => {
            log::error!("Failed to run product listing: {e}");
            ServiceError::from(e).error_response()
        }
    }
}
