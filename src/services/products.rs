use actix_web::web;
use chrono::Utc;
use futures::future::try_join_all;

use crate::domain::catalog::group_rows;
use crate::domain::product::{InsertedImage, NewProduct, NewProductImage};
use crate::dto::products::{CreatedProductDto, ProductDto, ProductListDto};
use crate::forms::products::AddProductFormPayload;
use crate::repository::{ProductReader, ProductWriter};
use crate::uploads::{StoredFile, UploadStore};

use super::{ServiceError, ServiceResult};

/// Creates a product and attaches the uploaded images.
///
/// Files are written to `store` first, then the product row is inserted and
/// finally one image row per file is inserted concurrently. The steps are
/// not atomic: when an image insert fails the product row (and any image
/// rows that already completed) stay in the database and the whole call
/// reports [`ServiceError::StorageFailure`].
///
/// Passing `None` for `store` disables uploads; submitted files are ignored.
pub async fn create_product<R>(
    payload: AddProductFormPayload,
    repo: &R,
    store: Option<&UploadStore>,
) -> ServiceResult<CreatedProductDto>
where
    R: ProductWriter + Clone + Send + 'static,
{
    let AddProductFormPayload {
        name,
        drawing_number,
        images,
    } = payload;

    let stored = match store {
        Some(store) if !images.is_empty() => {
            let store = store.clone();
            web::block(move || {
                images
                    .iter()
                    .map(|file| store.save(file))
                    .collect::<std::io::Result<Vec<StoredFile>>>()
            })
            .await?
            .map_err(|e| {
                log::error!("Failed to store uploaded images: {e}");
                ServiceError::from(e)
            })?
        }
        Some(_) => Vec::new(),
        None => {
            if !images.is_empty() {
                log::warn!("Uploads are disabled, ignoring {} file(s)", images.len());
            }
            Vec::new()
        }
    };

    let now = Utc::now().naive_utc();
    let new_product = NewProduct {
        name,
        drawing_number,
        created_at: now,
    };
    let product_repo = repo.clone();
    let product_id = web::block(move || product_repo.create_product(&new_product))
        .await?
        .map_err(|e| {
            log::error!("Failed to create product: {e}");
            ServiceError::from(e)
        })?;

    let inserts = stored.into_iter().map(|file| {
        let repo = repo.clone();
        let image = NewProductImage {
            product_id,
            path: file.relative_path,
            uploaded_at: now,
        };
        async move {
            let path = image.path.clone();
            let id = web::block(move || repo.create_product_image(&image)).await??;
            Ok::<_, ServiceError>(InsertedImage { id, path })
        }
    });

    let images = try_join_all(inserts).await.map_err(|e| {
        log::error!("Failed to attach images to product {product_id}: {e}");
        e
    })?;

    Ok(CreatedProductDto::new(product_id, images))
}

/// Lists every product with its images, cover image first.
pub fn list_products<R>(repo: &R) -> ServiceResult<ProductListDto>
where
    R: ProductReader,
{
    match repo.list_catalog_rows() {
        Ok(rows) => Ok(ProductListDto {
            products: group_rows(rows).into_iter().map(ProductDto::from).collect(),
        }),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(e.into())
        }
    }
}
