//! Read model for the catalog listing.
//!
//! The repository produces one [`CatalogRow`] per product/image pair of a
//! left join ordered by product id then image id. [`group_rows`] folds those
//! rows into one [`CatalogProduct`] per product, keeping join order so the
//! first image of each product is its cover image.

use serde::{Deserialize, Serialize};

use crate::domain::types::{ProductId, ProductImageId};

/// One row of the product/image left join.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    pub product_id: ProductId,
    pub name: String,
    pub drawing_number: String,
    pub image_id: Option<ProductImageId>,
    pub image_path: Option<String>,
}

/// An image as presented to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogImage {
    pub id: ProductImageId,
    pub url: String,
}

/// A product with its images in join order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogProduct {
    pub id: ProductId,
    pub name: String,
    pub drawing_number: String,
    pub images: Vec<CatalogImage>,
}

impl CatalogProduct {
    /// First image in join order, if any.
    pub fn cover_image(&self) -> Option<&CatalogImage> {
        self.images.first()
    }
}

/// Turns a stored image path into a URL usable by the browser.
///
/// Backslash separators become forward slashes and a leading `/` is added
/// when missing.
pub fn normalize_image_url(path: &str) -> String {
    let url = path.replace('\\', "/");
    if url.starts_with('/') {
        url
    } else {
        format!("/{url}")
    }
}

/// Groups ordered join rows into products.
///
/// Rows must arrive ordered by product id so that rows of the same product
/// are adjacent. Null image columns (products without images) are dropped
/// rather than turned into placeholder entries.
pub fn group_rows(rows: impl IntoIterator<Item = CatalogRow>) -> Vec<CatalogProduct> {
    let mut products: Vec<CatalogProduct> = Vec::new();

    for row in rows {
        let starts_new = products
            .last()
            .is_none_or(|current| current.id != row.product_id);
        if starts_new {
            products.push(CatalogProduct {
                id: row.product_id,
                name: row.name,
                drawing_number: row.drawing_number,
                images: Vec::new(),
            });
        }

        let (Some(image_id), Some(path)) = (row.image_id, row.image_path) else {
            continue;
        };
        if path.is_empty() {
            continue;
        }
        if let Some(current) = products.last_mut() {
            current.images.push(CatalogImage {
                id: image_id,
                url: normalize_image_url(&path),
            });
        }
    }

    products
}
