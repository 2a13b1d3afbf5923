use serde::{Deserialize, Serialize};

use crate::domain::catalog::{CatalogImage, CatalogProduct};
use crate::domain::product::InsertedImage;
use crate::domain::types::ProductId;

/// Response body of `POST /api/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedProductDto {
    pub product_id: i32,
    pub images: Vec<InsertedImageDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertedImageDto {
    pub inserted_id: i32,
    pub image_path: String,
}

/// Response body of `GET /api/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListDto {
    pub products: Vec<ProductDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub product_id: i32,
    pub name: String,
    pub drawing_number: String,
    pub images: Vec<ProductImageDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImageDto {
    pub image_id: i32,
    pub url: String,
}

impl CreatedProductDto {
    pub fn new(product_id: ProductId, images: Vec<InsertedImage>) -> Self {
        Self {
            product_id: product_id.get(),
            images: images.into_iter().map(InsertedImageDto::from).collect(),
        }
    }
}

impl From<InsertedImage> for InsertedImageDto {
    fn from(value: InsertedImage) -> Self {
        Self {
            inserted_id: value.id.get(),
            image_path: value.path.into_inner(),
        }
    }
}

impl From<CatalogImage> for ProductImageDto {
    fn from(value: CatalogImage) -> Self {
        Self {
            image_id: value.id.get(),
            url: value.url,
        }
    }
}

impl From<CatalogProduct> for ProductDto {
    fn from(value: CatalogProduct) -> Self {
        Self {
            product_id: value.id.get(),
            name: value.name,
            drawing_number: value.drawing_number,
            images: value.images.into_iter().map(ProductImageDto::from).collect(),
        }
    }
}
