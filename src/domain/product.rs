use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{DrawingNumber, ImagePath, ProductId, ProductImageId, ProductName};

/// Information required to create a new product.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct NewProduct {
    pub name: ProductName,
    pub drawing_number: DrawingNumber,
    pub created_at: NaiveDateTime,
}

/// Information required to attach a stored image to an existing product.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct NewProductImage {
    pub product_id: ProductId,
    pub path: ImagePath,
    pub uploaded_at: NaiveDateTime,
}

/// Identifier and stored path of an image row that was just inserted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsertedImage {
    pub id: ProductImageId,
    pub path: ImagePath,
}
