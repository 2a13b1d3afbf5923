use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::NewProductImage as DomainNewProductImage;

/// Insertable form of a `PRODUCT_IMAGES` row.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::product_images)]
pub struct NewProductImage {
    pub product_id: i32,
    pub image_path: String,
    pub uploaded_at: NaiveDateTime,
}

impl From<DomainNewProductImage> for NewProductImage {
    fn from(image: DomainNewProductImage) -> Self {
        Self {
            product_id: image.product_id.get(),
            image_path: image.path.into_inner(),
            uploaded_at: image.uploaded_at,
        }
    }
}
