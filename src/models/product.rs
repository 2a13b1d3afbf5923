use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::NewProduct as DomainNewProduct;

/// Insertable form of a `PRODUCT` row.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub name: String,
    pub drawing_number: String,
    pub created_at: NaiveDateTime,
}

impl From<DomainNewProduct> for NewProduct {
    fn from(product: DomainNewProduct) -> Self {
        Self {
            name: product.name.into_inner(),
            drawing_number: product.drawing_number.into_inner(),
            created_at: product.created_at,
        }
    }
}
