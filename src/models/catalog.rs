use diesel::prelude::*;

use crate::domain::catalog::CatalogRow as DomainCatalogRow;
use crate::domain::types::TypeConstraintError;

/// Flat row selected from `PRODUCT LEFT JOIN PRODUCT_IMAGES`.
#[derive(Debug, Clone, Queryable)]
pub struct CatalogRow {
    pub product_id: i32,
    pub name: String,
    pub drawing_number: String,
    pub image_id: Option<i32>,
    pub image_path: Option<String>,
}

impl TryFrom<CatalogRow> for DomainCatalogRow {
    type Error = TypeConstraintError;

    fn try_from(row: CatalogRow) -> Result<Self, Self::Error> {
        Ok(Self {
            product_id: row.product_id.try_into()?,
            name: row.name,
            drawing_number: row.drawing_number,
            image_id: row.image_id.map(TryInto::try_into).transpose()?,
            image_path: row.image_path,
        })
    }
}
