use diesel::prelude::*;

use crate::domain::catalog::CatalogRow;
use crate::domain::product::{NewProduct, NewProductImage};
use crate::domain::types::{ProductId, ProductImageId};
use crate::models::catalog::CatalogRow as DbCatalogRow;
use crate::models::product::NewProduct as DbNewProduct;
use crate::models::product_image::NewProductImage as DbNewProductImage;
use crate::repository::{DieselRepository, ProductReader, ProductWriter, RepositoryResult};

impl ProductReader for DieselRepository {
    fn list_catalog_rows(&self) -> RepositoryResult<Vec<CatalogRow>> {
        use crate::schema::{product_images, products};

        let mut conn = self.conn()?;

        let rows = products::table
            .left_join(product_images::table)
            .select((
                products::id,
                products::name,
                products::drawing_number,
                product_images::id.nullable(),
                product_images::image_path.nullable(),
            ))
            .order((products::id.asc(), product_images::id.nullable().asc()))
            .load::<DbCatalogRow>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<CatalogRow>, _>>()?;

        Ok(rows)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<ProductId> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_product: DbNewProduct = product.clone().into();

        let id = diesel::insert_into(products::table)
            .values(db_product)
            .returning(products::id)
            .get_result::<i32>(&mut conn)?;

        Ok(ProductId::new(id)?)
    }

    fn create_product_image(&self, image: &NewProductImage) -> RepositoryResult<ProductImageId> {
        use crate::schema::product_images;

        let mut conn = self.conn()?;
        let db_image: DbNewProductImage = image.clone().into();

        let id = diesel::insert_into(product_images::table)
            .values(db_image)
            .returning(product_images::id)
            .get_result::<i32>(&mut conn)?;

        Ok(ProductImageId::new(id)?)
    }
}
