use crate::db::{DbConnection, DbPool};
use crate::domain::catalog::CatalogRow;
use crate::domain::product::{NewProduct, NewProductImage};
use crate::domain::types::{ProductId, ProductImageId};

pub mod errors;
pub mod product;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be moved into blocking tasks freely.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for the catalog.
pub trait ProductReader {
    /// All products left-joined with their images, ordered by product id then
    /// image id. Products without images produce one row with empty image
    /// columns.
    fn list_catalog_rows(&self) -> RepositoryResult<Vec<CatalogRow>>;
}

/// Write operations for products and their images.
pub trait ProductWriter {
    /// Persist a new product and return its generated identifier.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<ProductId>;
    /// Persist an image row referencing an existing product.
    fn create_product_image(&self, image: &NewProductImage) -> RepositoryResult<ProductImageId>;
}
