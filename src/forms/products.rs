use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use thiserror::Error;

use crate::domain::types::{DrawingNumber, ProductName, TypeConstraintError};

/// Maximum number of images accepted in one submission.
pub const MAX_IMAGES: usize = 20;

/// Multipart body of `POST /api/products`.
///
/// Text fields are optional at the parsing level so that a missing field is
/// reported as [`AddProductFormError::MissingField`] instead of a generic
/// multipart error.
#[derive(MultipartForm)]
pub struct AddProductForm {
    pub name: Option<Text<String>>,
    pub prog: Option<Text<String>>,
    #[multipart(limit = "10MB")]
    pub images: Vec<TempFile>,
}

/// Validated product submission.
pub struct AddProductFormPayload {
    pub name: ProductName,
    pub drawing_number: DrawingNumber,
    pub images: Vec<TempFile>,
}

#[derive(Debug, Error, PartialEq)]
pub enum AddProductFormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Add product form validation failed: {0}")]
    Validation(String),
}

impl From<TypeConstraintError> for AddProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::MissingField(value.field())
    }
}

fn required(field: Option<Text<String>>, name: &'static str) -> Result<String, AddProductFormError> {
    field
        .map(Text::into_inner)
        .ok_or(AddProductFormError::MissingField(name))
}

impl TryFrom<AddProductForm> for AddProductFormPayload {
    type Error = AddProductFormError;

    fn try_from(value: AddProductForm) -> Result<Self, Self::Error> {
        if value.images.len() > MAX_IMAGES {
            return Err(AddProductFormError::Validation(format!(
                "at most {MAX_IMAGES} images can be uploaded at once, got {}",
                value.images.len()
            )));
        }

        let name = ProductName::new(required(value.name, "name")?)?;
        let drawing_number = DrawingNumber::new(required(value.prog, "prog")?)?;

        Ok(Self {
            name,
            drawing_number,
            images: value.images,
        })
    }
}
