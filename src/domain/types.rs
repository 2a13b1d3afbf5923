//! Strongly-typed value objects used by catalog entities.
//!
//! Products and images carry these wrappers instead of raw primitives so that
//! identifiers and required text fields are checked once, at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A required string was empty.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
}

impl TypeConstraintError {
    /// Name of the field that failed validation.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NonPositiveId(field) | Self::EmptyString(field) => field,
        }
    }
}

/// Keeps the value verbatim, rejecting only the empty string.
fn require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let value = value.into();
    if value.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(value)
    }
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }
    };
}

/// Macro for required text values; `$check` decides what counts as present.
macro_rules! required_text_newtype {
    ($name:ident, $doc:expr, $field:expr, $check:ident) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                $check(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

id_newtype!(ProductId, "Unique identifier for a product.", "product_id");
id_newtype!(
    ProductImageId,
    "Unique identifier for a stored product image.",
    "image_id"
);

required_text_newtype!(
    ProductName,
    "Product display name, stored exactly as submitted.",
    "name",
    require_non_empty
);
required_text_newtype!(
    DrawingNumber,
    "Drawing (program) number identifying the part, stored exactly as submitted.",
    "prog",
    require_non_empty
);
required_text_newtype!(
    ImagePath,
    "Relative path of a stored image, as written to the database.",
    "image path",
    trim_and_require_non_empty
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_product_text_verbatim() {
        assert_eq!(ProductName::new("  Knob  ").unwrap().as_str(), "  Knob  ");
        assert_eq!(DrawingNumber::new(" ").unwrap().as_str(), " ");
    }

    #[test]
    fn rejects_empty_text_with_field_name() {
        let err = DrawingNumber::new("").unwrap_err();
        assert_eq!(err, TypeConstraintError::EmptyString("prog"));
        assert_eq!(err.field(), "prog");
    }

    #[test]
    fn trims_image_paths() {
        assert_eq!(ImagePath::new(" uploads/a.png ").unwrap().as_str(), "uploads/a.png");
        assert!(ImagePath::new("  ").is_err());
    }

    #[test]
    fn rejects_non_positive_ids() {
        let err = ProductId::new(0).unwrap_err();
        assert_eq!(err, TypeConstraintError::NonPositiveId("product_id"));
        assert!(ProductImageId::new(-3).is_err());
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = ProductImageId::new(7).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }
}
