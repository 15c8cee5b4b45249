//! Conversions out of domain error types.
//!
//! Stored rows that no longer satisfy a domain constraint surface as
//! repository validation errors.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

