//! Service layer shared by the HTTP routes.
//!
//! Services are generic over the repository traits so they can run against
//! [`crate::repository::DieselRepository`] in production and mocks in tests.

use thiserror::Error;

use crate::query::{FindOptions, Identified, ListResponse, QueryError, QueryParams, SortField};
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod games;
pub mod platforms;
pub mod tags;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("resource not found")]
    NotFound,

    #[error(transparent)]
    InvalidParams(#[from] QueryError),

    #[error("invalid form: {0}")]
    Form(String),

    #[error("type constraint violated: {0}")]
    TypeConstraint(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("internal server error")]
    Internal,
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ConstraintViolation(message) => ServiceError::Conflict(message),
            RepositoryError::ValidationError(message) => ServiceError::TypeConstraint(message),
            other => {
                log::error!("Repository failure: {other}");
                ServiceError::Internal
            }
        }
    }
}

/// Resolves `params`, runs `fetch` with the result and wraps the returned
/// items in the envelope matching the requested strategy.
pub fn list_resource<F, T, L>(params: &QueryParams, fetch: L) -> ServiceResult<ListResponse<T>>
where
    F: SortField,
    T: Identified,
    L: FnOnce(&FindOptions<F>) -> RepositoryResult<Vec<T>>,
{
    let options = FindOptions::<F>::from_params(params).map_err(|err| {
        log::debug!("Rejected listing parameters: {err}");
        err
    })?;

    let items = fetch(&options)?;

    Ok(ListResponse::assemble(items, options.pagination()))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::domain::types::TypeConstraintError;
    use crate::query::{OrderSpec, Pagination, SeekCursor};

    crate::query::sort_fields! {
        enum Field {
            Id => "id",
        }
    }

    struct Row(i64);

    impl Identified for Row {
        fn identifier(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn invalid_params_never_reach_storage() {
        let called = Cell::new(false);
        let params: QueryParams = [("mode", "page"), ("limit", "abc")].into_iter().collect();

        let result = list_resource::<Field, Row, _>(&params, |_| {
            called.set(true);
            Ok(vec![])
        });

        match result {
            Err(ServiceError::InvalidParams(err)) => {
                assert_eq!(err.param(), "limit");
                assert_eq!(err.value(), "abc");
            }
            other => panic!("unexpected result: {:?}", other.map(|r| r.data().len())),
        }
        assert!(!called.get());
    }

    #[test]
    fn storage_receives_resolved_options() {
        let params: QueryParams = [("mode", "seek"), ("last_id", "1"), ("count", "2")]
            .into_iter()
            .collect();

        let response = list_resource::<Field, Row, _>(&params, |options| {
            assert_eq!(
                options.pagination(),
                Pagination::Seek {
                    last_id: 1,
                    count: 2
                }
            );
            assert_eq!(options.order(), OrderSpec::default());
            Ok(vec![Row(101), Row(301)])
        })
        .unwrap();

        assert_eq!(
            response.seek_cursor(),
            Some(SeekCursor {
                last_id: 301,
                count: 2
            })
        );
    }

    #[test]
    fn repository_errors_are_mapped() {
        assert!(matches!(
            ServiceError::from(RepositoryError::NotFound),
            ServiceError::NotFound
        ));
        assert!(matches!(
            ServiceError::from(RepositoryError::ConstraintViolation("dup".into())),
            ServiceError::Conflict(_)
        ));
        assert!(matches!(
            ServiceError::from(RepositoryError::ConnectionError("down".into())),
            ServiceError::Internal
        ));
    }

    #[test]
    fn corrupt_row_is_type_constraint() {
        let err = RepositoryError::from(TypeConstraintError::NonPositiveId);
        match ServiceError::from(err) {
            ServiceError::TypeConstraint(message) => {
                assert_eq!(message, "id must be greater than zero")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
