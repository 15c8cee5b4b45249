//! Resolution of listing parameters into [`FindOptions`].

use crate::query::errors::QueryError;
use crate::query::order::{OrderSpec, SortField};
use crate::query::pagination::{
    DEFAULT_COUNT, DEFAULT_LAST_ID, DEFAULT_LIMIT, DEFAULT_OFFSET, Pagination,
};
use crate::query::params::QueryParams;

const MODE: &str = "mode";
const LAST_ID: &str = "last_id";
const COUNT: &str = "count";
const LIMIT: &str = "limit";
const OFFSET: &str = "offset";
const ORDER: &str = "order";
const DESC: &str = "desc";

/// Validated description of how one listing request is windowed and ordered.
///
/// Built fresh per request and handed to storage by reference; never mutated
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FindOptions<F> {
    pagination: Pagination,
    order: OrderSpec<F>,
}

impl<F: SortField> FindOptions<F> {
    /// Combines a strategy and an ordering.
    ///
    /// Seek pagination only works over the identifier ordering, so under
    /// [`Pagination::Seek`] the supplied `order` is discarded.
    #[must_use]
    pub fn new(pagination: Pagination, order: OrderSpec<F>) -> Self {
        let order = if pagination.is_seek() {
            OrderSpec::default()
        } else {
            order
        };
        Self { pagination, order }
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn order(&self) -> OrderSpec<F> {
        self.order
    }

    /// Parses listing parameters.
    ///
    /// `mode` selects the strategy (`seek`, `page`, or absent for everything).
    /// Unless seek was selected, `desc` and `order` are then read; under seek
    /// they are not looked at at all, so malformed values there never fail.
    pub fn from_params(params: &QueryParams) -> Result<Self, QueryError> {
        let pagination = match params.get(MODE) {
            None | Some("") => Pagination::All,
            Some("seek") => Pagination::Seek {
                last_id: int_param(params, LAST_ID, DEFAULT_LAST_ID)?,
                count: int_param(params, COUNT, DEFAULT_COUNT)?,
            },
            Some("page") => Pagination::Page {
                limit: int_param(params, LIMIT, DEFAULT_LIMIT)?,
                offset: int_param(params, OFFSET, DEFAULT_OFFSET)?,
            },
            Some(other) => {
                return Err(QueryError::UnknownMode {
                    value: other.to_string(),
                });
            }
        };

        if pagination.is_seek() {
            return Ok(Self::new(pagination, OrderSpec::default()));
        }

        let descending = match params.get(DESC) {
            None => false,
            Some(raw) => parse_bool(raw).ok_or_else(|| QueryError::MalformedBoolean {
                param: DESC,
                value: raw.to_string(),
            })?,
        };

        let field = match params.get(ORDER) {
            None => F::IDENTIFIER,
            Some(raw) => F::from_name(raw).ok_or_else(|| QueryError::UnknownOrderField {
                value: raw.to_string(),
            })?,
        };

        Ok(Self::new(pagination, OrderSpec::new(field, descending)))
    }
}

impl<F: SortField> Default for FindOptions<F> {
    fn default() -> Self {
        Self::new(Pagination::All, OrderSpec::default())
    }
}

/// Reads an integer parameter, falling back to `default` only when the key
/// is absent.
fn int_param(params: &QueryParams, param: &'static str, default: i64) -> Result<i64, QueryError> {
    match params.get(param) {
        None => Ok(default),
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| QueryError::MalformedInteger {
                param,
                value: raw.to_string(),
            }),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
