//! Listing query resolution shared by every resource.
//!
//! Request parameters flow through [`FindOptions::from_params`] into a
//! validated [`FindOptions`] value, storage executes it, and
//! [`ListResponse::assemble`] turns the returned items back into a response
//! envelope carrying the right continuation descriptor.

pub mod errors;
pub mod options;
pub mod order;
pub mod page;
pub mod pagination;
pub mod params;

pub use errors::QueryError;
pub use options::FindOptions;
pub use order::{OrderSpec, SortField};
pub use page::{Identified, ListResponse, PageCursor, SeekCursor};
pub use pagination::Pagination;
pub use params::QueryParams;

pub(crate) use order::sort_fields;
