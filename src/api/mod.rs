//! API request/response types

pub mod pagination;
pub mod response;

pub use pagination::{PageLinker, Paginated, PaginationMeta, PaginationParams};
pub use response::Html;
