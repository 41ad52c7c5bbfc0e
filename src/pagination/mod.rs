//! Offset pagination with overfetch next-page detection
//!
//! A request for page `n` of size `s` skips `(n - 1) * s` rows and takes `s + 1`.
//! The extra row, when present, proves a next page exists without a second
//! query; it is dropped before the page is returned.

pub mod error;
pub mod memory;
pub mod navigation;
pub mod ordering;
pub mod paginator;
pub mod postgres;
pub mod query;
pub mod render;
pub mod schema;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{PaginationError, PaginationResult};
pub use memory::MemoryQuery;
pub use navigation::{build_navigation, EdgeKind, NavEntry};
pub use ordering::{default_sort_field, ensure_ordered};
pub use paginator::{paginate, paginate_with_state, slice_in_memory, PageResult};
pub use postgres::PgQuery;
pub use query::{Direction, Queryable, SortOrder};
pub use render::{render_entry, render_navigation, AjaxOptions, NavConfig, NavLabels};
pub use schema::{Field, FieldKind, Record, Schema, SortValue};
pub use state::PageState;
