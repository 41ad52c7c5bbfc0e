//! Deferred query abstraction the paginator slices against

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::PaginationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Sort key applied to a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub field: String,
    pub direction: Direction,
}

impl SortOrder {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }
}

/// A source that accepts ordering, offset and limit before materializing.
///
/// Builder methods consume and return the query. Whether an explicit order is
/// present is tracked by the query itself, set by [`Queryable::order_by`].
#[async_trait]
pub trait Queryable: Sized + Send + Sync {
    type Item: Send;

    /// Explicit sort applied to this query, if any.
    fn ordering(&self) -> Option<&SortOrder>;

    fn has_explicit_order(&self) -> bool {
        self.ordering().is_some()
    }

    fn order_by(self, order: SortOrder) -> Self;

    fn skip(self, n: u64) -> Self;

    fn take(self, n: u64) -> Self;

    /// Number of rows in the source, ignoring any skip/take.
    async fn count(&self) -> PaginationResult<u64>;

    /// Execute and return the rows in order.
    async fn fetch(self) -> PaginationResult<Vec<Self::Item>>;
}
