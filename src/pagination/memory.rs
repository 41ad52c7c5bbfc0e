//! In-memory `Queryable` over an owned `Vec`

use async_trait::async_trait;
use thiserror::Error;

use super::error::{PaginationError, PaginationResult};
use super::query::{Direction, Queryable, SortOrder};
use super::schema::{Record, SortValue};

#[derive(Debug, Error)]
pub enum MemoryQueryError {
    #[error("Entity '{entity}' has no sortable field '{field}'")]
    UnknownField { entity: &'static str, field: String },
}

/// Vector-backed query with SQL-like offset/limit semantics.
#[derive(Debug, Clone)]
pub struct MemoryQuery<T> {
    rows: Vec<T>,
    order: Option<SortOrder>,
    offset: u64,
    limit: Option<u64>,
}

impl<T: Record> MemoryQuery<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows,
            order: None,
            offset: 0,
            limit: None,
        }
    }

    fn check_field(field: &str) -> PaginationResult<()> {
        let known = T::fields()
            .iter()
            .any(|f| f.name == field && f.kind.is_scalar());

        if known {
            Ok(())
        } else {
            Err(PaginationError::source_query(MemoryQueryError::UnknownField {
                entity: T::NAME,
                field: field.to_string(),
            }))
        }
    }
}

#[async_trait]
impl<T> Queryable for MemoryQuery<T>
where
    T: Record + Send + Sync,
{
    type Item = T;

    fn ordering(&self) -> Option<&SortOrder> {
        self.order.as_ref()
    }

    fn order_by(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    fn skip(mut self, n: u64) -> Self {
        self.offset = n;
        self
    }

    fn take(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    async fn count(&self) -> PaginationResult<u64> {
        Ok(self.rows.len() as u64)
    }

    async fn fetch(self) -> PaginationResult<Vec<T>> {
        let mut rows = self.rows;

        if let Some(order) = &self.order {
            Self::check_field(&order.field)?;

            // Stable, so ties keep insertion order.
            rows.sort_by(|a, b| {
                let a = a.sort_value(&order.field).unwrap_or(SortValue::Null);
                let b = b.sort_value(&order.field).unwrap_or(SortValue::Null);
                match order.direction {
                    Direction::Asc => a.compare(&b),
                    Direction::Desc => b.compare(&a),
                }
            });
        }

        let offset = usize::try_from(self.offset).unwrap_or(usize::MAX);
        let limit = self
            .limit
            .map_or(usize::MAX, |n| usize::try_from(n).unwrap_or(usize::MAX));

        Ok(rows.into_iter().skip(offset).take(limit).collect())
    }
}
