//! Postgres `Queryable` over a whole table

use async_trait::async_trait;
use sqlx::{postgres::PgRow, FromRow, PgPool, Postgres, QueryBuilder};
use std::marker::PhantomData;

use super::error::PaginationResult;
use super::query::{Queryable, SortOrder};
use super::schema::Schema;

/// `SELECT * FROM <T::NAME>` with optional `ORDER BY`, `LIMIT`, `OFFSET`.
pub struct PgQuery<T> {
    pool: PgPool,
    order: Option<SortOrder>,
    offset: u64,
    limit: Option<u64>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for PgQuery<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            order: self.order.clone(),
            offset: self.offset,
            limit: self.limit,
            _entity: PhantomData,
        }
    }
}

impl<T: Schema> PgQuery<T> {
    pub fn table(pool: PgPool) -> Self {
        Self {
            pool,
            order: None,
            offset: 0,
            limit: None,
            _entity: PhantomData,
        }
    }

    /// Render the row query. Identifiers come from `Schema` or the caller's
    /// `SortOrder` and are always quoted; numbers are bound.
    pub(crate) fn select_sql(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("SELECT * FROM ");
        builder.push(quote_ident(T::NAME));

        if let Some(order) = &self.order {
            builder
                .push(" ORDER BY ")
                .push(quote_ident(&order.field))
                .push(" ")
                .push(order.direction.as_sql());
        }

        if let Some(limit) = self.limit {
            builder.push(" LIMIT ").push_bind(clamp_i64(limit));
        }

        if self.offset > 0 {
            builder.push(" OFFSET ").push_bind(clamp_i64(self.offset));
        }

        builder
    }

    pub(crate) fn count_sql() -> String {
        format!("SELECT COUNT(*) FROM {}", quote_ident(T::NAME))
    }
}

/// Double-quote an identifier, doubling embedded quotes.
fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

fn clamp_i64(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

#[async_trait]
impl<T> Queryable for PgQuery<T>
where
    T: Schema + for<'r> FromRow<'r, PgRow> + Send + Unpin,
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
        let sql = Self::count_sql();
        let total: i64 = sqlx::query_scalar(&sql)
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(total).unwrap_or(0))
    }

    async fn fetch(self) -> PaginationResult<Vec<T>> {
        let mut builder = self.select_sql();
        let rows = builder.build_query_as::<T>().fetch_all(&self.pool).await?;
        Ok(rows)
    }
}
