//! Pagination error taxonomy

use thiserror::Error;

/// Boxed provider error carried by [`PaginationError::SourceQuery`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum PaginationError {
    /// Raised at the request boundary only. The core constructors assume `>= 1`.
    #[error("Invalid page request: page={page}, page_size={page_size}")]
    InvalidPageRequest { page: u32, page_size: u32 },

    #[error("Entity '{entity}' has no scalar field to order by")]
    NoSortableField { entity: &'static str },

    #[error("Source query failed: {0}")]
    SourceQuery(#[source] BoxError),
}

impl PaginationError {
    pub fn source_query<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::SourceQuery(Box::new(err))
    }
}

impl From<sqlx::Error> for PaginationError {
    fn from(err: sqlx::Error) -> Self {
        Self::source_query(err)
    }
}

pub type PaginationResult<T> = Result<T, PaginationError>;
