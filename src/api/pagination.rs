//! Pagination request parsing and response envelope for list endpoints

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::config::PaginationSettings;
use crate::pagination::{NavEntry, PageResult, PageState, PaginationError};

/// Pagination query parameters
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
pub struct PaginationParams {
    /// Page number (1-indexed)
    pub page: Option<u32>,

    /// Items per page
    pub per_page: Option<u32>,
}

impl PaginationParams {
    /// Validate and build the page state.
    ///
    /// Missing values fall back to page 1 and the configured default size. An
    /// explicit zero is rejected. Sizes above the configured maximum are clamped.
    pub fn page_state(&self, limits: &PaginationSettings) -> Result<PageState, PaginationError> {
        let page = self.page.unwrap_or(1);
        let per_page = self.per_page.unwrap_or(limits.default_per_page);

        if page == 0 || per_page == 0 {
            return Err(PaginationError::InvalidPageRequest {
                page,
                page_size: per_page,
            });
        }

        Ok(PageState::new(page, per_page.min(limits.max_per_page)))
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PaginationMeta {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_items: Option<u64>,
    /// `0` when the total is unknown or empty
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl From<&PageState> for PaginationMeta {
    fn from(state: &PageState) -> Self {
        Self {
            page: state.current_page(),
            per_page: state.page_size(),
            total_items: state.total_count(),
            total_pages: state.last_page(),
            has_next: state.has_next_page(),
            has_prev: state.has_prev_page(),
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
    pub navigation: Vec<NavEntry>,
}

impl<T: Serialize> Paginated<T> {
    pub fn new(page: PageResult<T>, navigation: Vec<NavEntry>) -> Self {
        Self {
            pagination: PaginationMeta::from(&page.state),
            data: page.items,
            navigation,
        }
    }
}

impl<T: Serialize> IntoResponse for Paginated<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Builds page URLs for one list endpoint, keeping page size and any extra
/// query pairs (sorting, filters) stable across links.
#[derive(Debug, Clone)]
pub struct PageLinker {
    path: String,
    per_page: u32,
    extra: Vec<(String, String)>,
}

impl PageLinker {
    pub fn new(path: impl Into<String>, per_page: u32) -> Self {
        Self {
            path: path.into(),
            per_page,
            extra: Vec::new(),
        }
    }

    pub fn with_pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    pub fn link(&self, page: u32) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &self.per_page.to_string());

        for (key, value) in &self.extra {
            query.append_pair(key, value);
        }

        format!("{}?{}", self.path, query.finish())
    }
}
