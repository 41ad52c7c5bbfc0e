//! Member listing routes
//!
//! `GET /members` returns a JSON page with its navigation entries;
//! `GET /members/nav` returns only the rendered navigation control.

use axum::extract::{Query, State};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::{Html, PageLinker, Paginated, PaginationParams};
use crate::app::AppState;
use crate::domain::{is_sortable_field, Member, MemberResponse};
use crate::error::{ApiError, ApiResult};
use crate::pagination::{
    build_navigation, paginate_with_state, render_navigation, Direction, NavEntry, PageResult,
    PgQuery, Queryable, SortOrder,
};

pub const MEMBERS_PATH: &str = "/members";

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Debug, Deserialize, Default)]
pub struct MemberListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<Direction>,
}

impl MemberListQuery {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams {
            page: self.page,
            per_page: self.per_page,
        }
    }

    /// Explicit order requested by the client. `sort_order` alone is ignored.
    pub fn sort(&self) -> ApiResult<Option<SortOrder>> {
        let Some(field) = self.sort_by.as_deref() else {
            return Ok(None);
        };

        if !is_sortable_field(field) {
            return Err(ApiError::bad_request(format!(
                "Cannot sort members by '{field}'"
            )));
        }

        Ok(Some(SortOrder {
            field: field.to_string(),
            direction: self.sort_order.unwrap_or(Direction::Asc),
        }))
    }

    fn linker(&self, per_page: u32) -> PageLinker {
        let mut linker = PageLinker::new(MEMBERS_PATH, per_page);
        if let Some(field) = &self.sort_by {
            linker = linker.with_pair("sort_by", field.as_str());
            if let Some(direction) = self.sort_order {
                let direction = match direction {
                    Direction::Asc => "asc",
                    Direction::Desc => "desc",
                };
                linker = linker.with_pair("sort_order", direction);
            }
        }
        linker
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

async fn load_page(
    state: &AppState,
    query: &MemberListQuery,
) -> ApiResult<(PageResult<Member>, Vec<NavEntry>)> {
    let page_state = query.pagination().page_state(&state.settings.pagination)?;
    let sort = query.sort()?;

    tracing::info!(
        page = page_state.current_page(),
        per_page = page_state.page_size(),
        sort_by = ?sort.as_ref().map(|s| s.field.as_str()),
        "Listing members"
    );

    let mut source = PgQuery::<Member>::table(state.db.clone());
    if let Some(order) = sort {
        source = source.order_by(order);
    }

    let page = paginate_with_state(source, page_state).await?;

    let linker = query.linker(page.state.page_size());
    let navigation = build_navigation(&page.state, |p| linker.link(p));

    tracing::debug!(
        returned = page.len(),
        total = ?page.state.total_count(),
        last_page = page.state.last_page(),
        has_next_page = page.state.has_next_page(),
        "Members page loaded"
    );

    Ok((page, navigation))
}

/// GET /members
pub async fn list_members(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MemberListQuery>,
) -> ApiResult<Paginated<MemberResponse>> {
    let (page, navigation) = load_page(&state, &query).await?;
    Ok(Paginated::new(page.map(MemberResponse::from), navigation))
}

/// GET /members/nav
pub async fn members_navigation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MemberListQuery>,
) -> ApiResult<Html> {
    let (_, navigation) = load_page(&state, &query).await?;
    Ok(Html(render_navigation(&state.nav, &navigation)))
}
