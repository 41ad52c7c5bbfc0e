//! Count, order, slice and trim one page out of a source

use super::error::PaginationResult;
use super::ordering::ensure_ordered;
use super::query::Queryable;
use super::schema::Schema;
use super::state::PageState;

/// One page of items with the state that produced it
#[derive(Debug, Clone)]
pub struct PageResult<T> {
    pub state: PageState,
    pub items: Vec<T>,
}

impl<T> PageResult<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            state: self.state,
            items: self.items.into_iter().map(f).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Fetch `page` (1-indexed) of `page_size` items from `source`.
///
/// The count and the slice are two separate, non-transactional calls. If the
/// source changes in between, `last_page` can disagree with `has_next_page`;
/// `has_next_page` always reflects the rows actually fetched.
pub async fn paginate<Q>(
    source: Q,
    page: u32,
    page_size: u32,
) -> PaginationResult<PageResult<Q::Item>>
where
    Q: Queryable,
    Q::Item: Schema,
{
    paginate_with_state(source, PageState::new(page, page_size)).await
}

/// [`paginate`] with a caller-built state
pub async fn paginate_with_state<Q>(
    source: Q,
    mut state: PageState,
) -> PaginationResult<PageResult<Q::Item>>
where
    Q: Queryable,
    Q::Item: Schema,
{
    let total = source.count().await?;
    state.set_total_count(total);

    let rows = ensure_ordered(source)?
        .skip(state.skip())
        .take(state.take())
        .fetch()
        .await?;

    let items = state.trim_overfetch(rows);

    tracing::debug!(
        entity = <Q::Item as Schema>::NAME,
        page = state.current_page(),
        page_size = state.page_size(),
        total,
        returned = items.len(),
        has_next_page = state.has_next_page(),
        "Paginated query"
    );

    Ok(PageResult { state, items })
}

/// Slice an already materialized, already ordered sequence. No counting or
/// ordering happens here; set the total on `state` yourself if you have one.
pub fn slice_in_memory<T>(items: impl IntoIterator<Item = T>, state: &mut PageState) -> Vec<T> {
    let skip = usize::try_from(state.skip()).unwrap_or(usize::MAX);
    let take = usize::try_from(state.take()).unwrap_or(usize::MAX);

    let rows: Vec<T> = items.into_iter().skip(skip).take(take).collect();
    state.trim_overfetch(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::error::PaginationError;
    use crate::pagination::memory::MemoryQuery;
    use crate::pagination::query::SortOrder;
    use crate::pagination::testing::{numbered_people, Blob, Person};

    #[tokio::test]
    async fn middle_page_overfetches_one_row() {
        let source = MemoryQuery::new(numbered_people(95));

        let page = paginate(source, 5, 10).await.unwrap();

        assert_eq!(page.state.skip(), 40);
        assert_eq!(page.state.take(), 11);
        assert_eq!(page.state.last_page(), 10);
        assert!(page.state.has_next_page());
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.items[0].name, "p041");
        assert_eq!(page.items[9].name, "p050");
    }

    #[tokio::test]
    async fn last_page_is_short_and_final() {
        let source = MemoryQuery::new(numbered_people(95));

        let page = paginate(source, 10, 10).await.unwrap();

        assert_eq!(page.state.skip(), 90);
        assert!(!page.state.has_next_page());
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items[0].name, "p091");
        assert_eq!(page.items[4].name, "p095");
    }

    #[tokio::test]
    async fn full_final_page_has_no_next() {
        let page = paginate(MemoryQuery::new(numbered_people(20)), 2, 10)
            .await
            .unwrap();

        assert_eq!(page.items.len(), 10);
        assert!(!page.state.has_next_page());
        assert_eq!(page.state.last_page(), 2);
    }

    #[tokio::test]
    async fn empty_source() {
        let page = paginate(MemoryQuery::<Person>::new(Vec::new()), 1, 10)
            .await
            .unwrap();

        assert!(page.items.is_empty());
        assert!(!page.state.has_next_page());
        assert_eq!(page.state.last_page(), 0);
        assert_eq!(page.state.total_count(), Some(0));
    }

    #[tokio::test]
    async fn page_beyond_end_is_empty() {
        let page = paginate(MemoryQuery::new(numbered_people(15)), 4, 10)
            .await
            .unwrap();

        assert!(page.items.is_empty());
        assert!(!page.state.has_next_page());
        assert_eq!(page.state.last_page(), 2);
    }

    #[tokio::test]
    async fn unordered_source_is_sorted_by_default_field() {
        let mut people = numbered_people(6);
        people.reverse();

        let page = paginate(MemoryQuery::new(people), 1, 3).await.unwrap();

        let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["p001", "p002", "p003"]);
        assert!(page.state.has_next_page());
    }

    #[tokio::test]
    async fn explicit_order_is_respected() {
        let source = MemoryQuery::new(numbered_people(6)).order_by(SortOrder::desc("age"));

        let page = paginate(source, 2, 2).await.unwrap();

        let ages: Vec<i32> = page.items.iter().map(|p| p.age).collect();
        assert_eq!(ages, [4, 3]);
    }

    #[tokio::test]
    async fn pages_do_not_overlap() {
        let mut seen = Vec::new();
        for page in 1..=4 {
            let result = paginate(MemoryQuery::new(numbered_people(23)), page, 7)
                .await
                .unwrap();
            seen.extend(result.items.into_iter().map(|p| p.age));
        }

        assert_eq!(seen, (1..=23).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn unsortable_entity_fails() {
        let source = MemoryQuery::new(vec![Blob {
            payload: serde_json::json!({"k": 1}),
        }]);

        let err = paginate(source, 1, 10).await.unwrap_err();
        assert!(matches!(err, PaginationError::NoSortableField { .. }));
    }

    #[tokio::test]
    async fn source_errors_propagate() {
        let source = MemoryQuery::new(numbered_people(3)).order_by(SortOrder::asc("missing"));

        let err = paginate(source, 1, 10).await.unwrap_err();
        assert!(matches!(err, PaginationError::SourceQuery(_)));
    }

    #[test]
    fn slice_in_memory_applies_skip_and_take() {
        let mut state = PageState::new(5, 10);
        let items = slice_in_memory(1..=95, &mut state);

        assert!(state.has_next_page());
        assert_eq!(items.len(), 10);
        assert_eq!(items.first(), Some(&41));
        assert_eq!(state.total_count(), None);
    }

    #[test]
    fn slice_in_memory_last_page() {
        let mut state = PageState::new(10, 10);
        let items = slice_in_memory(1..=95, &mut state);

        assert!(!state.has_next_page());
        assert_eq!(items, vec![91, 92, 93, 94, 95]);
    }

    #[test]
    fn items_never_exceed_page_size() {
        for size in 1..=6u32 {
            for page in 1..=5u32 {
                let mut state = PageState::new(page, size);
                let items = slice_in_memory(0..17, &mut state);
                assert!(items.len() <= size as usize);
            }
        }
    }

    #[tokio::test]
    async fn map_keeps_state() {
        let page = paginate(MemoryQuery::new(numbered_people(5)), 1, 2)
            .await
            .unwrap()
            .map(|p| p.age);

        assert_eq!(page.items, vec![1, 2]);
        assert!(page.state.has_next_page());
    }
}
