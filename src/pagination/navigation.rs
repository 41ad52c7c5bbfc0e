//! Sliding page window with edge links and ellipses
//!
//! Layout: `prev [1] [...] (current-1) current (current+1) [...] next [last]`.
//! The window only extends forward when the overfetch proved a next page exists.

use serde::Serialize;

use super::state::PageState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Prev,
    Next,
    Last,
}

/// One slot of the navigation control. Disabled entries never carry a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavEntry {
    Page {
        number: u32,
        active: bool,
        disabled: bool,
        url: Option<String>,
    },
    Ellipsis,
    Edge {
        edge: EdgeKind,
        number: u32,
        disabled: bool,
        url: Option<String>,
    },
}

impl NavEntry {
    fn page(number: u32, active: bool, link: &impl Fn(u32) -> String) -> Self {
        Self::Page {
            number,
            active,
            disabled: false,
            url: Some(link(number)),
        }
    }

    fn edge(edge: EdgeKind, number: u32, disabled: bool, link: &impl Fn(u32) -> String) -> Self {
        Self::Edge {
            edge,
            number,
            disabled,
            url: (!disabled).then(|| link(number)),
        }
    }

    /// Target page, `None` for an ellipsis
    pub fn number(&self) -> Option<u32> {
        match self {
            Self::Page { number, .. } | Self::Edge { number, .. } => Some(*number),
            Self::Ellipsis => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Page { url, .. } | Self::Edge { url, .. } => url.as_deref(),
            Self::Ellipsis => None,
        }
    }

    pub fn is_disabled(&self) -> bool {
        match self {
            Self::Page { disabled, .. } | Self::Edge { disabled, .. } => *disabled,
            Self::Ellipsis => false,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Page { active: true, .. })
    }
}

/// Build the navigation entries for `state`, using `link` to produce page URLs.
pub fn build_navigation(state: &PageState, link: impl Fn(u32) -> String) -> Vec<NavEntry> {
    let current = state.current_page();
    let last = state.last_page();
    let has_next = state.has_next_page();

    let start = current.saturating_sub(1).max(1);
    // A next page beyond `last` means rows were added between count and slice.
    // Without a next page the window ends at `current`, even past `last`.
    let end = if has_next && last > 0 {
        current.saturating_add(1).min(last).max(current)
    } else if has_next {
        current.saturating_add(1)
    } else {
        current
    };

    let mut entries = Vec::with_capacity(8);

    entries.push(NavEntry::edge(
        EdgeKind::Prev,
        current.saturating_sub(1),
        current <= 1,
        &link,
    ));

    if start >= 2 {
        entries.push(NavEntry::page(1, false, &link));
    }

    if start > 2 {
        entries.push(NavEntry::Ellipsis);
    }

    for number in start..=end {
        entries.push(NavEntry::page(number, number == current, &link));
    }

    let next = current.saturating_add(1);
    if has_next && (last == 0 || next < last) {
        entries.push(NavEntry::Ellipsis);
    }

    entries.push(NavEntry::edge(EdgeKind::Next, next, !has_next, &link));

    if last > 0 {
        entries.push(NavEntry::edge(EdgeKind::Last, last, !has_next, &link));
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::paginator::slice_in_memory;

    fn link(page: u32) -> String {
        format!("/items?page={page}")
    }

    fn state(page: u32, size: u32, total: u64, has_next: bool) -> PageState {
        let mut state = PageState::new(page, size);
        state.set_total_count(total);
        state.observe_rows(if has_next { size as usize + 1 } else { 0 });
        state
    }

    fn page(number: u32, active: bool) -> NavEntry {
        NavEntry::Page {
            number,
            active,
            disabled: false,
            url: Some(link(number)),
        }
    }

    fn edge(edge: EdgeKind, number: u32, disabled: bool) -> NavEntry {
        NavEntry::Edge {
            edge,
            number,
            disabled,
            url: (!disabled).then(|| link(number)),
        }
    }

    #[test]
    fn first_page_with_more_pages() {
        let entries = build_navigation(&state(1, 10, 80, true), link);

        assert_eq!(
            entries,
            vec![
                edge(EdgeKind::Prev, 0, true),
                page(1, true),
                page(2, false),
                NavEntry::Ellipsis,
                edge(EdgeKind::Next, 2, false),
                edge(EdgeKind::Last, 8, false),
            ]
        );
    }

    #[test]
    fn last_page_disables_forward_edges() {
        let entries = build_navigation(&state(8, 10, 80, false), link);

        assert_eq!(
            entries,
            vec![
                edge(EdgeKind::Prev, 7, false),
                page(1, false),
                NavEntry::Ellipsis,
                page(7, false),
                page(8, true),
                edge(EdgeKind::Next, 9, true),
                edge(EdgeKind::Last, 8, true),
            ]
        );
    }

    #[test]
    fn window_starting_at_two_has_no_leading_ellipsis() {
        let entries = build_navigation(&state(3, 10, 80, true), link);

        assert_eq!(
            entries,
            vec![
                edge(EdgeKind::Prev, 2, false),
                page(1, false),
                page(2, false),
                page(3, true),
                page(4, false),
                NavEntry::Ellipsis,
                edge(EdgeKind::Next, 4, false),
                edge(EdgeKind::Last, 8, false),
            ]
        );
    }

    #[test]
    fn second_page_window_starts_at_one() {
        let entries = build_navigation(&state(2, 10, 80, true), link);

        assert_eq!(
            entries,
            vec![
                edge(EdgeKind::Prev, 1, false),
                page(1, false),
                page(2, true),
                page(3, false),
                NavEntry::Ellipsis,
                edge(EdgeKind::Next, 3, false),
                edge(EdgeKind::Last, 8, false),
            ]
        );
    }

    #[test]
    fn next_page_is_last_suppresses_trailing_ellipsis() {
        let entries = build_navigation(&state(7, 10, 80, true), link);

        assert_eq!(
            entries,
            vec![
                edge(EdgeKind::Prev, 6, false),
                page(1, false),
                NavEntry::Ellipsis,
                page(6, false),
                page(7, true),
                page(8, false),
                edge(EdgeKind::Next, 8, false),
                edge(EdgeKind::Last, 8, false),
            ]
        );
    }

    #[test]
    fn single_page_result() {
        let entries = build_navigation(&state(1, 10, 4, false), link);

        assert_eq!(
            entries,
            vec![
                edge(EdgeKind::Prev, 0, true),
                page(1, true),
                edge(EdgeKind::Next, 2, true),
                edge(EdgeKind::Last, 1, true),
            ]
        );
    }

    #[test]
    fn unknown_total_omits_last_edge() {
        let mut state = PageState::new(4, 10);
        state.observe_rows(11);

        let entries = build_navigation(&state, link);

        assert_eq!(
            entries,
            vec![
                edge(EdgeKind::Prev, 3, false),
                page(1, false),
                NavEntry::Ellipsis,
                page(3, false),
                page(4, true),
                page(5, false),
                NavEntry::Ellipsis,
                edge(EdgeKind::Next, 5, false),
            ]
        );
    }

    #[test]
    fn empty_result_has_no_last_edge() {
        let entries = build_navigation(&state(1, 10, 0, false), link);

        assert!(entries
            .iter()
            .all(|e| !matches!(e, NavEntry::Edge { edge: EdgeKind::Last, .. })));
        assert!(entries.iter().filter(|e| e.url().is_some()).all(|e| !e.is_disabled()));
    }

    #[test]
    fn page_past_the_end_keeps_current_active() {
        let mut state = PageState::new(12, 10);
        state.set_total_count(95);
        let rows = slice_in_memory(0..95, &mut state);
        assert!(rows.is_empty());

        let got = build_navigation(&state, link);
        let want = vec![
            edge(EdgeKind::Prev, 11, false),
            page(1, false),
            NavEntry::Ellipsis,
            page(11, false),
            page(12, true),
            edge(EdgeKind::Next, 13, true),
            edge(EdgeKind::Last, 10, true),
        ];

        assert_eq!(got, want);
        assert_eq!(got.iter().filter(|e| e.is_active()).count(), 1);
    }

    #[test]
    fn rows_added_after_count_do_not_extend_window() {
        let mut state = PageState::new(2, 10);
        state.set_total_count(15);
        state.observe_rows(11);

        let pages: Vec<u32> = build_navigation(&state, link)
            .iter()
            .filter(|e| matches!(e, NavEntry::Page { .. }))
            .filter_map(NavEntry::number)
            .collect();

        assert_eq!(pages, vec![1, 2]);
    }

    #[test]
    fn window_stays_within_page_range() {
        for total in 0..=40usize {
            for size in 1..=5u32 {
                let mut first = PageState::new(1, size);
                first.set_total_count(total as u64);
                let last = first.last_page().max(1);

                for current in 1..=last {
                    let mut state = PageState::new(current, size);
                    state.set_total_count(total as u64);
                    slice_in_memory(0..total, &mut state);

                    let entries = build_navigation(&state, link);
                    let pages = entries.iter().filter_map(|e| match e {
                        NavEntry::Page { number, .. } => Some(*number),
                        _ => None,
                    });

                    for number in pages {
                        assert!(number >= 1, "page {number} below 1");
                        if state.last_page() > 0 {
                            assert!(
                                number <= state.last_page(),
                                "page {number} beyond {}",
                                state.last_page()
                            );
                        }
                    }

                    assert_eq!(entries.iter().filter(|e| e.is_active()).count(), 1);
                }
            }
        }
    }

    #[test]
    fn disabled_entries_have_no_url() {
        let entries = build_navigation(&state(8, 10, 80, false), link);

        for entry in entries.iter().filter(|e| e.is_disabled()) {
            assert_eq!(entry.url(), None);
        }
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(build_navigation(&state(1, 10, 20, true), link)).unwrap();

        assert_eq!(json[0]["kind"], "edge");
        assert_eq!(json[0]["edge"], "prev");
        assert_eq!(json[1]["kind"], "page");
        assert_eq!(json[1]["active"], true);
        assert_eq!(json[1]["url"], "/items?page=1");
    }
}
