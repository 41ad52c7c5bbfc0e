//! Paging intent and the facts derived from it

/// State of one pagination request.
///
/// `page_size` is fixed at construction, so `last_page` is always derived from the
/// final page size no matter when the total count arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    current_page: u32,
    page_size: u32,
    skip: u64,
    take: u64,
    total_count: Option<u64>,
    last_page: u32,
    has_next_page: bool,
}

impl PageState {
    /// Build the state for a 1-indexed `page` of `page_size` items.
    ///
    /// Both values are expected to be `>= 1`; validation belongs to the request
    /// boundary (see `PaginationParams::page_state`). Arithmetic saturates so a
    /// violated precondition degrades instead of panicking.
    pub fn new(page: u32, page_size: u32) -> Self {
        let skip = u64::from(page.saturating_sub(1)) * u64::from(page_size);
        let take = u64::from(page_size) + 1;

        Self {
            current_page: page,
            page_size,
            skip,
            take,
            total_count: None,
            last_page: 0,
            has_next_page: false,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Rows to discard before the page
    pub fn skip(&self) -> u64 {
        self.skip
    }

    /// Rows to request: one more than the page size
    pub fn take(&self) -> u64 {
        self.take
    }

    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    /// Last page number, or `0` while no positive count is known.
    pub fn last_page(&self) -> u32 {
        self.last_page
    }

    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    pub fn has_prev_page(&self) -> bool {
        self.current_page > 1
    }

    /// Record the unpaged total. A zero total or zero page size leaves
    /// `last_page` at its prior value.
    pub fn set_total_count(&mut self, total: u64) {
        self.total_count = Some(total);

        if self.page_size > 0 && total > 0 {
            let pages = total.div_ceil(u64::from(self.page_size));
            self.last_page = u32::try_from(pages).unwrap_or(u32::MAX);
        }
    }

    /// Record how many rows a `take`-sized fetch returned.
    pub fn observe_rows(&mut self, fetched: usize) {
        self.has_next_page = fetched as u64 >= self.take;
    }

    /// Apply the overfetch rule to rows fetched with [`Self::take`]: set
    /// `has_next_page` and drop everything past the page size.
    pub fn trim_overfetch<T>(&mut self, mut rows: Vec<T>) -> Vec<T> {
        self.observe_rows(rows.len());
        rows.truncate(self.page_size as usize);
        rows
    }
}
