//! Fixed-size paging over an in-memory collection.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Cards per gallery page.
pub const PAGE_SIZE: usize = 8;

/// The visible window `items[(page - 1) * page_size .. page * page_size]`.
///
/// Out-of-range pages (including page 0) and a zero page size yield an empty
/// slice instead of an error.
#[must_use]
pub fn slice<T>(items: &[T], current_page: usize, page_size: usize) -> &[T] {
    if current_page == 0 || page_size == 0 {
        return &[];
    }
    let Some(start) = (current_page - 1).checked_mul(page_size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Current page within a collection of `total_items`.
///
/// Invariant: `1 <= current_page <= total_pages()`, where an empty collection
/// still has one (empty) page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl PageState {
    /// Page state for an empty collection. A zero `page_size` is bumped to 1.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self { current_page: 1, page_size: page_size.max(1), total_items: 0 }
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    /// Replace the collection size, clamping the current page into range.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = self.current_page.clamp(1, self.total_pages());
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn next_page(&mut self) {
        self.current_page = (self.current_page + 1).min(self.total_pages());
    }

    pub fn prev_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    /// Visible window of `items` for the current page.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        slice(items, self.current_page, self.page_size)
    }
}
