#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Which page of the pre-partitioned project list is visible.
///
/// Pages are 1-indexed. The page count is fixed at initialization; a count
/// of zero means the component is inactive and no controls are wired.
/// Out-of-range navigation requests are absorbed as no-ops: they can only
/// originate from controls that are already bounds-checked, and a
/// presentation layer degrades rather than errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    page_count: usize,
}

impl PaginationState {
    /// Start on page 1 of `page_count` pages.
    pub fn new(page_count: usize) -> Self {
        Self { current_page: 1, page_count }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Whether there is anything to paginate.
    pub fn is_active(&self) -> bool {
        self.page_count > 0
    }

    /// Whether `page` (1-indexed) is the visible page.
    pub fn is_current(&self, page: usize) -> bool {
        self.current_page == page
    }

    /// Jump to `page`. Out-of-range requests are silent no-ops. Returns
    /// whether the state changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page == 0 || page > self.page_count || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Advance one page; a no-op at the last page.
    pub fn next(&mut self) -> bool {
        self.go_to(self.current_page + 1)
    }

    /// Go back one page; a no-op at the first page.
    pub fn previous(&mut self) -> bool {
        if self.current_page == 1 {
            return false;
        }
        self.go_to(self.current_page - 1)
    }

    /// The previous control is disabled exactly on the first page.
    pub fn prev_disabled(&self) -> bool {
        self.current_page == 1
    }

    /// The next control is disabled exactly on the last page.
    pub fn next_disabled(&self) -> bool {
        self.current_page == self.page_count
    }

    /// Inline opacity for a navigation control; disabled controls are dimmed.
    pub fn control_opacity(disabled: bool) -> &'static str {
        if disabled { "0.5" } else { "1" }
    }
}
