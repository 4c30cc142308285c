#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    per_page: usize,
}

impl Pagination {
    pub const EXERCISES_PER_PAGE: usize = 9;

    #[must_use]
    pub fn new(per_page: usize) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
        }
    }

    /// Current page, starting at 1.
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    #[must_use]
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.per_page)
    }

    /// Select a page, clamped to the pages available for `len` items.
    pub fn set_page(&mut self, page: usize, len: usize) {
        self.page = page.clamp(1, self.page_count(len).max(1));
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = ((self.page - 1) * self.per_page).min(items.len());
        let end = (start + self.per_page).min(items.len());
        &items[start..end]
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(Self::EXERCISES_PER_PAGE)
    }
}
