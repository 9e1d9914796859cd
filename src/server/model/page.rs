use crate::model::pagination::PageDto;

/// Largest row offset a SQLite `OFFSET` accepts.
const MAX_OFFSET: u64 = i64::MAX as u64;

/// Zero-indexed page to fetch for the 1-indexed `page`.
///
/// Bounded so that `per_page * index` never exceeds a valid offset; pages past the
/// bound come back empty like any other page past the end.
pub fn page_index(page: u64, per_page: u64) -> u64 {
    page.saturating_sub(1).min(MAX_OFFSET / per_page.max(1))
}

/// A 1-indexed page of domain items returned by paginated repository queries.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            0
        } else {
            self.total.div_ceil(self.limit)
        }
    }

    /// Converts every item while keeping the pagination numbers.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total: self.total,
        }
    }
}

impl<T> From<Page<T>> for PageDto<T> {
    fn from(page: Page<T>) -> Self {
        let total_pages = page.total_pages();

        Self {
            items: page.items,
            page: page.page,
            limit: page.limit,
            total: page.total,
            total_pages,
        }
    }
}
