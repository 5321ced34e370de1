use serde::{Deserialize, Serialize};

/// One window of a filtered, ordered result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResult<T> {
    pub page: usize,
    pub size: usize,
    pub total: usize,
    pub items: Vec<T>,
    pub first: bool,
    pub last: bool,
    pub has_next: bool,
    pub has_previous: bool,
    pub total_pages: usize,
}

impl<T> ListResult<T> {
    pub fn new(page: usize, size: usize, total: usize, items: Vec<T>) -> Self {
        let total_pages = Self::compute_total_pages(size, total);
        let has_next = page < total_pages;
        let has_previous = page > 1;
        Self {
            page,
            size,
            total,
            items,
            first: !has_previous,
            last: !has_next,
            has_next,
            has_previous,
            total_pages,
        }
    }

    /// Takes the `[(page-1)*size, page*size)` window out of an already
    /// ordered set. `page` is clamped to 1; a `size` of zero keeps everything.
    pub fn paginate(items: Vec<T>, page: usize, size: usize) -> Self {
        let page = page.max(1);
        let total = items.len();
        if size == 0 {
            return Self::new(page, size, total, items);
        }

        let start = (page - 1).saturating_mul(size);
        let window = items.into_iter().skip(start).take(size).collect();
        Self::new(page, size, total, window)
    }

    pub fn map<U, F>(self, f: F) -> ListResult<U>
    where
        F: FnMut(T) -> U,
    {
        ListResult::new(
            self.page,
            self.size,
            self.total,
            self.items.into_iter().map(f).collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn compute_total_pages(size: usize, total: usize) -> usize {
        if size == 0 {
            return 1;
        }
        total.div_ceil(size)
    }
}
