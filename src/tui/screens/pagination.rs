//! Client-side paging over an already fetched list

/// 1-based page cursor over `len` items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    per_page: usize,
    page: usize,
    len: usize,
}

impl Paginator {
    pub fn new(per_page: usize) -> Self {
        Self {
            per_page: per_page.max(1),
            page: 1,
            len: 0,
        }
    }

    /// Point at a new list and go back to the first page
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.page = 1;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Never zero, so an empty list reads "page 1 of 1"
    pub fn total_pages(&self) -> usize {
        self.len.div_ceil(self.per_page).max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.page += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.has_previous() {
            self.page -= 1;
        }
    }

    /// Jump to a page, clamped into range
    pub fn go_to(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    /// Index range of the current page within the list
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = ((self.page - 1) * self.per_page).min(self.len);
        let end = (start + self.per_page).min(self.len);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_of_seven() {
        let items: Vec<usize> = (0..16).collect();
        let mut pager = Paginator::new(7);
        pager.reset(items.len());

        assert_eq!(pager.total_pages(), 3);
        assert_eq!(pager.slice(&items), &items[0..7]);
        assert!(!pager.has_previous());

        pager.next();
        pager.next();
        assert_eq!(pager.page(), 3);
        assert_eq!(pager.slice(&items), &items[14..16]);
        assert!(!pager.has_next());

        pager.next();
        assert_eq!(pager.page(), 3);
    }

    #[test]
    fn empty_list_is_single_empty_page() {
        let mut pager = Paginator::new(7);
        pager.reset(0);

        assert_eq!(pager.total_pages(), 1);
        assert!(!pager.has_next());
        assert!(pager.slice::<u8>(&[]).is_empty());
    }

    #[test]
    fn go_to_clamps_and_reset_rewinds() {
        let mut pager = Paginator::new(5);
        pager.reset(12);
        pager.go_to(99);
        assert_eq!(pager.page(), 3);
        pager.go_to(0);
        assert_eq!(pager.page(), 1);

        pager.go_to(2);
        pager.reset(3);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let mut pager = Paginator::new(0);
        pager.reset(2);
        assert_eq!(pager.total_pages(), 2);
    }
}
