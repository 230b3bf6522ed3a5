//! Fixed-size pagination over ordered result sets

/// Number of questions per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A requested page (1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
}

impl Pagination {
    pub fn new(page: i64) -> Self {
        Self { page }
    }

    /// Builds a pagination from an optional query value, defaulting to page 1
    pub fn from_param(page: Option<i64>) -> Self {
        Self::new(page.unwrap_or(1))
    }

    /// Zero-based index of the first item on this page, `None` for pages below 1
    ///
    /// Negative pages never count back from the end of the result set.
    pub fn offset(&self) -> Option<usize> {
        if self.page < 1 {
            return None;
        }
        usize::try_from(self.page - 1)
            .ok()
            .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
    }

    /// Returns the window `[start, start + 10)` of `items`
    ///
    /// Pages past the end, and pages below 1, yield an empty slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        match self.offset() {
            Some(start) if start < items.len() => {
                let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
                &items[start..end]
            }
            _ => &[],
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: i32) -> Vec<i32> {
        (1..=n).collect()
    }

    #[test]
    fn default_is_first_page() {
        assert_eq!(Pagination::default(), Pagination::from_param(None));
        assert_eq!(Pagination::from_param(Some(3)).page, 3);
    }

    #[test]
    fn offset_calculation() {
        assert_eq!(Pagination::new(1).offset(), Some(0));
        assert_eq!(Pagination::new(2).offset(), Some(10));
        assert_eq!(Pagination::new(5).offset(), Some(40));
        assert_eq!(Pagination::new(0).offset(), None);
        assert_eq!(Pagination::new(-3).offset(), None);
    }

    #[test]
    fn full_and_partial_pages() {
        let items = ids(25);
        assert_eq!(Pagination::new(1).slice(&items), &ids(10)[..]);
        assert_eq!(Pagination::new(2).slice(&items), &items[10..20]);
        assert_eq!(Pagination::new(3).slice(&items), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let items = ids(25);
        assert!(Pagination::new(4).slice(&items).is_empty());
        assert!(Pagination::new(0).slice(&items).is_empty());
        assert!(Pagination::new(-1).slice(&items).is_empty());
        assert!(Pagination::new(i64::MAX).slice(&items).is_empty());
    }

    #[test]
    fn consecutive_pages_are_disjoint_and_contiguous() {
        let items = ids(47);
        for page in 1..5 {
            let current = Pagination::new(page).slice(&items);
            let next = Pagination::new(page + 1).slice(&items);
            assert!(current.len() <= QUESTIONS_PER_PAGE);
            if let (Some(last), Some(first)) = (current.last(), next.first()) {
                assert_eq!(last + 1, *first);
            }
        }
    }

    #[test]
    fn empty_input() {
        let items: Vec<i32> = vec![];
        assert!(Pagination::new(1).slice(&items).is_empty());
    }
}
