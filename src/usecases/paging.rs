//! Generic paging: optional filter, stable ascending sort by key, then one page.
//!
//! Page numbers are 1-based and not validated. Out-of-range values clamp the way
//! skip/take counts do: a negative skip skips nothing, a negative take yields nothing.

pub const DEFAULT_PAGE_SIZE: i32 = 100;
pub const DEFAULT_PAGE_NUMBER: i32 = 1;

/// Page selector. `size` elements per page, `number` counted from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub size: i32,
    pub number: i32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            size: DEFAULT_PAGE_SIZE,
            number: DEFAULT_PAGE_NUMBER,
        }
    }
}

impl PageRequest {
    pub fn new(size: i32, number: i32) -> Self {
        Self { size, number }
    }

    /// Elements to skip: `(number - 1) * size`, zero when that is negative.
    pub fn skip(&self) -> usize {
        let skip = (i64::from(self.number) - 1) * i64::from(self.size);
        if skip <= 0 {
            return 0;
        }
        usize::try_from(skip).unwrap_or(usize::MAX)
    }

    /// Elements to take: `size`, zero when negative.
    pub fn take(&self) -> usize {
        usize::try_from(self.size).unwrap_or(0)
    }
}

/// Filter `elements` with `filter` (if any), sort ascending by `ordering` keeping the
/// relative order of equal keys, and return the page selected by `page`.
///
/// An empty vector is returned when the page starts past the last element.
pub fn paging<T, K, F, P>(
    elements: impl IntoIterator<Item = T>,
    ordering: F,
    filter: Option<P>,
    page: PageRequest,
) -> Vec<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
    P: FnMut(&T) -> bool,
{
    let mut kept: Vec<T> = match filter {
        Some(mut keep) => elements.into_iter().filter(|e| keep(e)).collect(),
        None => elements.into_iter().collect(),
    };
    kept.sort_by_cached_key(ordering);
    kept.into_iter().skip(page.skip()).take(page.take()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_filter<T>() -> Option<fn(&T) -> bool> {
        None
    }

    #[test]
    fn test_page_request_default() {
        let page = PageRequest::default();
        assert_eq!(page.size, 100);
        assert_eq!(page.number, 1);
        assert_eq!(page.skip(), 0);
        assert_eq!(page.take(), 100);
    }

    #[test]
    fn test_second_and_last_pages() {
        let items: Vec<i32> = (1..=25).rev().collect();

        let second = paging(items.clone(), |n| *n, no_filter(), PageRequest::new(10, 2));
        assert_eq!(second, (11..=20).collect::<Vec<_>>());

        let third = paging(items.clone(), |n| *n, no_filter(), PageRequest::new(10, 3));
        assert_eq!(third, vec![21, 22, 23, 24, 25]);

        let fourth = paging(items, |n| *n, no_filter(), PageRequest::new(10, 4));
        assert!(fourth.is_empty());
    }

    #[test]
    fn test_filter_applies_before_paging() {
        let items: Vec<i32> = (1..=30).collect();
        let evens = paging(items, |n| *n, Some(|n: &i32| n % 2 == 0), PageRequest::new(5, 2));
        assert_eq!(evens, vec![12, 14, 16, 18, 20]);
    }

    #[test]
    fn test_page_number_zero_or_negative_skips_nothing() {
        let items: Vec<i32> = (1..=5).collect();
        let zero = paging(items.clone(), |n| *n, no_filter(), PageRequest::new(2, 0));
        assert_eq!(zero, vec![1, 2]);
        let negative = paging(items, |n| *n, no_filter(), PageRequest::new(2, -3));
        assert_eq!(negative, vec![1, 2]);
    }

    #[test]
    fn test_non_positive_page_size_yields_empty() {
        let items: Vec<i32> = (1..=5).collect();
        assert!(paging(items.clone(), |n| *n, no_filter(), PageRequest::new(0, 1)).is_empty());
        assert!(paging(items, |n| *n, no_filter(), PageRequest::new(-1, 2)).is_empty());
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let items = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        let page = paging(items, |p| p.0, no_filter(), PageRequest::default());
        assert_eq!(page, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
    }

    #[test]
    fn test_huge_page_number_does_not_overflow() {
        let items: Vec<i32> = (1..=5).collect();
        let page = paging(items, |n| *n, no_filter(), PageRequest::new(i32::MAX, i32::MAX));
        assert!(page.is_empty());
    }
}
