/// Default number of posts per page, matching the posts listing layout.
pub const DEFAULT_PAGE_SIZE: u32 = 6;

/// Maximum number of page-number controls shown at once.
pub const PAGE_WINDOW: u32 = 5;

/// The slice of a collection visible on one page.
///
/// `start..end` are 0-based element indices into the collection;
/// the range is empty when the page lies past the end of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice {
    pub start: usize,
    pub end: usize,
    pub total_pages: u32,
}

impl PageSlice {
    /// Computes the visible slice for `current_page` (1-based) over a
    /// collection of `len` elements.
    pub fn compute(len: usize, current_page: u32, page_size: u32) -> Self {
        debug_assert!(page_size > 0);
        debug_assert!(current_page >= 1);
        let total_pages = total_pages(len, page_size);
        let start = (current_page as usize - 1) * page_size as usize;
        if start >= len {
            return Self {
                start: len,
                end: len,
                total_pages,
            };
        }
        let end = (start + page_size as usize).min(len);
        Self {
            start,
            end,
            total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// `ceil(len / page_size)`; 0 for an empty collection, which renders as no
/// page controls at all.
pub fn total_pages(len: usize, page_size: u32) -> u32 {
    debug_assert!(page_size > 0);
    (len.div_ceil(page_size as usize)) as u32
}

/// The page numbers to render as controls: a sliding window of at most
/// [`PAGE_WINDOW`] pages anchored around `current_page`.
pub fn page_window(total_pages: u32, current_page: u32) -> Vec<u32> {
    if total_pages <= PAGE_WINDOW {
        (1..=total_pages).collect()
    } else if current_page <= 3 {
        (1..=PAGE_WINDOW).collect()
    } else if current_page >= total_pages - 2 {
        (total_pages - PAGE_WINDOW + 1..=total_pages).collect()
    } else {
        (current_page - 2..=current_page + 2).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{page_window, total_pages, PageSlice};

    #[test]
    fn slice_covers_full_page() {
        let slice = PageSlice::compute(100, 1, 6);
        assert_eq!(slice.start, 0);
        assert_eq!(slice.end, 6);
        assert_eq!(slice.total_pages, 17);
    }

    #[test]
    fn last_page_is_partial() {
        let slice = PageSlice::compute(8, 2, 6);
        assert_eq!(slice.start, 6);
        assert_eq!(slice.end, 8);
        assert_eq!(slice.total_pages, 2);
    }

    #[test]
    fn page_past_end_is_empty_without_error() {
        let slice = PageSlice::compute(8, 5, 6);
        assert!(slice.is_empty());
        assert_eq!(slice.total_pages, 2);
    }

    #[test]
    fn empty_collection_has_zero_pages() {
        let slice = PageSlice::compute(0, 1, 6);
        assert!(slice.is_empty());
        assert_eq!(slice.total_pages, 0);
    }

    #[test]
    fn pages_partition_the_collection() {
        for len in [0usize, 1, 5, 6, 7, 12, 100] {
            let total = total_pages(len, 6);
            let mut covered = 0;
            let mut next_start = 0;
            for page in 1..=total.max(1) {
                let slice = PageSlice::compute(len, page, 6);
                assert_eq!(slice.start, next_start.min(len));
                covered += slice.end - slice.start;
                next_start = slice.end;
            }
            assert_eq!(covered, len);
        }
    }

    #[test]
    fn window_shows_all_pages_when_few() {
        assert_eq!(page_window(0, 1), Vec::<u32>::new());
        assert_eq!(page_window(3, 2), vec![1, 2, 3]);
        assert_eq!(page_window(5, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_anchors_at_the_edges() {
        assert_eq!(page_window(12, 1), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(12, 3), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(12, 12), vec![8, 9, 10, 11, 12]);
        assert_eq!(page_window(12, 10), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn window_slides_in_the_middle() {
        assert_eq!(page_window(12, 6), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(12, 4), vec![2, 3, 4, 5, 6]);
        assert_eq!(page_window(12, 9), vec![7, 8, 9, 10, 11]);
    }
}
