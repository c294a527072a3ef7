//! Page Arithmetic

use std::ops::Range;

/// Number of pages needed for `len` results; at least one, even when empty
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a 1-based page into `[1, total_pages]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Index range of `page` within `len` results
pub fn page_range(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = (page.max(1) - 1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 9), 1);
        assert_eq!(total_pages(9, 9), 1);
        assert_eq!(total_pages(10, 9), 2);
        assert_eq!(total_pages(15, 6), 3);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_page_range() {
        assert_eq!(page_range(1, 9, 15), 0..9);
        assert_eq!(page_range(2, 9, 15), 9..15);
        assert_eq!(page_range(3, 9, 15), 15..15);
        assert_eq!(page_range(1, 9, 0), 0..0);
    }
}
