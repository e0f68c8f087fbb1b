//! Page arithmetic for client-side pagination. Pages are 1-based.

/// Number of pages needed for `count` records; 0 when there are none.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Clamps a 1-based page into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Index range of the records shown on `page`
pub fn page_range(page: usize, page_size: usize, count: usize) -> std::ops::Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(count);
    let end = start.saturating_add(page_size).min(count);
    start..end
}

/// Page numbers rendered as buttons
pub fn page_numbers(total_pages: usize) -> Vec<usize> {
    (1..=total_pages).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(1, 5), 1);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(12, 5), 3);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_twelve_records_split_five_five_two() {
        assert_eq!(page_range(1, 5, 12), 0..5);
        assert_eq!(page_range(2, 5, 12), 5..10);
        assert_eq!(page_range(3, 5, 12), 10..12);
        assert_eq!(page_numbers(total_pages(12, 5)), vec![1, 2, 3]);
    }

    #[test]
    fn test_range_past_the_end_is_empty() {
        assert!(page_range(7, 5, 12).is_empty());
        assert!(page_range(1, 5, 0).is_empty());
    }
}
