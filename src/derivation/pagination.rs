// src/derivation/pagination.rs
use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// The page a caller asked for. `page_number` is 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: usize,
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub page_number: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// `ceil(count / page_size)`, never less than one.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Slices out one page of an already filtered sequence.
///
/// Page 0 is read as page 1 and a zero page size as 1. Pages past the end
/// come back empty rather than failing.
pub fn paginate<R>(filtered: Vec<R>, page_number: usize, page_size: usize) -> (Vec<R>, Page) {
    let page_size = page_size.max(1);
    let page_number = page_number.max(1);
    let total_items = filtered.len();
    let start = (page_number - 1).saturating_mul(page_size);

    let items = filtered.into_iter().skip(start).take(page_size).collect();
    let page = Page {
        page_number,
        page_size,
        total_pages: total_pages(total_items, page_size),
        total_items,
    };
    (items, page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_three_records_make_three_pages() {
        let records: Vec<u32> = (0..23).collect();
        let (items, page) = paginate(records.clone(), 3, 10);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 23);
        assert_eq!(items, vec![20, 21, 22]);

        let (first, _) = paginate(records, 1, 10);
        assert_eq!(first, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn empty_input_still_has_one_page() {
        let (items, page) = paginate(Vec::<u32>::new(), 1, 10);
        assert!(items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_items, 0);
    }

    #[test]
    fn out_of_range_page_is_empty_not_an_error() {
        let (items, page) = paginate((0..5).collect::<Vec<u32>>(), 9, 10);
        assert!(items.is_empty());
        assert_eq!(page.page_number, 9);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn page_zero_reads_as_first_page() {
        let (items, page) = paginate((0..15).collect::<Vec<u32>>(), 0, 10);
        assert_eq!(page.page_number, 1);
        assert_eq!(items.len(), 10);
    }

    #[test]
    fn pages_partition_the_input() {
        for len in [0usize, 1, 9, 10, 11, 37] {
            for page_size in [1usize, 3, 10, 50] {
                let records: Vec<usize> = (0..len).collect();
                let pages = total_pages(len, page_size);
                let mut seen = Vec::new();
                for n in 1..=pages {
                    let (items, _) = paginate(records.clone(), n, page_size);
                    seen.extend(items);
                }
                assert_eq!(seen, records, "len {len}, page size {page_size}");
            }
        }
    }
}
