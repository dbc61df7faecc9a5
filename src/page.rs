use crate::error::{OutlayError, Result};

/// Pagination envelope metadata returned alongside a page of data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

/// Slice one 1-based page out of `items`. A page past the end yields empty
/// data with the totals still filled in.
pub(crate) fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Result<Paginated<T>> {
    if page == 0 {
        return Err(OutlayError::InvalidInput("page must be at least 1".into()));
    }
    if page_size == 0 {
        return Err(OutlayError::InvalidInput(
            "page_size must be at least 1".into(),
        ));
    }

    let total_items = items.len();
    let data: Vec<T> = items
        .iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect();

    Ok(Paginated {
        data,
        pagination: PageInfo {
            page,
            page_size,
            total_items,
            total_pages: total_items.div_ceil(page_size),
        },
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_paginate_middle_page() {
        let items: Vec<i32> = (1..=25).collect();
        let page = paginate(&items, 2, 10).unwrap();
        assert_eq!(page.data, (11..=20).collect::<Vec<i32>>());
        assert_eq!(
            page.pagination,
            PageInfo {
                page: 2,
                page_size: 10,
                total_items: 25,
                total_pages: 3,
            }
        );
    }

    #[test]
    fn test_paginate_last_page_partial() {
        let items: Vec<i32> = (1..=25).collect();
        let page = paginate(&items, 3, 10).unwrap();
        assert_eq!(page.data.len(), 5);
        assert_eq!(page.pagination.total_pages, 3);
    }

    #[test]
    fn test_paginate_past_end_is_empty() {
        let items: Vec<i32> = (1..=5).collect();
        let page = paginate(&items, 4, 10).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total_items, 5);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn test_paginate_empty_input() {
        let items: Vec<i32> = Vec::new();
        let page = paginate(&items, 1, 10).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total_pages, 0);
    }

    #[test]
    fn test_paginate_exact_multiple() {
        let items: Vec<i32> = (1..=20).collect();
        let page = paginate(&items, 2, 10).unwrap();
        assert_eq!(page.data.len(), 10);
        assert_eq!(page.pagination.total_pages, 2);
    }

    #[test]
    fn test_paginate_rejects_zero_args() {
        let items = [1, 2, 3];
        assert!(paginate(&items, 0, 10).is_err());
        assert!(paginate(&items, 1, 0).is_err());
    }
}
