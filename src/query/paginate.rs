//! Fixed-size paging over the derived incident list.

use serde::Serialize;

/// One page of the derived list plus what the pager controls need
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// `ceil(count / page_size)`; zero for an empty list.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Whether a page-change request is in bounds. Out-of-range requests are
/// ignored by callers rather than treated as errors.
pub fn accepts(requested: usize, total_pages: usize) -> bool {
    (1..=total_pages).contains(&requested)
}

/// Slice `[(page-1)*size, page*size)` clipped to the list. A page past the
/// end yields no items.
pub fn paginate<T: Clone>(ordered: &[T], page_size: usize, current_page: usize) -> Page<T> {
    let total = total_pages(ordered.len(), page_size);
    let start = current_page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(ordered.len());
    let end = start.saturating_add(page_size).min(ordered.len());

    Page {
        items: ordered[start..end].to_vec(),
        current_page,
        total_pages: total,
        total_matches: ordered.len(),
    }
}
