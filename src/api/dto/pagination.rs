//! Paginated response envelope.

use serde::Serialize;

use crate::domain::pagination::Page;

/// Navigation metadata of one page.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

/// One page of items with its metadata.
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub pagination: PaginationMeta,
    pub items: Vec<T>,
}

impl<T, U: Into<T>> From<Page<U>> for PageResponse<T> {
    fn from(page: Page<U>) -> Self {
        let pagination = PaginationMeta {
            page: page.number,
            page_size: page.per_page,
            total_items: page.count,
            total_pages: page.num_pages,
            has_next: page.has_next(),
            has_previous: page.has_previous(),
        };

        Self {
            pagination,
            items: page.items.into_iter().map(Into::into).collect(),
        }
    }
}
