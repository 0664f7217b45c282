//! Page-number pagination with an orphan threshold.
//!
//! A [`Paginator`] turns a total item count and a requested page into a
//! [`PageWindow`] (offset/limit for the storage query). The fetched items are
//! then wrapped into a [`Page`] carrying the navigation metadata templates and
//! JSON responses need.
//!
//! # Orphans
//!
//! When the last page would hold `orphans` items or fewer, those items are
//! merged into the previous page. With 7 items, 3 per page and 1 orphan the
//! pages are `[3, 4]` instead of `[3, 3, 1]`.

/// Page size and orphan threshold for one kind of listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    per_page: i64,
    orphans: i64,
}

impl Paginator {
    /// Creates a paginator.
    ///
    /// `per_page` is raised to 1 and `orphans` clamped to `[0, per_page)`;
    /// configuration validation rejects such values before they get here.
    pub fn new(per_page: i64, orphans: i64) -> Self {
        let per_page = per_page.max(1);
        let orphans = orphans.clamp(0, per_page - 1);
        Self { per_page, orphans }
    }

    pub fn per_page(&self) -> i64 {
        self.per_page
    }

    pub fn orphans(&self) -> i64 {
        self.orphans
    }

    /// Number of pages for `count` items. An empty listing still has one page.
    pub fn num_pages(&self, count: i64) -> i64 {
        if count <= 0 {
            return 1;
        }
        let hits = (count - self.orphans).max(1);
        (hits - 1) / self.per_page + 1
    }

    /// Resolves the requested page against `count` items.
    ///
    /// Out-of-range and unparsable page numbers never fail, see [`PageRequest`].
    pub fn window(&self, count: i64, requested: &PageRequest) -> PageWindow {
        let count = count.max(0);
        let num_pages = self.num_pages(count);

        let number = match requested {
            PageRequest::First => 1,
            PageRequest::Last => num_pages,
            PageRequest::Number(n) => (*n).clamp(1, num_pages),
        };

        let offset = (number - 1) * self.per_page;
        let mut top = offset.saturating_add(self.per_page);
        if top.saturating_add(self.orphans) >= count {
            top = count;
        }
        let limit = (top - offset).max(0);

        PageWindow {
            number,
            num_pages,
            count,
            per_page: self.per_page,
            offset,
            limit,
        }
    }
}

/// A page number as submitted by a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageRequest {
    #[default]
    First,
    Last,
    Number(i64),
}

impl PageRequest {
    /// Parses a `page` query value.
    ///
    /// - missing, blank or non-numeric → first page
    /// - `last` → last page
    /// - anything else is taken as a number and clamped later
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => PageRequest::First,
            Some(v) if v.eq_ignore_ascii_case("last") => PageRequest::Last,
            Some(v) => v
                .parse::<i64>()
                .map(PageRequest::Number)
                .unwrap_or(PageRequest::First),
        }
    }
}

/// The slice of a listing to fetch for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub number: i64,
    pub num_pages: i64,
    pub count: i64,
    pub per_page: i64,
    pub offset: i64,
    pub limit: i64,
}

impl PageWindow {
    /// Wraps the items fetched for this window.
    pub fn into_page<T>(self, items: Vec<T>) -> Page<T> {
        Page {
            items,
            number: self.number,
            num_pages: self.num_pages,
            count: self.count,
            per_page: self.per_page,
        }
    }
}

/// One page of a listing plus navigation metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: i64,
    pub num_pages: i64,
    pub count: i64,
    pub per_page: i64,
}

/// A numbered link in a pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub number: i64,
    pub current: bool,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_other_pages(&self) -> bool {
        self.has_next() || self.has_previous()
    }

    pub fn next_page_number(&self) -> i64 {
        (self.number + 1).min(self.num_pages)
    }

    pub fn previous_page_number(&self) -> i64 {
        (self.number - 1).max(1)
    }

    /// Links for every page, the current one flagged.
    pub fn page_links(&self) -> Vec<PageLink> {
        (1..=self.num_pages)
            .map(|number| PageLink {
                number,
                current: number == self.number,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Converts the items, keeping the metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            number: self.number,
            num_pages: self.num_pages,
            count: self.count,
            per_page: self.per_page,
        }
    }
}
