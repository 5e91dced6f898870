//! Pure pagination math and page-label shaping.
//!
//! Pages are 1-indexed. The paginator never clamps the requested page;
//! callers keep it in range through [`PageState`].

use std::ops::Range;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// One element of a page-selector control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    Page(usize),
    Ellipsis,
}

/// Result of paginating `total_items` at a given page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page_count: usize,
    pub current_page: usize,
    /// Half-open index range of the current page's items
    pub range: Range<usize>,
    /// Empty when there is at most one page
    pub labels: Vec<PageLabel>,
}

impl Pagination {
    pub fn has_controls(&self) -> bool {
        self.page_count > 1
    }
}

/// Compute page count, item range and compressed labels.
pub fn paginate(
    total_items: usize,
    page_size: usize,
    current_page: usize,
) -> Result<Pagination, PaginationError> {
    let paginator = Paginator::new(page_size)?;
    Ok(paginator.paginate(total_items, current_page))
}

/// Number of pages needed for `total_items`; zero items means zero pages.
pub fn page_count(total_items: usize, page_size: usize) -> Result<usize, PaginationError> {
    Ok(Paginator::new(page_size)?.page_count(total_items))
}

/// Paginator bound to a validated page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::InvalidArgument("page size must be positive"));
        }
        Ok(Self { page_size })
    }

    /// Like [`Paginator::new`], but a zero page size becomes 1.
    pub fn at_least_one(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size)
    }

    /// Item index range for `page`, empty when the page is out of range.
    pub fn range(&self, total_items: usize, page: usize) -> Range<usize> {
        if page == 0 {
            return 0..0;
        }
        let start = (page - 1).saturating_mul(self.page_size);
        let end = page.saturating_mul(self.page_size);
        start.min(total_items)..end.min(total_items)
    }

    pub fn slice<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        &items[self.range(items.len(), page)]
    }

    pub fn paginate(&self, total_items: usize, current_page: usize) -> Pagination {
        let page_count = self.page_count(total_items);
        Pagination {
            page_count,
            current_page,
            range: self.range(total_items, current_page),
            labels: page_labels(page_count, current_page),
        }
    }
}

/// First, last and neighbours of `current`; every gap becomes one ellipsis.
pub fn page_labels(page_count: usize, current_page: usize) -> Vec<PageLabel> {
    if page_count <= 1 {
        return Vec::new();
    }

    let mut labels = Vec::new();
    let mut previous: Option<usize> = None;
    for page in 1..=page_count {
        let keep = page == 1 || page == page_count || page.abs_diff(current_page) <= 1;
        if !keep {
            continue;
        }
        if let Some(prev) = previous {
            if page != prev + 1 {
                labels.push(PageLabel::Ellipsis);
            }
        }
        labels.push(PageLabel::Page(page));
        previous = Some(page);
    }
    labels
}

/// Current page and page size of a list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current: usize,
    paginator: Paginator,
}

impl PageState {
    pub fn new(page_size: usize) -> Result<Self, PaginationError> {
        Ok(Self {
            current: 1,
            paginator: Paginator::new(page_size)?,
        })
    }

    pub fn at_least_one(page_size: usize) -> Self {
        Self {
            current: 1,
            paginator: Paginator::at_least_one(page_size),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn paginator(&self) -> Paginator {
        self.paginator
    }

    /// Back to the first page (on every criteria change)
    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Keep the page within `[1, max(page_count, 1)]`
    pub fn clamp_to(&mut self, page_count: usize) {
        self.current = self.current.clamp(1, page_count.max(1));
    }

    pub fn go_to(&mut self, page: usize, page_count: usize) {
        self.current = page;
        self.clamp_to(page_count);
    }

    pub fn can_go_previous(&self) -> bool {
        self.current > 1
    }

    pub fn can_go_next(&self, page_count: usize) -> bool {
        self.current < page_count
    }

    pub fn previous(&mut self) {
        if self.can_go_previous() {
            self.current -= 1;
        }
    }

    pub fn next(&mut self, page_count: usize) {
        if self.can_go_next(page_count) {
            self.current += 1;
        }
    }
}
