//! Fixed-size page slicing over an already filtered sequence.
//!
//! Pages are 1-based. Requesting a page outside `1..=total_pages` yields an
//! empty slice rather than an error, so a stale page number can never panic
//! the view.

use std::num::NonZeroUsize;

/// Number of rows rendered per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Rows per page used by the prompt table.
    pub const DEFAULT: Self = Self(NonZeroUsize::MIN.saturating_add(9));

    /// Creates a page size, rejecting zero.
    #[must_use]
    pub const fn new(size: usize) -> Option<Self> {
        match NonZeroUsize::new(size) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Returns the number of rows per page.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Returns the number of pages needed for `item_count` items.
///
/// An empty sequence still has one (empty) page.
#[must_use]
pub const fn total_pages(item_count: usize, page_size: PageSize) -> usize {
    let pages = item_count.div_ceil(page_size.get());
    if pages == 0 { 1 } else { pages }
}

/// One page of a paginated sequence.
///
/// # Example
///
/// ```
/// use promptshelf::library::pagination::{PageSize, paginate};
///
/// let items: Vec<u32> = (1..=12).collect();
/// let page = paginate(&items, PageSize::DEFAULT, 2);
/// assert_eq!(page.items(), &[11, 12]);
/// assert_eq!(page.total_pages(), 2);
/// assert!(page.is_last_page());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    items: &'a [T],
    current_page: usize,
    total_pages: usize,
}

impl<'a, T> Page<'a, T> {
    /// Returns the items on this page.
    #[must_use]
    pub const fn items(&self) -> &'a [T] {
        self.items
    }

    /// Returns the requested page number (1-based, possibly out of range).
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns true if the page holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Returns true if an earlier page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Returns true if this is the first page.
    #[must_use]
    pub const fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    /// Returns true if this is the last page.
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        self.current_page == self.total_pages
    }
}

/// Slices `items` into the requested page.
///
/// Order is preserved and nothing is re-sorted. Out-of-range pages return an
/// empty slice.
#[must_use]
pub fn paginate<T>(items: &[T], page_size: PageSize, current_page: usize) -> Page<'_, T> {
    let size = page_size.get();
    let page_items = current_page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(size))
        .and_then(|start| {
            let end = start.saturating_add(size).min(items.len());
            items.get(start..end)
        })
        .unwrap_or(&[]);

    Page {
        items: page_items,
        current_page,
        total_pages: total_pages(items.len(), page_size),
    }
}
