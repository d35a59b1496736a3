//! Filtered, paginated listing with inline delete confirmation.
//!
//! [`ListFilterPaginator`] owns the query, the selected categories, the
//! current page and the delete confirmation sub-state. Every message is
//! handled synchronously by [`ListFilterPaginator::handle_message`]; the only
//! async step is the delete itself, which is returned as a [`ListCommand`]
//! for the caller to run.
//!
//! # Page policy
//!
//! - A query change resets the page to 1.
//! - A category toggle keeps the current page, clamped into
//!   `1..=total_pages`.
//! - Replacing the records (refresh after delete) clamps the same way.
//! - [`ListMsg::SetPage`] is stored unclamped; an out-of-range page renders
//!   empty.
//!
//! # Module Structure
//!
//! - `messages`: message, command and settlement types
//! - `delete_handlers`: confirmation sub-state transitions
//! - `view`: the derived read-only view

mod delete_handlers;
mod messages;
mod view;

pub use messages::{DeleteSettlement, ListCommand, ListMsg};
pub use view::{DELETE_CONFIRMATION, ListView};

use crate::library::filter::{CategoryFilter, FilterState};
use crate::library::models::{ListRecord, Visibility};
use crate::library::notification::Notification;
use crate::library::pagination::{Page, PageSize, paginate, total_pages};

/// Delete awaiting confirmation or completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDelete {
    /// Record the user asked to delete.
    pub id: u64,
    /// Whether the delete call has been issued and not yet settled.
    pub in_flight: bool,
}

/// Listing state machine over a record collection.
#[derive(Debug, Clone)]
pub struct ListFilterPaginator<R, C> {
    /// All records (unfiltered).
    records: Vec<R>,
    /// Indices of records matching the current filter.
    /// Invalidated when records or filters change.
    filtered_indices: Vec<usize>,
    filter_state: FilterState<C>,
    current_page: usize,
    page_size: PageSize,
    visibility: Visibility,
    pending_delete: Option<PendingDelete>,
    notification: Option<Notification>,
}

impl<R, C> ListFilterPaginator<R, C>
where
    R: ListRecord,
    C: CategoryFilter<R>,
{
    /// Creates a listing over `records` with default filters on page 1.
    #[must_use]
    pub fn new(records: Vec<R>, visibility: Visibility) -> Self {
        let filtered_indices = (0..records.len()).collect();
        Self {
            records,
            filtered_indices,
            filter_state: FilterState::default(),
            current_page: 1,
            page_size: PageSize::default(),
            visibility,
            pending_delete: None,
            notification: None,
        }
    }

    /// Sets the number of rows per page.
    #[must_use]
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Handles a message, returning deferred work when a delete is confirmed.
    pub fn handle_message(&mut self, msg: ListMsg<R, C>) -> Option<ListCommand> {
        match msg {
            ListMsg::SetQuery(query) => {
                self.set_query(query);
                None
            }
            ListMsg::ToggleCategory(category) => {
                self.toggle_category(category);
                None
            }
            ListMsg::SetPage(page) => {
                self.current_page = page;
                None
            }
            ListMsg::RequestDelete(id) => {
                self.handle_request_delete(id);
                None
            }
            ListMsg::ConfirmDelete => self.handle_confirm_delete(),
            ListMsg::CancelDelete => {
                self.handle_cancel_delete();
                None
            }
            ListMsg::DeleteSettled(settlement) => {
                self.handle_delete_settled(settlement);
                None
            }
            ListMsg::RecordsRefreshed(records) => {
                self.replace_records(records);
                None
            }
            ListMsg::DismissNotification => {
                self.notification = None;
                None
            }
        }
    }

    fn set_query(&mut self, query: String) {
        self.filter_state.set_query(query);
        self.rebuild_filter_cache();
        self.current_page = 1;
    }

    fn toggle_category(&mut self, category: C) {
        self.filter_state.toggle_category(category);
        self.rebuild_filter_cache();
        self.clamp_page();
    }

    pub(crate) fn replace_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.rebuild_filter_cache();
        self.clamp_page();
    }

    /// Rebuilds the filtered indices cache from the current filter.
    fn rebuild_filter_cache(&mut self) {
        self.filtered_indices = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                crate::library::filter::matches(
                    *record,
                    self.filter_state.query(),
                    self.filter_state.active_categories(),
                )
            })
            .map(|(index, _)| index)
            .collect();
    }

    fn clamp_page(&mut self) {
        self.current_page = self.current_page.clamp(1, self.total_pages());
    }

    /// Returns every record, unfiltered.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Returns the records matching the current filter, in input order.
    #[must_use]
    pub fn filtered_records(&self) -> Vec<&R> {
        self.filtered_indices
            .iter()
            .filter_map(|&index| self.records.get(index))
            .collect()
    }

    /// Returns the count of records matching the current filter.
    #[must_use]
    pub const fn filtered_count(&self) -> usize {
        self.filtered_indices.len()
    }

    /// Returns the current free-text query.
    #[must_use]
    pub fn query(&self) -> &str {
        self.filter_state.query()
    }

    /// Returns the selected categories in selection order.
    #[must_use]
    pub fn active_categories(&self) -> &[C] {
        self.filter_state.active_categories()
    }

    /// Returns the current page (1-based, possibly out of range).
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the number of rows per page.
    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Returns the number of pages over the filtered records.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        total_pages(self.filtered_indices.len(), self.page_size)
    }

    /// Returns the visibility mode rows are rendered in.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns the delete awaiting confirmation, if any.
    #[must_use]
    pub const fn pending_delete(&self) -> Option<PendingDelete> {
        self.pending_delete
    }

    /// Returns the current notification, if any.
    #[must_use]
    pub const fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Returns the current page of filtered records, before visibility rules.
    fn page_indices(&self) -> Page<'_, usize> {
        paginate(&self.filtered_indices, self.page_size, self.current_page)
    }

    /// Returns the rows to render on the current page.
    ///
    /// Records hidden by the visibility mode are dropped after slicing, so a
    /// page may show fewer than `page_size` rows.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<&R> {
        self.page_indices()
            .items()
            .iter()
            .filter_map(|&index| self.records.get(index))
            .filter(|record| self.visibility.shows(*record))
            .collect()
    }

    /// Builds the read-only view for rendering.
    #[must_use]
    pub fn view(&self) -> ListView<'_, R> {
        let page = self.page_indices();
        ListView {
            rows: self.visible_rows(),
            current_page: self.current_page,
            total_pages: page.total_pages(),
            filtered_count: self.filtered_count(),
            active_category_labels: self
                .active_categories()
                .iter()
                .map(|category| category.label().to_owned())
                .collect(),
            is_empty: page.is_empty(),
            show_page_selector: !page.is_empty(),
            pending_delete: self.pending_delete,
            notification: self.notification.as_ref(),
        }
    }
}
