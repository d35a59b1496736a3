//! Read-only view derived from the listing state.

use crate::library::notification::Notification;

use super::PendingDelete;

/// Question shown while a delete awaits confirmation.
pub const DELETE_CONFIRMATION: &str =
    "Are you sure you want to delete this prompt? You will not be able to recover this prompt";

/// Everything a renderer needs to draw the listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<'a, R> {
    /// Rows on the current page after visibility rules.
    pub rows: Vec<&'a R>,
    /// Current page (1-based).
    pub current_page: usize,
    /// Number of pages over the filtered records.
    pub total_pages: usize,
    /// Number of records matching the filters.
    pub filtered_count: usize,
    /// Labels of the selected categories, shown as removable chips.
    pub active_category_labels: Vec<String>,
    /// True when the page slice is empty ("No matching prompts found...").
    pub is_empty: bool,
    /// True when the page selector should be offered.
    pub show_page_selector: bool,
    /// Delete awaiting confirmation, if any.
    pub pending_delete: Option<PendingDelete>,
    /// Notification to show, if any.
    pub notification: Option<&'a Notification>,
}

impl<R> ListView<'_, R> {
    /// Returns true while the confirmation dialog should be shown.
    #[must_use]
    pub const fn is_confirming_delete(&self) -> bool {
        self.pending_delete.is_some()
    }

    /// Confirmation question to show, if a delete is pending.
    #[must_use]
    pub const fn confirmation_message(&self) -> Option<&'static str> {
        match self.pending_delete {
            Some(_) => Some(DELETE_CONFIRMATION),
            None => None,
        }
    }
}
