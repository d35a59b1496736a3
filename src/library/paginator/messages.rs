//! Message and command types for the listing update loop.
//!
//! Messages represent user actions and settled async work. Handling a
//! message may return a [`ListCommand`] that the caller executes against a
//! [`RecordStore`] and feeds back as [`ListMsg::DeleteSettled`].

use crate::library::error::LibraryError;
use crate::library::store::RecordStore;

/// Messages for the listing state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum ListMsg<R, C> {
    // Filter changes
    /// Replace the free-text query.
    SetQuery(String),
    /// Select or deselect a category.
    ToggleCategory(C),

    // Navigation
    /// Jump to a page (1-based).
    SetPage(usize),

    // Delete confirmation
    /// Open the confirmation dialog for a record.
    RequestDelete(u64),
    /// Accept the pending delete.
    ConfirmDelete,
    /// Dismiss the confirmation dialog.
    CancelDelete,
    /// The delete and the follow-up refresh finished.
    DeleteSettled(DeleteSettlement<R>),

    // Data loading
    /// The collection was re-fetched outside a delete.
    RecordsRefreshed(Vec<R>),
    /// Clear the current notification.
    DismissNotification,
}

/// Deferred work requested by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListCommand {
    /// Delete a record and then re-fetch the collection.
    DeleteRecord {
        /// Record to delete.
        id: u64,
    },
}

impl ListCommand {
    /// Runs the command against a store.
    ///
    /// The refresh is issued whether or not the delete succeeded.
    pub async fn execute<S>(self, store: &S) -> DeleteSettlement<S::Record>
    where
        S: RecordStore + ?Sized,
    {
        match self {
            Self::DeleteRecord { id } => {
                let delete = store.delete_record(id).await;
                if let Err(error) = &delete {
                    tracing::warn!("delete of record {id} failed: {error}");
                }
                let refresh = store.fetch_records().await;
                DeleteSettlement {
                    id,
                    delete,
                    refresh,
                }
            }
        }
    }
}

/// Outcome of a delete command.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteSettlement<R> {
    /// Record the delete targeted.
    pub id: u64,
    /// Result of the delete call.
    pub delete: Result<(), LibraryError>,
    /// Result of the re-fetch that followed it.
    pub refresh: Result<Vec<R>, LibraryError>,
}
