//! Delete confirmation handlers for the listing.
//!
//! The confirmation dialog opens on `RequestDelete`, stays open while the
//! delete is in flight, and closes once the delete and refresh settle,
//! whatever their outcome.

use crate::library::filter::CategoryFilter;
use crate::library::models::ListRecord;
use crate::library::notification::Notification;
use crate::library::store::RecordStore;

use super::{DeleteSettlement, ListCommand, ListFilterPaginator, ListMsg, PendingDelete};

const DELETE_FAILED_MESSAGE: &str = "Failed to delete input prompt";

impl<R, C> ListFilterPaginator<R, C>
where
    R: ListRecord,
    C: CategoryFilter<R>,
{
    pub(super) fn handle_request_delete(&mut self, id: u64) {
        if self.pending_delete.is_some_and(|pending| pending.in_flight) {
            tracing::debug!("ignoring delete request for {id}: a delete is in flight");
            return;
        }
        self.pending_delete = Some(PendingDelete {
            id,
            in_flight: false,
        });
    }

    pub(super) fn handle_confirm_delete(&mut self) -> Option<ListCommand> {
        let pending = self.pending_delete.as_mut()?;
        if pending.in_flight {
            return None;
        }
        pending.in_flight = true;
        Some(ListCommand::DeleteRecord { id: pending.id })
    }

    pub(super) fn handle_cancel_delete(&mut self) {
        if self.pending_delete.is_some_and(|pending| pending.in_flight) {
            return;
        }
        self.pending_delete = None;
    }

    pub(super) fn handle_delete_settled(&mut self, settlement: DeleteSettlement<R>) {
        let DeleteSettlement {
            id,
            delete,
            refresh,
        } = settlement;

        self.notification = match delete {
            Ok(()) => None,
            Err(error) => {
                tracing::debug!("delete of record {id} settled with error: {error}");
                Some(Notification::error(DELETE_FAILED_MESSAGE))
            }
        };

        match refresh {
            Ok(records) => self.replace_records(records),
            Err(error) => {
                if self.notification.is_none() {
                    self.notification = Some(Notification::error(format!(
                        "Failed to refresh input prompts: {error}"
                    )));
                }
            }
        }

        self.pending_delete = None;
    }

    /// Confirms the pending delete and runs it against `store`.
    ///
    /// Returns `false` when there was nothing to confirm.
    pub async fn confirm_delete<S>(&mut self, store: &S) -> bool
    where
        S: RecordStore<Record = R> + ?Sized,
    {
        let Some(command) = self.handle_message(ListMsg::ConfirmDelete) else {
            return false;
        };
        let settlement = command.execute(store).await;
        self.handle_message(ListMsg::DeleteSettled(settlement));
        true
    }
}
