//! Delete mode: confirm, delete, and show the refreshed listing.

use std::io::{self, Write};

use promptshelf::PromptShelfConfig;
use promptshelf::library::{DeleteSettlement, InputPrompt, LibraryError, ListMsg, RecordStore};
use promptshelf::telemetry::{TelemetryEvent, TelemetrySink};

use super::output::{io_error, write_listing};
use super::{build_listing, prompt_store};

/// Deletes the prompt named by `--delete-id`.
///
/// # Errors
///
/// Returns [`LibraryError::Configuration`] when no id is configured or the
/// prompt is not in the listing, and [`LibraryError::DeleteFailed`] when the
/// backend rejects the delete.
pub async fn run(config: &PromptShelfConfig) -> Result<(), LibraryError> {
    let id = config.delete_id.ok_or_else(|| LibraryError::Configuration {
        message: "prompt id is required (use --delete-id or -d)".to_owned(),
    })?;
    let store = prompt_store(config)?;
    let telemetry = config.telemetry_sink();
    let mut stdout = io::stdout().lock();
    run_with_store(config, id, &store, telemetry.as_ref(), &mut stdout).await
}

/// Runs the delete flow against an arbitrary store, writing to `writer`.
///
/// Without `--yes` the confirmation question is printed and the delete is
/// cancelled. With it the delete runs, the listing is refreshed whatever the
/// outcome, and the refreshed table is printed.
///
/// # Errors
///
/// Returns [`LibraryError::DeleteFailed`] after printing the listing when
/// the backend rejected the delete.
pub async fn run_with_store<S, W>(
    config: &PromptShelfConfig,
    id: u64,
    store: &S,
    telemetry: &dyn TelemetrySink,
    writer: &mut W,
) -> Result<(), LibraryError>
where
    S: RecordStore<Record = InputPrompt> + ?Sized,
    W: Write,
{
    let records = store.fetch_records().await?;
    let mut listing = build_listing(config, records)?;
    if !listing.records().iter().any(|prompt| prompt.id == id) {
        return Err(LibraryError::Configuration {
            message: format!("input prompt {id} was not found"),
        });
    }

    listing.handle_message(ListMsg::RequestDelete(id));
    if let Some(question) = listing.view().confirmation_message() {
        writeln!(writer, "{question}").map_err(|e| io_error(&e))?;
    }

    if !config.yes {
        listing.handle_message(ListMsg::CancelDelete);
        writeln!(writer, "Delete cancelled; pass --yes to confirm.").map_err(|e| io_error(&e))?;
        return Ok(());
    }

    let Some(command) = listing.handle_message(ListMsg::ConfirmDelete) else {
        return Ok(());
    };
    let settlement = command.execute(store).await;
    let outcome = settlement.delete.clone();
    record_outcome(telemetry, &settlement);
    if outcome.is_ok() {
        writeln!(writer, "Deleted input prompt {id}.").map_err(|e| io_error(&e))?;
    }

    listing.handle_message(ListMsg::DeleteSettled(settlement));
    write_listing(writer, &listing.view())?;
    outcome
}

fn record_outcome(telemetry: &dyn TelemetrySink, settlement: &DeleteSettlement<InputPrompt>) {
    let id = settlement.id;
    match &settlement.delete {
        Ok(()) => telemetry.record(TelemetryEvent::PromptDeleted { id }),
        Err(error) => telemetry.record(TelemetryEvent::PromptDeleteFailed {
            id,
            message: error.to_string(),
        }),
    }
}
