//! Browse mode: list input prompts one page at a time.

use std::io::{self, Write};

use promptshelf::PromptShelfConfig;
use promptshelf::library::{InputPrompt, LibraryError, RecordStore};

use super::output::write_listing;
use super::{build_listing, prompt_store};

/// Fetches the prompts and prints the configured page.
///
/// # Errors
///
/// Returns [`LibraryError::Configuration`] for invalid settings and
/// [`LibraryError::Api`] or [`LibraryError::Network`] when the fetch fails.
pub async fn run(config: &PromptShelfConfig) -> Result<(), LibraryError> {
    let store = prompt_store(config)?;
    let mut stdout = io::stdout().lock();
    run_with_store(config, &store, &mut stdout).await
}

/// Browse against an arbitrary store, writing to `writer`.
///
/// # Errors
///
/// Returns the store error when fetching fails.
pub async fn run_with_store<S, W>(
    config: &PromptShelfConfig,
    store: &S,
    writer: &mut W,
) -> Result<(), LibraryError>
where
    S: RecordStore<Record = InputPrompt> + ?Sized,
    W: Write,
{
    let records = store.fetch_records().await?;
    tracing::debug!("fetched {} input prompts", records.len());
    let listing = build_listing(config, records)?;
    write_listing(writer, &listing.view())
}
