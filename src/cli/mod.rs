//! CLI operation mode handlers.
//!
//! This module contains the implementations for different operation modes:
//! - [`browse`]: Search, filter, and page through input prompts
//! - [`delete`]: Confirm and delete one input prompt
//! - [`feedback`]: Submit feedback on a chat response
//!
//! Output formatting utilities are in [`output`].

use promptshelf::PromptShelfConfig;
use promptshelf::library::{HttpPromptStore, InputPrompt, LibraryError, ListMsg, PromptListing};

pub mod browse;
pub mod delete;
pub mod feedback;
pub mod output;
mod table;

#[cfg(test)]
pub mod test_utils;

/// Builds the prompt store for the configured backend and visibility.
pub fn prompt_store(config: &PromptShelfConfig) -> Result<HttpPromptStore, LibraryError> {
    HttpPromptStore::with_timeout(
        &config.api_base_url,
        config.visibility(),
        config.request_timeout(),
    )
}

/// Builds a listing over `records` with the configured query, statuses,
/// page size, and page applied.
pub fn build_listing(
    config: &PromptShelfConfig,
    records: Vec<InputPrompt>,
) -> Result<PromptListing, LibraryError> {
    let mut listing = PromptListing::new(records, config.visibility())
        .with_page_size(config.resolve_page_size()?);

    if let Some(query) = config.query.as_deref() {
        listing.handle_message(ListMsg::SetQuery(query.to_owned()));
    }
    for status in config.status_filters()? {
        if !listing.active_categories().contains(&status) {
            listing.handle_message(ListMsg::ToggleCategory(status));
        }
    }
    listing.handle_message(ListMsg::SetPage(config.start_page()));

    Ok(listing)
}
