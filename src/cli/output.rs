//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use promptshelf::library::{InputPrompt, LibraryError, ListView};

use super::table::fit_cell;

const PROMPT_WIDTH: usize = 24;
const CONTENT_WIDTH: usize = 48;
const STATUS_WIDTH: usize = 8;

/// Shown in place of the rows when the page has nothing to list.
pub const NO_MATCHES: &str = "No matching prompts found...";

/// Writes the prompt table for the current page to the given writer.
///
/// The notification, if any, comes first, followed by the selected status
/// chips, the table, and the page footer.
pub fn write_listing<W: Write>(
    writer: &mut W,
    view: &ListView<'_, InputPrompt>,
) -> Result<(), LibraryError> {
    if let Some(notification) = view.notification {
        writeln!(writer, "{notification}").map_err(|e| io_error(&e))?;
    }

    if !view.active_category_labels.is_empty() {
        writeln!(
            writer,
            "Statuses: {}",
            view.active_category_labels.join(", ")
        )
        .map_err(|e| io_error(&e))?;
    }

    writeln!(
        writer,
        "{}  {}  {}  ID",
        fit_cell("PROMPT", PROMPT_WIDTH),
        fit_cell("CONTENT", CONTENT_WIDTH),
        fit_cell("STATUS", STATUS_WIDTH),
    )
    .map_err(|e| io_error(&e))?;

    if view.is_empty {
        writeln!(writer, "{NO_MATCHES}").map_err(|e| io_error(&e))?;
        return Ok(());
    }

    for prompt in &view.rows {
        writeln!(
            writer,
            "{}  {}  {}  {}",
            fit_cell(&prompt.prompt, PROMPT_WIDTH),
            fit_cell(&prompt.content, CONTENT_WIDTH),
            fit_cell(prompt.status_label(), STATUS_WIDTH),
            prompt.id
        )
        .map_err(|e| io_error(&e))?;
    }

    if view.show_page_selector {
        writeln!(writer).map_err(|e| io_error(&e))?;
        writeln!(
            writer,
            "Page {} of {} ({} matching prompts)",
            view.current_page, view.total_pages, view.filtered_count
        )
        .map_err(|e| io_error(&e))?;
    }

    Ok(())
}

/// Converts an I/O error to a [`LibraryError::Io`].
pub(crate) fn io_error(error: &io::Error) -> LibraryError {
    LibraryError::Io {
        message: error.to_string(),
    }
}
