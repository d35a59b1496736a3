//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.promptshelf.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `PROMPTSHELF_API_BASE_URL`,
//!    `PROMPTSHELF_QUERY`, and so on
//! 4. **Command-line arguments** – `--api-base-url`/`-a`, `--query`/`-q`, ...
//!
//! # Configuration File
//!
//! ```toml
//! api_base_url = "https://assistant.example.com"
//! public = true
//! page_size = 10
//! negative_feedback_options = "Too slow,Outdated answer"
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::feedback::{FeedbackType, PredefinedFeedbackOptions};
use crate::library::{LibraryError, PageSize, StatusFilter, Visibility};
use crate::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// List, search, and page through input prompts.
    Browse,
    /// Delete one input prompt, then show the refreshed listing.
    Delete,
    /// Submit feedback on a chat response.
    Feedback,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use promptshelf::PromptShelfConfig;
///
/// let config = PromptShelfConfig::load().expect("failed to load configuration");
/// let mode = config.operation_mode();
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PROMPTSHELF",
    discovery(
        dotfile_name = ".promptshelf.toml",
        config_file_name = "promptshelf.toml",
        app_name = "promptshelf"
    )
)]
pub struct PromptShelfConfig {
    /// Base URL of the assistant backend.
    ///
    /// Can be provided via:
    /// - CLI: `--api-base-url <URL>` or `-a <URL>`
    /// - Environment: `PROMPTSHELF_API_BASE_URL`
    /// - Config file: `api_base_url = "..."`
    #[ortho_config(cli_short = 'a')]
    pub api_base_url: String,

    /// Works on the public (admin) prompt collection instead of the user's
    /// private one.
    ///
    /// Can be provided via:
    /// - CLI: `--public` / `-p`
    /// - Config file: `public = true`
    #[ortho_config(cli_short = 'p')]
    pub public: bool,

    /// Rows shown per page. Defaults to 10.
    #[ortho_config()]
    pub page_size: Option<usize>,

    /// Case-insensitive text query matched against prompt and content.
    #[ortho_config(cli_short = 'q')]
    pub query: Option<String>,

    /// Comma-separated status filters (`active`, `inactive`).
    ///
    /// Selecting both statuses shows every record.
    #[ortho_config(cli_short = 's')]
    pub status: Option<String>,

    /// Page to show, starting at 1.
    #[ortho_config()]
    pub page: Option<usize>,

    /// Identifier of the input prompt to delete.
    #[ortho_config(cli_short = 'd')]
    pub delete_id: Option<u64>,

    /// Answers yes to the delete confirmation.
    ///
    /// Without it, delete mode prints the confirmation question and cancels.
    #[ortho_config(cli_short = 'y')]
    pub yes: bool,

    /// Chat message that feedback is submitted for.
    #[ortho_config()]
    pub feedback_message_id: Option<u64>,

    /// `like` or `dislike`.
    #[ortho_config()]
    pub feedback_type: Option<String>,

    /// Rating from 1 to 5; required to submit feedback.
    #[ortho_config()]
    pub rating: Option<u8>,

    /// Free-text feedback comment.
    #[ortho_config()]
    pub feedback_message: Option<String>,

    /// Corrected code to attach to the feedback.
    #[ortho_config()]
    pub correct_code: Option<String>,

    /// Answer quality label, e.g. `"Completely wrong"`.
    #[ortho_config()]
    pub result_quality: Option<String>,

    /// Retrieved-context label, e.g. `"AI misread the documents"`.
    #[ortho_config()]
    pub context_evaluation: Option<String>,

    /// One of the quick-pick reasons offered for the feedback type.
    #[ortho_config()]
    pub predefined_feedback: Option<String>,

    /// Comma-separated quick-pick reasons offered with positive feedback.
    ///
    /// Environment: `PROMPTSHELF_POSITIVE_FEEDBACK_OPTIONS`
    #[ortho_config()]
    pub positive_feedback_options: Option<String>,

    /// Comma-separated quick-pick reasons offered with negative feedback.
    ///
    /// Environment: `PROMPTSHELF_NEGATIVE_FEEDBACK_OPTIONS`
    #[ortho_config()]
    pub negative_feedback_options: Option<String>,

    /// Writes telemetry events to stderr as JSON lines.
    #[ortho_config()]
    pub telemetry: bool,

    /// Request timeout for backend calls, in seconds. Defaults to 20.
    #[ortho_config()]
    pub timeout_seconds: u64,
}

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECONDS: u64 = 20;

impl Default for PromptShelfConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            public: false,
            page_size: None,
            query: None,
            status: None,
            page: None,
            delete_id: None,
            yes: false,
            feedback_message_id: None,
            feedback_type: None,
            rating: None,
            feedback_message: None,
            correct_code: None,
            result_quality: None,
            context_evaluation: None,
            predefined_feedback: None,
            positive_feedback_options: None,
            negative_feedback_options: None,
            telemetry: false,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl PromptShelfConfig {
    /// Determines the operation mode based on provided configuration.
    ///
    /// Returns `Delete` when a delete id is set, `Feedback` when a chat
    /// message id is set, or `Browse` otherwise.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.delete_id.is_some() {
            OperationMode::Delete
        } else if self.feedback_message_id.is_some() {
            OperationMode::Feedback
        } else {
            OperationMode::Browse
        }
    }

    /// Validates configuration consistency.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Configuration`] when both `delete_id` and
    /// `feedback_message_id` are set, or when `page_size` or `page` is zero.
    pub fn validate(&self) -> Result<(), LibraryError> {
        if self.delete_id.is_some() && self.feedback_message_id.is_some() {
            return Err(configuration_error(
                "cannot combine --delete-id with --feedback-message-id",
            ));
        }
        if self.page == Some(0) {
            return Err(configuration_error("page numbers start at 1"));
        }
        self.resolve_page_size().map(drop)
    }

    /// Which prompt collection to work on.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        Visibility::from_public_flag(self.public)
    }

    /// Rows per page, falling back to the default of 10.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Configuration`] when the page size is zero.
    pub fn resolve_page_size(&self) -> Result<PageSize, LibraryError> {
        self.page_size.map_or_else(
            || Ok(PageSize::default()),
            |size| {
                PageSize::new(size)
                    .ok_or_else(|| configuration_error("page size must be at least 1"))
            },
        )
    }

    /// Page to show, defaulting to the first.
    #[must_use]
    pub const fn start_page(&self) -> usize {
        match self.page {
            Some(page) => page,
            None => 1,
        }
    }

    /// Parses the comma-separated status filters.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Configuration`] for unknown status names.
    pub fn status_filters(&self) -> Result<Vec<StatusFilter>, LibraryError> {
        let Some(raw) = self.status.as_deref() else {
            return Ok(Vec::new());
        };
        raw.split(',')
            .map(str::trim)
            .filter(|status| !status.is_empty())
            .map(|status| {
                status
                    .parse::<StatusFilter>()
                    .map_err(|error| configuration_error(error.to_string()))
            })
            .collect()
    }

    /// Returns the feedback type or an error if missing or unknown.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Configuration`] when no feedback type is set
    /// or the value is neither `like` nor `dislike`.
    pub fn require_feedback_type(&self) -> Result<FeedbackType, LibraryError> {
        let raw = self.feedback_type.as_deref().ok_or_else(|| {
            configuration_error("feedback type is required (use --feedback-type like|dislike)")
        })?;
        raw.parse::<FeedbackType>()
            .map_err(|error| configuration_error(error.to_string()))
    }

    /// Quick-pick reasons, with configured overrides applied.
    #[must_use]
    pub fn feedback_options(&self) -> PredefinedFeedbackOptions {
        PredefinedFeedbackOptions::from_overrides(
            self.positive_feedback_options.as_deref(),
            self.negative_feedback_options.as_deref(),
        )
    }

    /// Timeout applied to each backend request.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Sink for telemetry events, as selected by the `telemetry` flag.
    #[must_use]
    pub fn telemetry_sink(&self) -> Box<dyn TelemetrySink> {
        if self.telemetry {
            Box::new(StderrJsonlTelemetrySink)
        } else {
            Box::new(NoopTelemetrySink)
        }
    }
}

fn configuration_error(message: impl Into<String>) -> LibraryError {
    LibraryError::Configuration {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests;
