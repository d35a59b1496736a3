//! promptshelf library crate for managing assistant input prompts.
//!
//! The library keeps a searchable, paginated listing of input prompts with
//! a confirmed delete flow, talks to the assistant backend over REST, and
//! captures structured feedback on chat responses.

mod backend;
pub mod config;
pub mod feedback;
pub mod library;
pub mod telemetry;

pub use config::{OperationMode, PromptShelfConfig};
pub use feedback::{FeedbackDraft, FeedbackService, FeedbackType, HttpFeedbackService};
pub use library::{
    HttpPromptStore, InputPrompt, LibraryError, ListMsg, PromptListing, RecordStore, StatusFilter,
    Visibility,
};
