//! Prompt library listing: filtering, pagination and delete confirmation.
//!
//! The listing engine is generic over the record and category types so it
//! can drive any table of records. The prompt-specific pieces are
//! [`InputPrompt`], [`StatusFilter`] and [`HttpPromptStore`].

pub mod error;
pub mod filter;
pub mod models;
pub mod notification;
pub mod pagination;
pub mod paginator;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::LibraryError;
pub use filter::{CategoryFilter, FilterState, StatusFilter, StatusFilterParseError, matches};
pub use models::{InputPrompt, ListRecord, Visibility};
pub use notification::Notification;
pub use pagination::{Page, PageSize, paginate, total_pages};
pub use paginator::{
    DELETE_CONFIRMATION, DeleteSettlement, ListCommand, ListFilterPaginator, ListMsg, ListView,
    PendingDelete,
};
pub use store::{HttpPromptStore, RecordStore};

/// Listing of prompts filtered by status.
pub type PromptListing = ListFilterPaginator<InputPrompt, StatusFilter>;
