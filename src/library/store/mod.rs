//! Record store collaborators for the listing.
//!
//! The listing never mutates records itself. Deletes go through a
//! [`RecordStore`], after which the whole collection is re-fetched.

mod rest;

pub use rest::HttpPromptStore;

use async_trait::async_trait;

use super::error::LibraryError;
#[cfg(test)]
use super::models::InputPrompt;

/// Backend that owns the listed records.
#[cfg_attr(test, mockall::automock(type Record = InputPrompt;))]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Record type served by the store.
    type Record: Send;

    /// Fetch the full record collection.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError`] when the backend cannot be reached or rejects
    /// the request.
    async fn fetch_records(&self) -> Result<Vec<Self::Record>, LibraryError>;

    /// Delete one record.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::DeleteFailed`] when the backend does not
    /// confirm the delete, or [`LibraryError::Network`] on transport failure.
    async fn delete_record(&self, id: u64) -> Result<(), LibraryError>;
}
