//! Test-support utilities for listing and delete flows.

use std::sync::Mutex;

use async_trait::async_trait;

use super::error::LibraryError;
use super::models::InputPrompt;
use super::store::RecordStore;

/// Call observed by [`StubPromptStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreCall {
    /// `fetch_records` was called.
    Fetch,
    /// `delete_record` was called with the given id.
    Delete(u64),
}

/// Deterministic in-memory prompt store used by unit and behavioural tests.
///
/// A successful delete removes the record from the stored collection, so the
/// follow-up fetch reflects it.
#[derive(Debug)]
pub struct StubPromptStore {
    prompts: Mutex<Vec<InputPrompt>>,
    delete_error: Option<LibraryError>,
    fetch_error: Option<LibraryError>,
    refresh_error: Option<LibraryError>,
    calls: Mutex<Vec<StoreCall>>,
}

impl StubPromptStore {
    /// Creates a store whose deletes and fetches succeed.
    #[must_use]
    pub const fn new(prompts: Vec<InputPrompt>) -> Self {
        Self {
            prompts: Mutex::new(prompts),
            delete_error: None,
            fetch_error: None,
            refresh_error: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Makes every delete fail with `error`.
    #[must_use]
    pub fn with_delete_error(mut self, error: LibraryError) -> Self {
        self.delete_error = Some(error);
        self
    }

    /// Makes every fetch fail with `error`.
    #[must_use]
    pub fn with_fetch_error(mut self, error: LibraryError) -> Self {
        self.fetch_error = Some(error);
        self
    }

    /// Makes fetches fail with `error` once a delete has been attempted.
    #[must_use]
    pub fn with_refresh_error(mut self, error: LibraryError) -> Self {
        self.refresh_error = Some(error);
        self
    }

    /// Returns the calls made so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn has_attempted_delete(&self) -> bool {
        self.calls()
            .iter()
            .any(|call| matches!(call, StoreCall::Delete(_)))
    }

    fn record_call(&self, call: StoreCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

#[async_trait]
impl RecordStore for StubPromptStore {
    type Record = InputPrompt;

    async fn fetch_records(&self) -> Result<Vec<InputPrompt>, LibraryError> {
        self.record_call(StoreCall::Fetch);
        if let Some(error) = &self.fetch_error {
            return Err(error.clone());
        }
        if let Some(error) = &self.refresh_error
            && self.has_attempted_delete()
        {
            return Err(error.clone());
        }
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .map_err(|error| LibraryError::Io {
                message: error.to_string(),
            })
    }

    async fn delete_record(&self, id: u64) -> Result<(), LibraryError> {
        self.record_call(StoreCall::Delete(id));
        if let Some(error) = &self.delete_error {
            return Err(error.clone());
        }
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.retain(|prompt| prompt.id != id);
        }
        Ok(())
    }
}

/// Builds `count` prompts with ids `1..=count`; even ids are active.
#[must_use]
pub fn sample_prompts(count: u64) -> Vec<InputPrompt> {
    (1..=count)
        .map(|id| InputPrompt {
            id,
            prompt: format!("Prompt {id}"),
            content: format!("Content for prompt {id}"),
            active: (id & 1) == 0,
            is_public: false,
        })
        .collect()
}
