//! HTTP implementation of the prompt record store.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::backend::{ApiClient, DEFAULT_TIMEOUT, describe_failure, map_transport_error};
use crate::library::error::LibraryError;
use crate::library::models::{InputPrompt, Visibility};

use super::RecordStore;

const COLLECTION: &str = "input_prompt";

/// Prompt store backed by the prompt REST API.
///
/// The visibility mode picks the namespace: public mode addresses
/// `/api/admin/input_prompt`, private mode `/api/input_prompt`.
#[derive(Debug, Clone)]
pub struct HttpPromptStore {
    api: ApiClient,
    visibility: Visibility,
}

impl HttpPromptStore {
    /// Creates a store for the backend at `base_url` with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Configuration`] when the URL is invalid or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, visibility: Visibility) -> Result<Self, LibraryError> {
        Self::with_timeout(base_url, visibility, DEFAULT_TIMEOUT)
    }

    /// Creates a store with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Configuration`] when the URL is invalid or the
    /// HTTP client cannot be built.
    pub fn with_timeout(
        base_url: &str,
        visibility: Visibility,
        timeout: Duration,
    ) -> Result<Self, LibraryError> {
        Ok(Self {
            api: ApiClient::new(base_url, timeout)?,
            visibility,
        })
    }

    /// Returns the namespace this store addresses.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn collection_url(&self) -> Result<Url, LibraryError> {
        self.api.endpoint([self.visibility.api_prefix(), COLLECTION])
    }

    fn record_url(&self, id: u64) -> Result<Url, LibraryError> {
        let id_segment = id.to_string();
        self.api
            .endpoint([self.visibility.api_prefix(), COLLECTION, id_segment.as_str()])
    }
}

#[async_trait]
impl RecordStore for HttpPromptStore {
    type Record = InputPrompt;

    async fn fetch_records(&self) -> Result<Vec<InputPrompt>, LibraryError> {
        let url = self.collection_url()?;
        tracing::debug!("fetching input prompts from {url}");

        let response = self
            .api
            .client()
            .get(url)
            .send()
            .await
            .map_err(|error| map_transport_error("fetch input prompts", &error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LibraryError::Api {
                message: format!(
                    "fetch input prompts failed with {}",
                    describe_failure(status, &body)
                ),
            });
        }

        response
            .json::<Vec<InputPrompt>>()
            .await
            .map_err(|error| LibraryError::Api {
                message: format!("input prompt JSON decoding failed: {error}"),
            })
    }

    async fn delete_record(&self, id: u64) -> Result<(), LibraryError> {
        let url = self.record_url(id)?;
        tracing::debug!("deleting input prompt {id} via {url}");

        let response = self
            .api
            .client()
            .delete(url)
            .send()
            .await
            .map_err(|error| map_transport_error("delete input prompt", &error))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = describe_failure(status, &body);
        tracing::warn!("input prompt {id} was not deleted: {message}");
        Err(LibraryError::DeleteFailed { id, message })
    }
}

#[cfg(test)]
mod tests {
    use super::HttpPromptStore;
    use crate::library::models::Visibility;

    #[test]
    fn public_store_addresses_admin_namespace() {
        let store = HttpPromptStore::new("http://localhost:8080", Visibility::Public)
            .expect("store should build");

        let url = store.record_url(5).expect("URL should build");

        assert_eq!(url.as_str(), "http://localhost:8080/api/admin/input_prompt/5");
    }

    #[test]
    fn private_store_addresses_user_namespace() {
        let store = HttpPromptStore::new("http://localhost:8080", Visibility::Private)
            .expect("store should build");

        let url = store.collection_url().expect("URL should build");

        assert_eq!(url.as_str(), "http://localhost:8080/api/input_prompt");
        assert_eq!(store.visibility(), Visibility::Private);
    }
}
