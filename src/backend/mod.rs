//! Shared HTTP plumbing for the prompt backend adapters.
//!
//! Both the record store and the feedback service talk to the same backend,
//! so endpoint construction and error mapping live here.

mod error_mapping;

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::library::error::LibraryError;

pub(crate) use error_mapping::{describe_failure, map_transport_error};

/// Default request timeout for backend calls.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Base URL plus a configured reqwest client.
#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    base_url: Url,
    client: Client,
}

impl ApiClient {
    /// Builds a client for the backend rooted at `base_url`.
    pub(crate) fn new(base_url: &str, timeout: Duration) -> Result<Self, LibraryError> {
        let parsed = Url::parse(base_url).map_err(|error| LibraryError::Configuration {
            message: format!("API base URL '{base_url}' is invalid: {error}"),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(LibraryError::Configuration {
                message: format!("API base URL '{base_url}' cannot carry a path"),
            });
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| LibraryError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;

        Ok(Self {
            base_url: parsed,
            client,
        })
    }

    /// Appends path segments to the base URL.
    ///
    /// Each segment may itself contain `/`-separated parts.
    pub(crate) fn endpoint<'a>(
        &self,
        segments: impl IntoIterator<Item = &'a str>,
    ) -> Result<Url, LibraryError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| LibraryError::Configuration {
                    message: format!("API base URL '{}' cannot carry a path", self.base_url),
                })?;
            path.pop_if_empty();
            for segment in segments {
                path.extend(segment.split('/').filter(|part| !part.is_empty()));
            }
        }
        Ok(url)
    }

    pub(crate) const fn client(&self) -> &Client {
        &self.client
    }
}
