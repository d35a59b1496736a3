//! Posting feedback to the chat backend.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::backend::{ApiClient, DEFAULT_TIMEOUT, describe_failure, map_transport_error};
use crate::library::error::LibraryError;

use super::draft::{FeedbackDetails, FeedbackDraft};
use super::model::{ContextEvaluation, FeedbackType, Rating, ResultQuality};

const FEEDBACK_ENDPOINT: &str = "api/chat/create-chat-message-feedback";

/// Destination for submitted feedback.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackService: Send + Sync {
    /// Record feedback for one chat message.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError`] when the backend rejects the feedback or
    /// cannot be reached.
    async fn submit_feedback(
        &self,
        chat_message_id: u64,
        feedback_type: FeedbackType,
        details: &FeedbackDetails,
    ) -> Result<(), LibraryError>;
}

/// Feedback service backed by the chat REST API.
#[derive(Debug, Clone)]
pub struct HttpFeedbackService {
    api: ApiClient,
}

impl HttpFeedbackService {
    /// Creates a service for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Configuration`] when the URL is invalid or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, LibraryError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a service with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Configuration`] when the URL is invalid or the
    /// HTTP client cannot be built.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, LibraryError> {
        Ok(Self {
            api: ApiClient::new(base_url, timeout)?,
        })
    }
}

/// Validates the draft and posts it.
///
/// Nothing is sent when validation fails.
///
/// # Errors
///
/// Returns [`LibraryError::InvalidFeedback`] when the draft has no rating,
/// or the service error when posting fails.
pub async fn submit_draft(
    service: &dyn FeedbackService,
    chat_message_id: u64,
    draft: &mut FeedbackDraft,
) -> Result<FeedbackDetails, LibraryError> {
    let details = draft.submit()?;
    service
        .submit_feedback(chat_message_id, draft.feedback_type(), &details)
        .await?;
    Ok(details)
}

#[derive(Debug, Serialize)]
struct FeedbackPayload<'a> {
    chat_message_id: u64,
    is_positive: bool,
    feedback_text: &'a str,
    predefined_feedback: Option<&'a str>,
    correct_code: &'a str,
    rating: Rating,
    result_quality: Option<ResultQuality>,
    context_evaluation: Option<ContextEvaluation>,
}

impl<'a> FeedbackPayload<'a> {
    fn new(chat_message_id: u64, feedback_type: FeedbackType, details: &'a FeedbackDetails) -> Self {
        Self {
            chat_message_id,
            is_positive: feedback_type.is_positive(),
            feedback_text: details.message.as_str(),
            predefined_feedback: details.predefined_feedback.as_deref(),
            correct_code: details.correct_code.as_str(),
            rating: details.rating,
            result_quality: details.result_quality,
            context_evaluation: details.context_evaluation,
        }
    }
}

#[async_trait]
impl FeedbackService for HttpFeedbackService {
    async fn submit_feedback(
        &self,
        chat_message_id: u64,
        feedback_type: FeedbackType,
        details: &FeedbackDetails,
    ) -> Result<(), LibraryError> {
        let url = self.api.endpoint([FEEDBACK_ENDPOINT])?;
        let payload = FeedbackPayload::new(chat_message_id, feedback_type, details);
        tracing::debug!("posting {feedback_type} feedback for chat message {chat_message_id}");

        let response = self
            .api
            .client()
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|error| map_transport_error("submit feedback", &error))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(LibraryError::Api {
            message: format!("submit feedback failed with {}", describe_failure(status, &body)),
        })
    }
}
