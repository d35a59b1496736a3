//! Shared test utilities for CLI tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use promptshelf::feedback::{FeedbackDetails, FeedbackService, FeedbackType};
use promptshelf::library::LibraryError;
use promptshelf::telemetry::{TelemetryEvent, TelemetrySink};

/// Telemetry sink that keeps every event for inspection.
#[derive(Debug, Default)]
pub struct RecordingTelemetry {
    events: Mutex<Vec<TelemetryEvent>>,
}

impl RecordingTelemetry {
    /// Drains the recorded events.
    pub fn take(&self) -> Vec<TelemetryEvent> {
        self.events
            .lock()
            .expect("events mutex should be available")
            .drain(..)
            .collect()
    }
}

impl TelemetrySink for RecordingTelemetry {
    fn record(&self, event: TelemetryEvent) {
        self.events
            .lock()
            .expect("events mutex should be available")
            .push(event);
    }
}

/// Feedback submission captured by [`CapturingFeedbackService`].
pub type CapturedFeedback = (u64, FeedbackType, FeedbackDetails);

/// A feedback service that captures its inputs and returns a preconfigured
/// response.
#[derive(Clone, Default)]
pub struct CapturingFeedbackService {
    /// Captured arguments from the last call.
    pub captured: Arc<Mutex<Option<CapturedFeedback>>>,
    /// Error to return instead of succeeding.
    pub error: Option<LibraryError>,
}

#[async_trait]
impl FeedbackService for CapturingFeedbackService {
    async fn submit_feedback(
        &self,
        chat_message_id: u64,
        feedback_type: FeedbackType,
        details: &FeedbackDetails,
    ) -> Result<(), LibraryError> {
        *self
            .captured
            .lock()
            .expect("captured mutex should be available") =
            Some((chat_message_id, feedback_type, details.clone()));

        self.error.clone().map_or(Ok(()), Err)
    }
}
