//! Application telemetry events and sinks.
//!
//! Telemetry stays on the local machine. It captures operational signals
//! such as delete outcomes and feedback submissions for debugging.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by promptshelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// An input prompt was deleted.
    PromptDeleted {
        /// Identifier of the deleted prompt.
        id: u64,
    },
    /// The backend did not confirm a delete.
    PromptDeleteFailed {
        /// Identifier of the prompt the delete targeted.
        id: u64,
        /// Error detail reported for the failure.
        message: String,
    },
    /// Feedback on a chat response was accepted by the backend.
    FeedbackSubmitted {
        /// Chat message the feedback refers to.
        chat_message_id: u64,
        /// True for a like, false for a dislike.
        is_positive: bool,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

#[cfg(test)]
mod tests {
    use super::{TelemetryEvent, TelemetrySink};

    #[derive(Debug, Default)]
    struct RecordingSink {
        events: std::sync::Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingSink {
        fn take(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .expect("events mutex should be available")
                .drain(..)
                .collect()
        }
    }

    impl TelemetrySink for RecordingSink {
        fn record(&self, event: TelemetryEvent) {
            self.events
                .lock()
                .expect("events mutex should be available")
                .push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingSink::default();
        sink.record(TelemetryEvent::PromptDeleted { id: 3 });

        assert_eq!(sink.take(), vec![TelemetryEvent::PromptDeleted { id: 3 }]);
    }

    #[test]
    fn events_serialise_with_snake_case_tags() {
        let event = TelemetryEvent::PromptDeleteFailed {
            id: 5,
            message: "status 500 Internal Server Error: boom".to_owned(),
        };

        let value = serde_json::to_value(&event).expect("event should serialise");

        assert_eq!(
            value,
            serde_json::json!({
                "type": "prompt_delete_failed",
                "id": 5,
                "message": "status 500 Internal Server Error: boom"
            })
        );
    }

    #[test]
    fn feedback_event_round_trips() {
        let event = TelemetryEvent::FeedbackSubmitted {
            chat_message_id: 42,
            is_positive: false,
        };

        let json = serde_json::to_string(&event).expect("event should serialise");
        let parsed: TelemetryEvent = serde_json::from_str(&json).expect("event should parse");

        assert_eq!(parsed, event);
    }
}
