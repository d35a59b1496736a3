//! Structured feedback on chat responses.
//!
//! A [`FeedbackDraft`] holds the dialog state; [`FeedbackService`] posts the
//! validated [`FeedbackDetails`] to the backend. File attachments are not
//! supported.

mod draft;
mod model;
mod service;

pub use draft::{FeedbackDetails, FeedbackDraft};
pub use model::{
    ContextEvaluation, FeedbackError, FeedbackType, PredefinedFeedbackOptions, Rating,
    ResultQuality,
};
pub use service::{FeedbackService, HttpFeedbackService, submit_draft};

#[cfg(test)]
pub use service::MockFeedbackService;
