//! Feedback mode: rate a chat response and post the feedback.

use std::io::{self, Write};

use promptshelf::PromptShelfConfig;
use promptshelf::feedback::{
    ContextEvaluation, FeedbackDraft, FeedbackService, HttpFeedbackService, Rating,
    ResultQuality, submit_draft,
};
use promptshelf::library::LibraryError;
use promptshelf::telemetry::{TelemetryEvent, TelemetrySink};

use super::output::io_error;

/// Submits feedback for the chat message named by `--feedback-message-id`.
///
/// # Errors
///
/// Returns [`LibraryError::Configuration`] for missing or invalid settings,
/// [`LibraryError::InvalidFeedback`] when the draft fails validation, and
/// [`LibraryError::Api`] or [`LibraryError::Network`] when posting fails.
pub async fn run(config: &PromptShelfConfig) -> Result<(), LibraryError> {
    let service =
        HttpFeedbackService::with_timeout(&config.api_base_url, config.request_timeout())?;
    let telemetry = config.telemetry_sink();
    let mut stdout = io::stdout().lock();
    run_with_service(config, &service, telemetry.as_ref(), &mut stdout).await
}

/// Submits feedback through an arbitrary service, writing to `writer`.
///
/// # Errors
///
/// See [`run`].
pub async fn run_with_service<W: Write>(
    config: &PromptShelfConfig,
    service: &dyn FeedbackService,
    telemetry: &dyn TelemetrySink,
    writer: &mut W,
) -> Result<(), LibraryError> {
    let chat_message_id =
        config
            .feedback_message_id
            .ok_or_else(|| LibraryError::Configuration {
                message: "chat message id is required (use --feedback-message-id)".to_owned(),
            })?;
    let mut draft = build_draft(config)?;

    let details = submit_draft(service, chat_message_id, &mut draft).await?;
    let feedback_type = draft.feedback_type();
    telemetry.record(TelemetryEvent::FeedbackSubmitted {
        chat_message_id,
        is_positive: feedback_type.is_positive(),
    });

    writeln!(
        writer,
        "Submitted {feedback_type} feedback for chat message {chat_message_id} (rating {}/{}).",
        details.rating.get(),
        Rating::MAX
    )
    .map_err(|e| io_error(&e))
}

/// Fills a draft from the feedback flags.
fn build_draft(config: &PromptShelfConfig) -> Result<FeedbackDraft, LibraryError> {
    let mut draft = FeedbackDraft::new(config.require_feedback_type()?);

    if let Some(message) = config.feedback_message.as_deref() {
        draft.set_message(message);
    }
    if let Some(code) = config.correct_code.as_deref() {
        draft.set_correct_code(code);
    }
    if let Some(value) = config.rating {
        draft.set_rating(Rating::new(value)?);
    }
    if let Some(label) = config.result_quality.as_deref() {
        draft.select_result_quality(ResultQuality::from_label(label)?);
    }
    if let Some(label) = config.context_evaluation.as_deref() {
        draft.select_context_evaluation(ContextEvaluation::from_label(label)?);
    }
    if let Some(choice) = config.predefined_feedback.as_deref() {
        draft.select_predefined(&config.feedback_options(), choice)?;
    }

    Ok(draft)
}
