//! Local form state for the feedback dialog.
//!
//! The draft collects structured choices and free text. Submitting checks
//! the one hard requirement, a rating, and hands back the details to post.

use serde::Serialize;

use super::model::{
    ContextEvaluation, FeedbackError, FeedbackType, PredefinedFeedbackOptions, Rating,
    ResultQuality,
};

/// Validated feedback ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackDetails {
    /// Free-text comment.
    pub message: String,
    /// Quick-pick reason, if one was chosen.
    pub predefined_feedback: Option<String>,
    /// Corrected code supplied by the user.
    pub correct_code: String,
    /// Required rating.
    pub rating: Rating,
    /// Answer quality assessment.
    pub result_quality: Option<ResultQuality>,
    /// Retrieved context assessment.
    pub context_evaluation: Option<ContextEvaluation>,
}

/// Feedback form being filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackDraft {
    feedback_type: FeedbackType,
    message: String,
    correct_code: String,
    rating: Option<Rating>,
    rating_missing: bool,
    result_quality: Option<ResultQuality>,
    context_evaluation: Option<ContextEvaluation>,
    predefined_feedback: Option<String>,
}

impl FeedbackDraft {
    /// Creates an empty draft for the given feedback type.
    #[must_use]
    pub const fn new(feedback_type: FeedbackType) -> Self {
        Self {
            feedback_type,
            message: String::new(),
            correct_code: String::new(),
            rating: None,
            rating_missing: false,
            result_quality: None,
            context_evaluation: None,
            predefined_feedback: None,
        }
    }

    /// Returns the feedback type the draft was opened for.
    #[must_use]
    pub const fn feedback_type(&self) -> FeedbackType {
        self.feedback_type
    }

    /// Replaces the free-text comment.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Replaces the corrected code.
    pub fn set_correct_code(&mut self, correct_code: impl Into<String>) {
        self.correct_code = correct_code.into();
    }

    /// Sets the rating.
    pub const fn set_rating(&mut self, rating: Rating) {
        self.rating = Some(rating);
    }

    /// Selects the answer quality.
    pub const fn select_result_quality(&mut self, quality: ResultQuality) {
        self.result_quality = Some(quality);
    }

    /// Selects the context assessment.
    pub const fn select_context_evaluation(&mut self, evaluation: ContextEvaluation) {
        self.context_evaluation = Some(evaluation);
    }

    /// Selects one of the quick-pick reasons offered for this feedback type.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::UnknownOption`] when `feedback` is not offered.
    pub fn select_predefined(
        &mut self,
        options: &PredefinedFeedbackOptions,
        feedback: &str,
    ) -> Result<(), FeedbackError> {
        let wanted = feedback.trim();
        let chosen = options
            .for_type(self.feedback_type)
            .iter()
            .find(|option| option.as_str() == wanted)
            .ok_or_else(|| FeedbackError::UnknownOption {
                kind: "predefined feedback",
                value: feedback.to_owned(),
            })?;
        self.predefined_feedback = Some(chosen.clone());
        Ok(())
    }

    /// Returns true after a submit attempt without a rating.
    #[must_use]
    pub const fn is_rating_missing(&self) -> bool {
        self.rating_missing
    }

    /// Placeholder for the corrected-code field.
    #[must_use]
    pub const fn correct_code_placeholder(&self) -> &'static str {
        match self.feedback_type {
            FeedbackType::Like => {
                "In case the code can be improved, provide the full code including the imports."
            }
            FeedbackType::Dislike => "Provide the full correct code including the imports.",
        }
    }

    /// Placeholder for the free-text comment field.
    #[must_use]
    pub const fn message_placeholder(&self) -> &'static str {
        match self.feedback_type {
            FeedbackType::Like => {
                "(Optional) What did you like about this response? How could it be improved?"
            }
            FeedbackType::Dislike => {
                "(Optional) What was the issue with the response? How could it be improved?"
            }
        }
    }

    /// Validates the draft and returns the details to post.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::RatingMissing`] and raises the missing-rating
    /// flag when no rating was set.
    pub fn submit(&mut self) -> Result<FeedbackDetails, FeedbackError> {
        let Some(rating) = self.rating else {
            self.rating_missing = true;
            tracing::debug!("feedback submit rejected: rating is missing");
            return Err(FeedbackError::RatingMissing);
        };
        self.rating_missing = false;

        Ok(FeedbackDetails {
            message: self.message.clone(),
            predefined_feedback: self.predefined_feedback.clone(),
            correct_code: self.correct_code.clone(),
            rating,
            result_quality: self.result_quality,
            context_evaluation: self.context_evaluation,
        })
    }
}
