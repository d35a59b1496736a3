//! Domain models for chat response feedback.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Whether the user liked or disliked the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackType {
    /// Thumbs up.
    Like,
    /// Thumbs down.
    Dislike,
}

impl FeedbackType {
    /// Returns true for positive feedback.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Like)
    }

    /// Lowercase label used on the command line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

impl fmt::Display for FeedbackType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

impl FromStr for FeedbackType {
    type Err = FeedbackError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "like" => Ok(Self::Like),
            "dislike" => Ok(Self::Dislike),
            _ => Err(FeedbackError::UnknownFeedbackType {
                value: value.to_owned(),
            }),
        }
    }
}

/// Validation failures raised while filling in feedback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    /// Submission was attempted without a rating.
    #[error("A rating is required to submit feedback.")]
    RatingMissing,

    /// The rating was outside `1..=5`.
    #[error("rating must be between {min} and {max}, got {value}", min = Rating::MIN, max = Rating::MAX)]
    RatingOutOfRange {
        /// The rejected value.
        value: u8,
    },

    /// The feedback type was neither `like` nor `dislike`.
    #[error("unsupported feedback type '{value}': valid options are 'like' or 'dislike'")]
    UnknownFeedbackType {
        /// The rejected value.
        value: String,
    },

    /// A choice did not match any offered option.
    #[error("'{value}' is not a valid {kind} option")]
    UnknownOption {
        /// Which option list was consulted.
        kind: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Star rating from 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Lowest accepted rating.
    pub const MIN: u8 = 1;
    /// Highest accepted rating.
    pub const MAX: u8 = 5;

    /// Creates a rating, rejecting values outside `1..=5`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::RatingOutOfRange`] for out-of-range values.
    pub const fn new(value: u8) -> Result<Self, FeedbackError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(FeedbackError::RatingOutOfRange { value })
        }
    }

    /// Returns the numeric rating.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

macro_rules! labelled_options {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$variant_meta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $name {
            /// Every option, in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Label shown to the user and sent to the backend.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            /// Finds the option whose label matches `value`, ignoring case.
            ///
            /// # Errors
            ///
            /// Returns [`FeedbackError::UnknownOption`] when nothing matches.
            pub fn from_label(value: &str) -> Result<Self, FeedbackError> {
                let wanted = value.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.label().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| FeedbackError::UnknownOption {
                        kind: $kind,
                        value: value.to_owned(),
                    })
            }
        }

        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }
    };
}

labelled_options! {
    /// How correct the answer was.
    ResultQuality, "result quality" {
        /// The answer was right.
        Correct => "Correct",
        /// The answer was partly right.
        PartlyCorrect => "Partly correct (can be improved)",
        /// The answer was wrong.
        CompletelyWrong => "Completely wrong",
    }
}

labelled_options! {
    /// How useful the retrieved context was.
    ContextEvaluation, "context evaluation" {
        /// Retrieval found relevant documents.
        DocumentsRelevant => "Retrieved documents were relevant",
        /// Retrieval found irrelevant documents.
        DocumentsNotRelevant => "Retrieved documents were not relevant",
        /// A cited source was wrong.
        CitedSourceIncorrect => "Cited source had incorrect information",
        /// The model misread correct documents.
        MisreadDocuments => "AI misread the documents",
    }
}

const DEFAULT_NEGATIVE_OPTIONS: [&str; 3] = [
    "Retrieved documents were not relevant",
    "AI misread the documents",
    "Cited source had incorrect information",
];

/// Quick-pick feedback reasons offered per feedback type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredefinedFeedbackOptions {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl Default for PredefinedFeedbackOptions {
    fn default() -> Self {
        Self {
            positive: Vec::new(),
            negative: DEFAULT_NEGATIVE_OPTIONS
                .iter()
                .map(|option| (*option).to_owned())
                .collect(),
        }
    }
}

impl PredefinedFeedbackOptions {
    /// Builds options from comma-separated overrides.
    ///
    /// A missing override keeps the default list for that type.
    #[must_use]
    pub fn from_overrides(positive: Option<&str>, negative: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            positive: positive.map_or(defaults.positive, split_options),
            negative: negative.map_or(defaults.negative, split_options),
        }
    }

    /// Returns the options offered for the feedback type.
    #[must_use]
    pub fn for_type(&self, feedback_type: FeedbackType) -> &[String] {
        match feedback_type {
            FeedbackType::Like => &self.positive,
            FeedbackType::Dislike => &self.negative,
        }
    }
}

fn split_options(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|option| !option.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
