//! Transient user-visible notifications raised by the listing.

use std::fmt;

/// An error message to show the user once, until dismissed or replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    message: String,
}

impl Notification {
    /// Creates an error notification.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[error] {}", self.message)
    }
}
