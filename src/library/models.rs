//! Record model for the prompt library listing.
//!
//! The listing engine is generic over [`ListRecord`]; [`InputPrompt`] is the
//! record the prompt backend serves.

use serde::{Deserialize, Serialize};

/// An item that can be searched, keyed and hidden by the listing engine.
pub trait ListRecord {
    /// Stable identifier used for keying rows and targeting deletes.
    fn record_id(&self) -> u64;

    /// Text fields searched by the free-text query.
    fn search_fields(&self) -> Vec<&str>;

    /// Whether the record belongs to the shared public namespace.
    fn is_public(&self) -> bool;
}

/// A stored prompt shortcut with its expansion text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputPrompt {
    /// Backend identifier.
    pub id: u64,
    /// Short prompt name typed by users.
    pub prompt: String,
    /// Text the prompt expands into.
    pub content: String,
    /// Whether the prompt is currently offered to users.
    pub active: bool,
    /// Whether the prompt is shared with every user.
    #[serde(default)]
    pub is_public: bool,
}

impl InputPrompt {
    /// Returns the status label shown in the table.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.active { "Active" } else { "Inactive" }
    }
}

impl ListRecord for InputPrompt {
    fn record_id(&self) -> u64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.prompt.as_str(), self.content.as_str()]
    }

    fn is_public(&self) -> bool {
        self.is_public
    }
}

/// Which prompt namespace the listing operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Admin view over the shared public namespace.
    Public,
    /// A user's own prompts.
    #[default]
    Private,
}

impl Visibility {
    /// Maps the `public` configuration flag onto a visibility mode.
    #[must_use]
    pub const fn from_public_flag(public: bool) -> Self {
        if public { Self::Public } else { Self::Private }
    }

    /// Path prefix of the backend namespace for this mode.
    #[must_use]
    pub const fn api_prefix(self) -> &'static str {
        match self {
            Self::Public => "api/admin",
            Self::Private => "api",
        }
    }

    /// Returns true when a record may be rendered in this mode.
    ///
    /// Public records are hidden from the private view.
    #[must_use]
    pub fn shows<R: ListRecord>(self, record: &R) -> bool {
        !(self == Self::Private && record.is_public())
    }
}
