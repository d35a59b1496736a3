//! Query and category filters for the record listing.
//!
//! A record is shown when its search fields contain the query
//! (case-insensitively) and at least one selected category admits it. An
//! empty query and an empty category selection both match everything.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::models::{InputPrompt, ListRecord};

/// A categorical filter that can be toggled on and off in the listing.
pub trait CategoryFilter<R>: Clone + PartialEq {
    /// Returns true if this category admits the record.
    fn admits(&self, record: &R) -> bool;

    /// Human-readable label shown on the filter chip.
    fn label(&self) -> &str;
}

/// Status categories for prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Prompts currently offered to users.
    Active,
    /// Prompts switched off.
    Inactive,
}

impl StatusFilter {
    /// Every status option, in display order.
    pub const ALL: [Self; 2] = [Self::Active, Self::Inactive];
}

impl CategoryFilter<InputPrompt> for StatusFilter {
    fn admits(&self, record: &InputPrompt) -> bool {
        match self {
            Self::Active => record.active,
            Self::Inactive => !record.active,
        }
    }

    fn label(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(CategoryFilter::<InputPrompt>::label(self))
    }
}

/// Parse error for [`StatusFilter`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported status '{value}': valid options are 'active' or 'inactive'")]
pub struct StatusFilterParseError {
    value: String,
}

impl FromStr for StatusFilter {
    type Err = StatusFilterParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(StatusFilterParseError {
                value: value.to_owned(),
            }),
        }
    }
}

/// Returns true if the record passes both the text query and the categories.
#[must_use]
pub fn matches<R, C>(record: &R, query: &str, active_categories: &[C]) -> bool
where
    R: ListRecord,
    C: CategoryFilter<R>,
{
    text_matches(record, query) && category_matches(record, active_categories)
}

fn text_matches<R: ListRecord>(record: &R, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

fn category_matches<R, C: CategoryFilter<R>>(record: &R, active_categories: &[C]) -> bool {
    active_categories.is_empty() || active_categories.iter().any(|c| c.admits(record))
}

/// The user's current query and selected categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<C> {
    query: String,
    active_categories: Vec<C>,
}

impl<C> Default for FilterState<C> {
    fn default() -> Self {
        Self {
            query: String::new(),
            active_categories: Vec::new(),
        }
    }
}

impl<C: PartialEq> FilterState<C> {
    /// Creates an empty filter state that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the free-text query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the selected categories in the order they were selected.
    #[must_use]
    pub fn active_categories(&self) -> &[C] {
        &self.active_categories
    }

    /// Replaces the free-text query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Selects the category if absent, otherwise deselects it.
    pub fn toggle_category(&mut self, category: C) {
        if let Some(position) = self.active_categories.iter().position(|c| *c == category) {
            self.active_categories.remove(position);
        } else {
            self.active_categories.push(category);
        }
    }

    /// Applies the filter, returning matching records in input order.
    #[must_use]
    pub fn apply<'a, R>(&self, records: &'a [R]) -> Vec<&'a R>
    where
        R: ListRecord,
        C: CategoryFilter<R>,
    {
        records
            .iter()
            .filter(|record| matches(*record, &self.query, &self.active_categories))
            .collect()
    }
}
