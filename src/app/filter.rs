//! Type filter state.
//!
//! Holds the category names loaded once at start and the current selection.
//! Cycling runs through "All types" followed by every category and wraps.

use crate::worker::{FetchOutcome, FetchResponse};

/// Label shown when no category is selected.
pub const ALL_TYPES: &str = "All types";

#[derive(Debug, Clone, Default)]
pub struct TypeFilter {
    categories: Vec<String>,
    selected: Option<String>,
    error: Option<String>,
}

impl TypeFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the category list from a categories response.
    pub fn apply(&mut self, response: &FetchResponse) -> bool {
        match &response.outcome {
            FetchOutcome::Categories(names) => {
                tracing::debug!(count = names.len(), "categories loaded");
                self.categories.clone_from(names);
                self.error = None;
                true
            }
            FetchOutcome::Failed { message } => {
                tracing::warn!(error = %message, "loading categories failed");
                self.error = Some(message.clone());
                true
            }
            _ => false,
        }
    }

    /// Selects the category after the current one.
    pub fn next(&mut self) -> Option<String> {
        let len = self.categories.len();
        self.selected = match self.position() {
            _ if len == 0 => None,
            None => Some(0),
            Some(i) if i + 1 < len => Some(i + 1),
            Some(_) => None,
        }
        .map(|i| self.categories[i].clone());
        self.selected.clone()
    }

    /// Selects the category before the current one.
    pub fn prev(&mut self) -> Option<String> {
        let len = self.categories.len();
        self.selected = match self.position() {
            _ if len == 0 => None,
            None => Some(len - 1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        }
        .map(|i| self.categories[i].clone());
        self.selected.clone()
    }

    /// Selects a category by name, or "All types" for `None`.
    ///
    /// Names missing from the loaded list are kept as they are.
    pub fn select(&mut self, name: Option<&str>) {
        self.selected = name.map(str::to_string);
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn label(&self) -> &str {
        self.selected.as_deref().unwrap_or(ALL_TYPES)
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn position(&self) -> Option<usize> {
        let selected = self.selected.as_deref()?;
        self.categories.iter().position(|c| c == selected)
    }
}
