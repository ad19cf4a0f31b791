//! Per-page selection state
//!
//! Each filterable page owns one of these value objects. They start at their
//! defaults when the page is shown, are replaced wholesale on input, and are
//! dropped on navigation away. Nothing here is shared or persisted.

use crate::catalog::{Difficulty, LanguageEntry, ToolEntry, TutorialEntry};
use crate::filter;

/// Search box state for the languages page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageSelection {
    search_term: String,
}

impl LanguageSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Languages visible under the current search term
    pub fn visible<'a>(&self, catalog: &'a [LanguageEntry]) -> Vec<&'a LanguageEntry> {
        filter::filter_languages(catalog, &self.search_term)
    }
}

/// Difficulty buttons for the tutorials page; `None` means "All Levels"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TutorialSelection {
    selected_difficulty: Option<Difficulty>,
}

impl TutorialSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_difficulty(&self) -> Option<Difficulty> {
        self.selected_difficulty
    }

    pub fn set_selected_difficulty(&mut self, difficulty: Option<Difficulty>) {
        self.selected_difficulty = difficulty;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn visible<'a>(&self, catalog: &'a [TutorialEntry]) -> Vec<&'a TutorialEntry> {
        filter::filter_tutorials(catalog, self.selected_difficulty)
    }
}

/// Category buttons for the tools page; `None` means "All Categories"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolSelection {
    selected_category: Option<String>,
}

impl ToolSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn set_selected_category(&mut self, category: Option<String>) {
        self.selected_category = category;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn visible<'a>(&self, catalog: &'a [ToolEntry]) -> Vec<&'a ToolEntry> {
        filter::filter_tools(catalog, self.selected_category())
    }
}
