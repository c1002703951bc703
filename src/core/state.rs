//! # Application State
//!
//! Core business state for the comment search. This module contains domain
//! logic only - no TUI-specific types. Presentation state lives in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── page: u32                 // current 1-indexed page
//! ├── query: Option<String>     // submitted search (None = none yet)
//! ├── status_message: String    // status bar text
//! └── queries: QueryCache       // fetch results keyed by parameter tuple
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! Everything the view needs (`comments`, `is_fetching`, `is_error`,
//! `has_search`) is derived from the current key's cache entry.

use crate::api::Comment;
use crate::core::query::{QueryCache, QueryKey};

/// Fixed page size used by the page controller.
pub const PAGE_LIMIT: u32 = 20;

pub struct App {
    /// Current page, always >= 1. Not reset when a new query is submitted.
    pub page: u32,
    /// Submitted search query, untrimmed. `None` until the first submission.
    pub query: Option<String>,
    pub status_message: String,
    pub queries: QueryCache,
}

impl App {
    pub fn new() -> Self {
        Self {
            page: 1,
            query: None,
            status_message: String::from("Search through thousands of comments instantly."),
            queries: QueryCache::new(),
        }
    }

    /// Cache key for the current `(query, page, PAGE_LIMIT)` tuple, or
    /// `None` while no search has been submitted.
    pub fn current_key(&self) -> Option<QueryKey> {
        QueryKey::for_search(self.query.as_deref(), self.page, PAGE_LIMIT)
    }

    /// True once any search has been submitted.
    pub fn has_search(&self) -> bool {
        self.query.as_deref().is_some_and(|q| !q.is_empty())
    }

    /// Read-only snapshot of the current page's comments. Empty while
    /// unresolved, loading, or errored.
    pub fn comments(&self) -> &[Comment] {
        self.current_key()
            .and_then(|key| self.queries.data(&key))
            .unwrap_or(&[])
    }

    pub fn is_fetching(&self) -> bool {
        self.current_key()
            .is_some_and(|key| self.queries.is_fetching(&key))
    }

    pub fn is_error(&self) -> bool {
        self.current_key()
            .is_some_and(|key| self.queries.is_error(&key))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new();
        assert_eq!(app.page, 1);
        assert_eq!(app.query, None);
        assert!(!app.has_search());
        assert!(app.current_key().is_none());
        assert!(app.comments().is_empty());
        assert!(!app.is_fetching());
        assert!(!app.is_error());
    }

    #[test]
    fn test_current_key_follows_state() {
        let mut app = App::new();
        app.query = Some("rust".to_string());
        app.page = 3;

        let key = app.current_key().unwrap();
        assert_eq!(key.query, "rust");
        assert_eq!(key.page, 3);
        assert_eq!(key.limit, PAGE_LIMIT);
    }
}
