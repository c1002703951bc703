//! # Query cache
//!
//! An explicit cache mapping a request parameter tuple to the state of the
//! fetch for that tuple. Two different tuples never share cached data; an
//! identical tuple reuses its entry without a new request.
//!
//! The fetch is gated: no key exists (and `needs_fetch` is never asked)
//! while the search query is absent, so loading/error flags stay at their
//! idle defaults until the first submission.

use std::collections::HashMap;

use crate::api::{Comment, GetCommentsParams};

/// Cache key: the full request parameter tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub query: String,
    pub page: u32,
    pub limit: u32,
}

impl QueryKey {
    /// Builds a key from the controller state. Returns `None` while the
    /// query is absent or empty — the unconditional "disabled" guard.
    pub fn for_search(query: Option<&str>, page: u32, limit: u32) -> Option<Self> {
        match query {
            Some(q) if !q.is_empty() => Some(Self {
                query: q.to_string(),
                page,
                limit,
            }),
            _ => None,
        }
    }

    pub fn to_params(&self) -> GetCommentsParams {
        GetCommentsParams {
            query: Some(self.query.clone()),
            limit: self.limit,
            page: self.page,
        }
    }
}

/// State of a single cached fetch. An absent entry means idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState {
    /// Request is in flight.
    Loading,
    /// Request resolved with a comment list.
    Success(Vec<Comment>),
    /// Most recent attempt for this key failed.
    Error(String),
}

/// Cache of comment fetches keyed by parameter tuple.
///
/// Entries are never evicted — they live for the session, matching the
/// "abandoned, not aborted" concurrency model: a response for a superseded
/// key still lands here, it's just no longer the key the view looks at.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, QueryState>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a fetch should be issued for this key: no entry exists yet.
    /// Loading, resolved, and failed entries are all reused as-is.
    pub fn needs_fetch(&self, key: &QueryKey) -> bool {
        !self.entries.contains_key(key)
    }

    pub fn mark_loading(&mut self, key: QueryKey) {
        self.entries.insert(key, QueryState::Loading);
    }

    /// Records the outcome of a fetch under its own key, regardless of
    /// whether that key is still the active one.
    pub fn resolve(&mut self, key: QueryKey, result: Result<Vec<Comment>, String>) {
        let state = match result {
            Ok(comments) => QueryState::Success(comments),
            Err(message) => QueryState::Error(message),
        };
        self.entries.insert(key, state);
    }

    pub fn get(&self, key: &QueryKey) -> Option<&QueryState> {
        self.entries.get(key)
    }

    /// Resolved data for the key, or `None` while unresolved.
    pub fn data(&self, key: &QueryKey) -> Option<&[Comment]> {
        match self.entries.get(key) {
            Some(QueryState::Success(comments)) => Some(comments),
            _ => None,
        }
    }

    /// True for the duration of an in-flight request for this key.
    pub fn is_fetching(&self, key: &QueryKey) -> bool {
        matches!(self.entries.get(key), Some(QueryState::Loading))
    }

    /// True when the most recent attempt for this key failed.
    pub fn is_error(&self, key: &QueryKey) -> bool {
        matches!(self.entries.get(key), Some(QueryState::Error(_)))
    }
}
