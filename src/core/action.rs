//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User submits a search? That's `Action::SubmitSearch`.
//! A fetch resolves? That's `Action::CommentsFetched`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O (if any) the
//! caller should perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::api::Comment;
use crate::core::query::QueryKey;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A valid search was submitted (untrimmed query text).
    SubmitSearch(String),
    /// The pager requested a different page.
    GoToPage(u32),
    /// A background fetch finished, successfully or not.
    CommentsFetched {
        key: QueryKey,
        result: Result<Vec<Comment>, String>,
    },
    Quit,
}

/// Side effect the event loop must carry out after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn a fetch for this key (already marked loading in the cache).
    Fetch(QueryKey),
    Quit,
}

/// Applies an action to the state and returns the resulting effect.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SubmitSearch(query) => {
            debug!("Search submitted: {:?}", query);
            // Page is deliberately left unchanged on a new query; a stale
            // page number can point past the end of a shorter result set.
            app.query = Some(query);
            app.status_message = format!("Searching for \"{}\"", app.query.as_deref().unwrap_or(""));
            fetch_if_needed(app)
        }
        Action::GoToPage(page) => {
            debug!("Page change requested: {}", page);
            app.page = page.max(1);
            fetch_if_needed(app)
        }
        Action::CommentsFetched { key, result } => {
            // The result is cached under its own key even if the active
            // key has moved on — the view simply won't look at it.
            let is_current = app.current_key().as_ref() == Some(&key);
            app.queries.resolve(key, result);
            if is_current {
                app.status_message = if app.is_error() {
                    String::from("Error loading comments")
                } else {
                    format!("Showing {} result(s)", app.comments().len())
                };
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Issues a fetch for the current key unless the cache already has an
/// entry for it (in flight, resolved, or failed). No-op without a query.
fn fetch_if_needed(app: &mut App) -> Effect {
    let Some(key) = app.current_key() else {
        return Effect::None;
    };
    if app.queries.needs_fetch(&key) {
        app.queries.mark_loading(key.clone());
        Effect::Fetch(key)
    } else {
        debug!("Cache hit for {:?}, no fetch", key);
        // A resolved entry renders immediately and no CommentsFetched will
        // arrive for it, so the status line is refreshed here. An in-flight
        // entry keeps the current message until its fetch lands.
        if app.is_error() {
            app.status_message = String::from("Error loading comments");
        } else if !app.is_fetching() {
            app.status_message = format!("Showing {} result(s)", app.comments().len());
        }
        Effect::None
    }
}
