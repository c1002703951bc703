//! Wire types for the comments REST endpoint.
//!
//! The backend follows JSONPlaceholder conventions: `/comments` returns a
//! JSON array and honors `_limit`, `_page`, and `q` query parameters.

use serde::{Deserialize, Serialize};

/// Default number of comments requested per page when the caller
/// doesn't specify one.
pub const DEFAULT_LIMIT: u32 = 20;

/// A single comment record as returned by the backend.
///
/// Comments are externally sourced and immutable from this application's
/// perspective. `post_id` is displayed but never validated against an
/// actual post.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Parameters for a `get_comments` call.
///
/// `query: None` means "no search" — the `q` parameter is then omitted
/// from the request entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetCommentsParams {
    pub query: Option<String>,
    pub limit: u32,
    pub page: u32,
}

impl Default for GetCommentsParams {
    fn default() -> Self {
        Self {
            query: None,
            limit: DEFAULT_LIMIT,
            page: 1,
        }
    }
}
