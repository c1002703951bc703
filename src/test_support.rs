//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::api::Comment;

/// Three fixture comments; the first has a body longer than 64 characters
/// to exercise truncation.
pub fn sample_comments() -> Vec<Comment> {
    vec![
        Comment {
            id: 1,
            post_id: 1,
            name: "Test Comment 1".to_string(),
            email: "test1@example.com".to_string(),
            body: "This is a test comment body that is longer than 64 characters to test truncation functionality"
                .to_string(),
        },
        Comment {
            id: 2,
            post_id: 1,
            name: "Test Comment 2".to_string(),
            email: "test2@example.com".to_string(),
            body: "Short comment".to_string(),
        },
        Comment {
            id: 3,
            post_id: 2,
            name: "Another Test Comment".to_string(),
            email: "test3@example.com".to_string(),
            body: "This comment contains the search term 'example' for testing search"
                .to_string(),
        },
    ]
}

/// A full page of comments (`PAGE_LIMIT` entries) for pagination tests.
pub fn full_page_of_comments() -> Vec<Comment> {
    (1..=crate::core::state::PAGE_LIMIT as u64)
        .map(|i| Comment {
            id: i,
            post_id: 1,
            name: format!("Comment {i}"),
            email: format!("user{i}@example.com"),
            body: format!("Body of comment {i}"),
        })
        .collect()
}
