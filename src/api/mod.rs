//! # Comments API
//!
//! Everything that touches the network lives here: the `Comment` wire type,
//! request parameters, and the reqwest-backed client behind the
//! `CommentsApi` trait.

mod client;
mod types;

pub use client::{ApiError, CommentsApi, HttpCommentsClient};
pub use types::{Comment, GetCommentsParams, DEFAULT_LIMIT};
