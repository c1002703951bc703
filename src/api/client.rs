//! HTTP client for the comments endpoint.
//!
//! The client is constructed once at startup with a resolved base URL and
//! passed by reference to everything that needs network access — there is
//! no ambient global client.

use std::fmt;

use async_trait::async_trait;
use log::{debug, warn};

use super::types::{Comment, GetCommentsParams};

/// Errors that can occur while fetching comments.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The backend returned a non-success HTTP status.
    Api { status: u16, message: String },
    /// The response body couldn't be decoded as a comment list.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Source of comment data.
///
/// The TUI talks to this trait rather than a concrete client so tests can
/// substitute canned responses without a server.
#[async_trait]
pub trait CommentsApi: Send + Sync {
    /// Fetches one page of comments. Errors are propagated unchanged —
    /// no retry, no local recovery.
    async fn get_comments(&self, params: &GetCommentsParams) -> Result<Vec<Comment>, ApiError>;
}

/// `CommentsApi` implementation backed by reqwest.
pub struct HttpCommentsClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCommentsClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl CommentsApi for HttpCommentsClient {
    async fn get_comments(&self, params: &GetCommentsParams) -> Result<Vec<Comment>, ApiError> {
        let url = format!("{}/comments", self.base_url);

        let mut query: Vec<(&str, String)> = vec![
            ("_limit", params.limit.to_string()),
            ("_page", params.page.to_string()),
        ];
        if let Some(ref q) = params.query {
            query.push(("q", q.clone()));
        }

        debug!("GET {} with params {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("GET /comments failed with HTTP {}", status.as_u16());
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Vec<Comment>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped_from_base_url() {
        let client = HttpCommentsClient::new("http://localhost:3000/".to_string());
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Api {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 503): unavailable");

        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "network error: connection refused");
    }
}
