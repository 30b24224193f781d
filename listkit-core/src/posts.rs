//! Post records and the sources that provide them
//!
//! `PostSource` is the seam between the fetcher and the network.
//! `HttpPostSource` issues a single GET per call with no retry, backoff,
//! timeout policy or cache.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ListkitError, Result};

/// Default endpoint serving a JSON array of posts
pub const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// A single post as served by the posts endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// Anything that can produce the list of posts
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Human-readable description for logs
    fn describe(&self) -> String;

    /// Fetch all posts once
    async fn fetch_posts(&self) -> Result<Vec<Post>>;
}

/// Parse a posts response body (JSON array)
pub fn parse_posts(body: &str) -> Result<Vec<Post>> {
    serde_json::from_str(body).map_err(|e| ListkitError::json("posts response", e))
}

/// Posts fetched over HTTP
#[cfg(feature = "http")]
pub struct HttpPostSource {
    client: reqwest::Client,
    url: String,
}

#[cfg(feature = "http")]
impl HttpPostSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl PostSource for HttpPostSource {
    fn describe(&self) -> String {
        format!("GET {}", self.url)
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        tracing::debug!(url = %self.url, "fetching posts");

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ListkitError::http(&self.url, e))?;

        if !response.status().is_success() {
            return Err(ListkitError::status(&self.url, response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ListkitError::http(&self.url, e))?;

        parse_posts(&body)
    }
}

/// Fixed, in-memory posts
#[derive(Debug, Clone, Default)]
pub struct StaticPostSource {
    posts: Vec<Post>,
}

impl StaticPostSource {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// A handful of sample posts for offline use
    pub fn sample() -> Self {
        Self::new(vec![
            Post {
                user_id: 1,
                id: 1,
                title: "Rendering lists".to_string(),
                body: "Every item gets a key equal to its position.".to_string(),
            },
            Post {
                user_id: 1,
                id: 2,
                title: "Controlled inputs".to_string(),
                body: "The form owns the value and reports it on submit.".to_string(),
            },
            Post {
                user_id: 2,
                id: 3,
                title: "Fetching once".to_string(),
                body: "One request, no retry, and a loading state until it settles.".to_string(),
            },
        ])
    }
}

#[async_trait]
impl PostSource for StaticPostSource {
    fn describe(&self) -> String {
        format!("static ({} posts)", self.posts.len())
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        Ok(self.posts.clone())
    }
}
