// API client module: a small blocking HTTP client for the posts/comments
// REST API. Every call is synchronous and runs to completion (or fails)
// before the menu shows the next prompt.

use crate::error::{Error, Result};
use crate::posts::{random_sample, DEFAULT_SAMPLE_SIZE};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Base URL used when `POSTS_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Simple API client that holds a reqwest blocking client and the base URL
/// of the remote service.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// A blog entry as returned by the remote service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

/// A reply attached to a post through `postId`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Payload for `POST /comments`. The id is assigned by the server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

impl ApiClient {
    /// Create a client for an explicit base URL. A trailing slash is
    /// dropped so paths can be appended with `/`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder().build()?;
        Ok(ApiClient { client, base_url })
    }

    /// Create an ApiClient configured from the environment variable
    /// `POSTS_API_URL` or fall back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("POSTS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the whole posts collection.
    pub fn fetch_posts(&self) -> Result<Vec<Post>> {
        self.get_json(format!("{}/posts", self.base_url))
    }

    /// Fetch the comments of a single post.
    pub fn fetch_comments(&self, post_id: i64) -> Result<Vec<Comment>> {
        self.get_json(format!("{}/posts/{}/comments", self.base_url, post_id))
    }

    /// Fetch every post written by a user.
    pub fn fetch_user_posts(&self, user_id: i64) -> Result<Vec<Post>> {
        self.get_json(format!("{}/users/{}/posts", self.base_url, user_id))
    }

    /// Fetch all posts and keep a random selection of at most
    /// [`DEFAULT_SAMPLE_SIZE`] of them.
    pub fn random_posts(&self) -> Result<Vec<Post>> {
        let posts = self.fetch_posts()?;
        Ok(random_sample(&posts, DEFAULT_SAMPLE_SIZE)
            .into_iter()
            .cloned()
            .collect())
    }

    /// POST a new comment for `post_id`. Only `201 Created` counts as
    /// success; fields are sent as given.
    pub fn create_comment(&self, post_id: i64, name: &str, email: &str, body: &str) -> Result<Comment> {
        let url = format!("{}/comments", self.base_url);
        let req = NewComment {
            post_id,
            name: name.to_string(),
            email: email.to_string(),
            body: body.to_string(),
        };
        debug!(method = "POST", %url, post_id, "sending request");
        let res = self.client.post(&url).json(&req).send()?;
        let res = expect_status(res, StatusCode::CREATED)?;
        Ok(res.json()?)
    }

    /// GET `url` and decode the body, accepting only `200 OK`.
    fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        debug!(method = "GET", %url, "sending request");
        let res = self.client.get(&url).send()?;
        let res = expect_status(res, StatusCode::OK)?;
        Ok(res.json()?)
    }
}

fn expect_status(res: Response, expected: StatusCode) -> Result<Response> {
    let status = res.status();
    if status != expected {
        let url = res.url().to_string();
        warn!(%status, %url, "unexpected response status");
        return Err(Error::Http { status, url });
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let client = ApiClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");

        let client = ApiClient::new("http://localhost:3000").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_post_uses_camel_case_fields() {
        let post: Post = serde_json::from_str(
            r#"{"userId": 3, "id": 21, "title": "asperiores", "body": "repellat"}"#,
        )
        .unwrap();
        assert_eq!(post.id, 21);
        assert_eq!(post.user_id, 3);
        assert_eq!(post.title, "asperiores");
    }

    #[test]
    fn test_new_comment_serialization() {
        let req = NewComment {
            post_id: 7,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            body: "Nice post".to_string(),
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["postId"], 7);
        assert_eq!(json["email"], "ada@example.com");
        assert!(json.get("post_id").is_none());
    }
}
