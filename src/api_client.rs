//! Client for the JSONPlaceholder REST API.
//!
//! All calls are plain GETs returning JSON. Failures never escape this
//! module: a transport or decode error is logged and the call resolves to
//! `None`, so callers only ever see an absent value.

use serde::de::DeserializeOwned;

use crate::types::{Comment, Post, PostId, User, UserId};

/// Default API base URL. Override with the `ACME_BLOGS_API` environment
/// variable.
pub const BASE_API_URL: &str = "https://jsonplaceholder.typicode.com";

/// Read-only blog data source.
///
/// Every operation resolves to `None` on failure or when given the zero
/// (absent) identifier; no operation ever fails hard.
#[allow(async_fn_in_trait)]
pub trait BlogApi {
    /// Fetch all users.
    async fn all_users(&self) -> Option<Vec<User>>;

    /// Fetch a single user by id.
    async fn user(&self, user_id: UserId) -> Option<User>;

    /// Fetch all posts owned by a user.
    async fn user_posts(&self, user_id: UserId) -> Option<Vec<Post>>;

    /// Fetch all comments on a post.
    async fn post_comments(&self, post_id: PostId) -> Option<Vec<Comment>>;
}

/// HTTP implementation of [`BlogApi`].
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Client against `ACME_BLOGS_API`, falling back to the public API.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("ACME_BLOGS_API").unwrap_or_else(|_| BASE_API_URL.to_string());
        Self::new(base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        let url = format!("{}/{}", self.base_url, path);
        let result = async {
            self.client
                .get(&url)
                .send()
                .await?
                .json::<T>()
                .await
        }
        .await;

        match result {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::error!(%url, %error, "API request failed");
                None
            }
        }
    }
}

impl BlogApi for ApiClient {
    async fn all_users(&self) -> Option<Vec<User>> {
        self.get_json("users").await
    }

    async fn user(&self, user_id: UserId) -> Option<User> {
        if user_id == 0 {
            return None;
        }
        self.get_json(&format!("users/{user_id}")).await
    }

    async fn user_posts(&self, user_id: UserId) -> Option<Vec<Post>> {
        if user_id == 0 {
            return None;
        }
        self.get_json(&format!("users/{user_id}/posts")).await
    }

    async fn post_comments(&self, post_id: PostId) -> Option<Vec<Comment>> {
        if post_id == 0 {
            return None;
        }
        self.get_json(&format!("posts/{post_id}/comments")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The zero-id guard must short-circuit before any request is issued, so
    // a client pointed at an unroutable address still resolves immediately.
    #[tokio::test]
    async fn test_zero_id_resolves_without_network() {
        let client = ApiClient::new("http://127.0.0.1:0");
        assert!(client.user(0).await.is_none());
        assert!(client.user_posts(0).await.is_none());
        assert!(client.post_comments(0).await.is_none());
    }
}
