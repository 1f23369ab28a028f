//! API-shaped records returned by the JSONPlaceholder endpoints.
//!
//! These are transient wire types: fetched, rendered, and discarded on the
//! next refresh. Nothing here is persisted.

use serde::{Deserialize, Serialize};

/// User identifier. Zero is the absent value and never issued by the API.
pub type UserId = u64;

/// Post identifier. Zero is the absent value and never issued by the API.
pub type PostId = u64;

/// Company block nested inside a full user record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
}

/// A user as returned by `/users` and `/users/{id}`.
///
/// The list endpoint may be consumed with only `id` and `name` populated;
/// the company block is only required when rendering an author line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub company: Company,
}

/// A post as returned by `/users/{id}/posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(rename = "userId")]
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

/// A comment as returned by `/posts/{id}/comments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "postId")]
    pub post_id: PostId,
    pub name: String,
    pub email: String,
    pub body: String,
}
