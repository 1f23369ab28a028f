//! Error types for the render pipeline.
//!
//! API failures are not errors here: the client logs them and resolves to
//! `None`. The pipeline only fails hard when a post's author record is
//! absent while its article is being built, which aborts the refresh.

use thiserror::Error;

use crate::types::{PostId, UserId};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("author {user_id} for post {post_id} could not be fetched")]
    MissingAuthor { user_id: UserId, post_id: PostId },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
