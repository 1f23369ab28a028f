//! Acme Blogs - employee blog viewer for the JSONPlaceholder API
//!
//! Fetches users, posts, and comments from the public API and renders them
//! into an in-memory element tree with expandable comment sections:
//! - One select option per user
//! - One article per post (title, body, id, author line, catchphrase)
//! - Per post, a toggle button and a hidden comments panel, correlated by
//!   typed node handles
//!
//! ## Example
//! ```rust,no_run
//! use acme_blogs::prelude::*;
//!
//! # async fn run() {
//! let app = App::init(ApiClient::from_env()).await;
//!
//! // User picked employee 1 in the select menu
//! let outcome = app.select_user(Some(1)).await;
//! println!("{outcome:?}");
//!
//! // Clicked "Show Comments" on post 10
//! app.click(10);
//! println!("{}", app.content().render_text());
//! # }
//! ```

pub mod api_client;
pub mod app;
pub mod comments;
pub mod dom;
pub mod elements;
pub mod error;
pub mod posts;
pub mod refresh;
pub mod types;

// Re-export common types
pub mod prelude {
    pub use crate::api_client::{ApiClient, BlogApi, BASE_API_URL};
    pub use crate::app::{App, SelectionOutcome, DEFAULT_USER_ID};
    pub use crate::dom::Element;
    pub use crate::error::{RenderError, RenderResult};
    pub use crate::refresh::{ClickEvent, RefreshController, ToggleOutcome, ToggleRegistry};
    pub use crate::types::{Comment, Company, Post, PostId, User, UserId};
}
