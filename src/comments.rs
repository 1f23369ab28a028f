//! Comment panel builder.
//!
//! A panel is built once per post during a refresh, already populated and
//! already collapsed; toggling later only flips its class, never re-fetches.

use crate::api_client::BlogApi;
use crate::dom::Element;
use crate::elements::create_elem_with_text;
use crate::types::{Comment, PostId};

/// Class marking a collapsed element.
pub const HIDE_CLASS: &str = "hide";

/// Attribute correlating a post's button and comment panel.
pub const POST_ID_ATTR: &str = "data-post-id";

/// Build the hidden comments section for one post.
///
/// Returns `None` for the absent (zero) post id. The section always starts
/// collapsed regardless of any earlier panel's state. A failed comment
/// fetch yields an empty panel, still hidden.
pub async fn build_comment_panel(api: &impl BlogApi, post_id: PostId) -> Option<Element> {
    if post_id == 0 {
        return None;
    }
    let section = Element::new("section");
    section.set_attr(POST_ID_ATTR, &post_id.to_string());
    section.add_class("comments");
    section.add_class(HIDE_CLASS);

    let comments = api.post_comments(post_id).await;
    if let Some(comments) = &comments {
        for comment in comments {
            section.append(&comment_block(comment));
        }
    } else {
        tracing::debug!(post_id, "no comments fetched, panel left empty");
    }
    Some(section)
}

fn comment_block(comment: &Comment) -> Element {
    let article = Element::new("article");
    article.append(&create_elem_with_text("h3", &comment.name, None));
    article.append(&create_elem_with_text("p", &comment.body, None));
    article.append(&create_elem_with_text(
        "p",
        &format!("From: {}", comment.email),
        None,
    ));
    article
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Post, User, UserId};
    use std::collections::HashMap;

    struct StubApi {
        comments: HashMap<PostId, Vec<Comment>>,
    }

    impl BlogApi for StubApi {
        async fn all_users(&self) -> Option<Vec<User>> {
            None
        }
        async fn user(&self, _user_id: UserId) -> Option<User> {
            None
        }
        async fn user_posts(&self, _user_id: UserId) -> Option<Vec<Post>> {
            None
        }
        async fn post_comments(&self, post_id: PostId) -> Option<Vec<Comment>> {
            self.comments.get(&post_id).cloned()
        }
    }

    fn comment(post_id: PostId, name: &str, email: &str, body: &str) -> Comment {
        Comment {
            post_id,
            name: name.to_string(),
            email: email.to_string(),
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn test_panel_starts_hidden_and_tagged() {
        let api = StubApi {
            comments: HashMap::from([(10, vec![comment(10, "n", "e@example.com", "b")])]),
        };
        let panel = build_comment_panel(&api, 10).await.unwrap();
        assert_eq!(panel.tag(), "section");
        assert!(panel.has_class("comments"));
        assert!(panel.has_class(HIDE_CLASS));
        assert_eq!(panel.attr(POST_ID_ATTR).as_deref(), Some("10"));
        assert_eq!(panel.child_count(), 1);

        let block = &panel.children()[0];
        let lines: Vec<String> = block.children().iter().map(|c| c.text()).collect();
        assert_eq!(lines, vec!["n", "b", "From: e@example.com"]);
    }

    #[tokio::test]
    async fn test_two_panels_are_independent_nodes() {
        let api = StubApi {
            comments: HashMap::from([(10, vec![])]),
        };
        let first = build_comment_panel(&api, 10).await.unwrap();
        let second = build_comment_panel(&api, 10).await.unwrap();
        assert!(!first.same_node(&second));

        // Revealing one panel must not affect a freshly built one.
        first.toggle_class(HIDE_CLASS);
        assert!(!first.has_class(HIDE_CLASS));
        assert!(second.has_class(HIDE_CLASS));
    }

    #[tokio::test]
    async fn test_failed_comment_fetch_yields_empty_hidden_panel() {
        let api = StubApi {
            comments: HashMap::new(),
        };
        let panel = build_comment_panel(&api, 99).await.unwrap();
        assert_eq!(panel.child_count(), 0);
        assert!(panel.has_class(HIDE_CLASS));
    }

    #[tokio::test]
    async fn test_zero_post_id_builds_nothing() {
        let api = StubApi {
            comments: HashMap::new(),
        };
        assert!(build_comment_panel(&api, 0).await.is_none());
    }
}
