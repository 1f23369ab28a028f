//! Post list builder.
//!
//! One article per post, built strictly in input order. Each post's author
//! fetch and comment fetch complete before the next post is started, so at
//! most one request is in flight and the rendered order always matches the
//! input order.

use crate::api_client::BlogApi;
use crate::comments::{build_comment_panel, POST_ID_ATTR};
use crate::dom::Element;
use crate::elements::create_elem_with_text;
use crate::error::{RenderError, RenderResult};
use crate::types::{Post, PostId};

/// Label on a toggle button whose panel is collapsed.
pub const SHOW_COMMENTS: &str = "Show Comments";

/// Label on a toggle button whose panel is visible.
pub const HIDE_COMMENTS: &str = "Hide Comments";

/// Placeholder shown when no employee is selected.
pub const DEFAULT_TEXT: &str = "Select an Employee to display their posts.";

/// One built post: the article subtree plus typed handles to the nodes the
/// toggle path needs, so no lookup by attribute is ever required.
#[derive(Debug)]
pub struct PostArticle {
    pub post_id: PostId,
    pub article: Element,
    pub button: Element,
    pub panel: Option<Element>,
}

/// Build one article per post, in input order.
///
/// Absent posts yields `Ok(None)`. A post whose author cannot be fetched
/// fails the whole batch with [`RenderError::MissingAuthor`]; nothing built
/// so far is kept. This is deliberate fail-fast, not a recoverable state.
pub async fn create_posts(
    api: &impl BlogApi,
    posts: Option<&[Post]>,
) -> RenderResult<Option<Vec<PostArticle>>> {
    let Some(posts) = posts else {
        return Ok(None);
    };

    let mut articles = Vec::with_capacity(posts.len());
    for post in posts {
        let article = Element::new("article");
        article.append(&create_elem_with_text("h2", &post.title, None));
        article.append(&create_elem_with_text("p", &post.body, None));
        article.append(&create_elem_with_text(
            "p",
            &format!("Post ID: {}", post.id),
            None,
        ));

        let author = api.user(post.user_id).await.ok_or(RenderError::MissingAuthor {
            user_id: post.user_id,
            post_id: post.id,
        })?;
        article.append(&create_elem_with_text(
            "p",
            &format!("Author: {} with {}", author.name, author.company.name),
            None,
        ));
        article.append(&create_elem_with_text("p", &author.company.catch_phrase, None));

        let button = create_elem_with_text("button", SHOW_COMMENTS, None);
        button.set_attr(POST_ID_ATTR, &post.id.to_string());
        article.append(&button);

        let panel = build_comment_panel(api, post.id).await;
        if let Some(panel) = &panel {
            article.append(panel);
        }

        articles.push(PostArticle {
            post_id: post.id,
            article,
            button,
            panel,
        });
    }
    Ok(Some(articles))
}

/// Build the post list and append it to the render target.
///
/// Absent posts appends the default placeholder paragraph instead and
/// returns an empty batch. An empty (but present) posts collection appends
/// nothing: zero articles, no placeholder.
pub async fn display_posts(
    api: &impl BlogApi,
    target: &Element,
    posts: Option<&[Post]>,
) -> RenderResult<Vec<PostArticle>> {
    match create_posts(api, posts).await? {
        Some(articles) => {
            for built in &articles {
                target.append(&built.article);
            }
            Ok(articles)
        }
        None => {
            let placeholder = create_elem_with_text("p", DEFAULT_TEXT, Some("default-text"));
            target.append(&placeholder);
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::HIDE_CLASS;
    use crate::types::{Comment, Company, User, UserId};
    use std::collections::HashMap;

    struct StubApi {
        users: HashMap<UserId, User>,
        comments: HashMap<PostId, Vec<Comment>>,
    }

    impl BlogApi for StubApi {
        async fn all_users(&self) -> Option<Vec<User>> {
            None
        }
        async fn user(&self, user_id: UserId) -> Option<User> {
            self.users.get(&user_id).cloned()
        }
        async fn user_posts(&self, _user_id: UserId) -> Option<Vec<Post>> {
            None
        }
        async fn post_comments(&self, post_id: PostId) -> Option<Vec<Comment>> {
            self.comments.get(&post_id).cloned()
        }
    }

    fn leanne() -> User {
        User {
            id: 1,
            name: "Leanne".to_string(),
            company: Company {
                name: "ACME".to_string(),
                catch_phrase: "Go go".to_string(),
            },
        }
    }

    fn post(id: PostId, user_id: UserId, title: &str, body: &str) -> Post {
        Post {
            id,
            user_id,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn test_article_contains_all_post_fields() {
        let api = StubApi {
            users: HashMap::from([(1, leanne())]),
            comments: HashMap::from([(10, vec![])]),
        };
        let posts = vec![post(10, 1, "T", "B")];
        let articles = create_posts(&api, Some(&posts)).await.unwrap().unwrap();
        assert_eq!(articles.len(), 1);

        let built = &articles[0];
        assert_eq!(built.post_id, 10);
        let texts: Vec<String> = built.article.children().iter().map(|c| c.text()).collect();
        assert_eq!(
            texts,
            vec![
                "T",
                "B",
                "Post ID: 10",
                "Author: Leanne with ACME",
                "Go go",
                SHOW_COMMENTS,
                "",
            ]
        );
        assert_eq!(built.button.attr(POST_ID_ATTR).as_deref(), Some("10"));

        let panel = built.panel.as_ref().unwrap();
        assert!(panel.has_class(HIDE_CLASS));
        assert_eq!(panel.child_count(), 0);
    }

    #[tokio::test]
    async fn test_articles_keep_input_order() {
        let api = StubApi {
            users: HashMap::from([(1, leanne())]),
            comments: HashMap::new(),
        };
        let posts = vec![post(30, 1, "third", ""), post(10, 1, "first", ""), post(20, 1, "second", "")];
        let articles = create_posts(&api, Some(&posts)).await.unwrap().unwrap();
        let ids: Vec<PostId> = articles.iter().map(|a| a.post_id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[tokio::test]
    async fn test_missing_author_fails_the_batch() {
        let api = StubApi {
            users: HashMap::new(),
            comments: HashMap::new(),
        };
        let posts = vec![post(10, 7, "T", "B")];
        let err = create_posts(&api, Some(&posts)).await.unwrap_err();
        assert_eq!(
            err,
            RenderError::MissingAuthor {
                user_id: 7,
                post_id: 10
            }
        );
    }

    #[tokio::test]
    async fn test_absent_posts_render_placeholder() {
        let api = StubApi {
            users: HashMap::new(),
            comments: HashMap::new(),
        };
        let target = Element::new("main");
        let articles = display_posts(&api, &target, None).await.unwrap();
        assert!(articles.is_empty());
        assert_eq!(target.child_count(), 1);

        let placeholder = &target.children()[0];
        assert_eq!(placeholder.text(), DEFAULT_TEXT);
        assert!(placeholder.has_class("default-text"));
    }

    #[tokio::test]
    async fn test_empty_posts_render_nothing() {
        let api = StubApi {
            users: HashMap::new(),
            comments: HashMap::new(),
        };
        let target = Element::new("main");
        let articles = display_posts(&api, &target, Some(&[])).await.unwrap();
        assert!(articles.is_empty());
        assert_eq!(target.child_count(), 0);
    }
}
