//! Render refresh and comment toggling.
//!
//! [`RefreshController`] owns the render target and the toggle registry.
//! A refresh runs four steps in order, each completed before the next:
//! detach every registered handler, clear the target, rebuild the post
//! list, register one handler per built post. Toggling then works entirely
//! off the registered node handles; no lookup by attribute, no re-fetch.

use std::collections::HashMap;

use crate::api_client::BlogApi;
use crate::comments::HIDE_CLASS;
use crate::dom::Element;
use crate::error::RenderResult;
use crate::posts::{display_posts, HIDE_COMMENTS, SHOW_COMMENTS};
use crate::types::{Post, PostId};

/// Typed handles to the two nodes a toggle mutates.
pub struct PostHandles {
    pub button: Element,
    pub panel: Element,
}

/// A click on a post's toggle button.
#[derive(Debug, Clone, Copy)]
pub struct ClickEvent {
    pub post_id: PostId,
}

/// State after a toggle, for callers that report it.
#[derive(Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub panel_visible: bool,
    pub button_label: String,
}

/// Click handlers currently attached, keyed by post id.
///
/// The original page re-attached listeners on every refresh without ever
/// removing the old ones (its removal closure never matched the attached
/// one). Here the attached set is tracked explicitly and cleared for real,
/// so after a refresh each button has exactly one handler.
#[derive(Default)]
pub struct ToggleRegistry {
    handlers: HashMap<PostId, PostHandles>,
}

impl ToggleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every attached handler. Returns how many were removed.
    pub fn detach_all(&mut self) -> usize {
        let removed = self.handlers.len();
        self.handlers.clear();
        removed
    }

    /// Attach the handler for one post, replacing any previous one.
    pub fn attach(&mut self, post_id: PostId, handles: PostHandles) {
        self.handlers.insert(post_id, handles);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_attached(&self, post_id: PostId) -> bool {
        self.handlers.contains_key(&post_id)
    }

    /// Flip the clicked post's panel visibility and button label.
    ///
    /// Both flips are unconditional, so they stay in lockstep: a panel is
    /// visible exactly when its button reads "Hide Comments". Returns
    /// `None` for the absent (zero) post id or an unregistered one.
    pub fn toggle(&self, event: &ClickEvent) -> Option<ToggleOutcome> {
        if event.post_id == 0 {
            return None;
        }
        let handles = self.handlers.get(&event.post_id)?;

        let panel_visible = !handles.panel.toggle_class(HIDE_CLASS);
        let label = if handles.button.text() == SHOW_COMMENTS {
            HIDE_COMMENTS
        } else {
            SHOW_COMMENTS
        };
        handles.button.set_text(label);

        tracing::debug!(post_id = event.post_id, panel_visible, "toggled comments");
        Some(ToggleOutcome {
            panel_visible,
            button_label: label.to_string(),
        })
    }
}

/// Counts reported by one refresh, for diagnostics.
#[derive(Debug, PartialEq, Eq)]
pub struct RefreshSummary {
    pub handlers_detached: usize,
    pub nodes_removed: usize,
    pub handlers_attached: usize,
}

/// Owns the main content region and rebuilds it per selection.
pub struct RefreshController {
    target: Element,
    registry: ToggleRegistry,
}

impl RefreshController {
    pub fn new(target: Element) -> Self {
        Self {
            target,
            registry: ToggleRegistry::new(),
        }
    }

    /// The render target handle.
    pub fn target(&self) -> &Element {
        &self.target
    }

    pub fn registry(&self) -> &ToggleRegistry {
        &self.registry
    }

    /// Rebuild the content region for the given posts.
    ///
    /// Absent posts is a no-op returning `Ok(None)`: the current content
    /// and handlers are left untouched. A missing-author error escapes
    /// after the target was cleared, leaving it empty with no handlers —
    /// the remainder of that refresh is abandoned.
    pub async fn refresh(
        &mut self,
        api: &impl BlogApi,
        posts: Option<&[Post]>,
    ) -> RenderResult<Option<RefreshSummary>> {
        let Some(posts) = posts else {
            return Ok(None);
        };

        let handlers_detached = self.registry.detach_all();
        let nodes_removed = self.target.clear_children();
        let articles = display_posts(api, &self.target, Some(posts)).await?;

        let mut handlers_attached = 0;
        for built in articles {
            if let Some(panel) = built.panel {
                self.registry.attach(
                    built.post_id,
                    PostHandles {
                        button: built.button,
                        panel,
                    },
                );
                handlers_attached += 1;
            }
        }

        tracing::debug!(handlers_detached, nodes_removed, handlers_attached, "refreshed posts");
        Ok(Some(RefreshSummary {
            handlers_detached,
            nodes_removed,
            handlers_attached,
        }))
    }

    /// Render the placeholder for the no-selection state.
    pub async fn show_placeholder(&mut self, api: &impl BlogApi) -> RenderResult<()> {
        self.registry.detach_all();
        self.target.clear_children();
        display_posts(api, &self.target, None).await?;
        Ok(())
    }

    /// Route a click to the toggle registry.
    pub fn toggle(&self, event: &ClickEvent) -> Option<ToggleOutcome> {
        self.registry.toggle(event)
    }
}
