//! Application bootstrap and selection handling.
//!
//! The app owns the select menu and the main content region, and runs the
//! select-change path: resolve the chosen user id, fetch that user's
//! posts, refresh the content. Overlapping selections are handled
//! explicitly: the renderer sits behind an async mutex so refreshes never
//! interleave their mutations, and every selection is stamped with a
//! generation counter that is re-checked at each wait point — a selection
//! superseded while fetching, while queued for the renderer, or while its
//! own refresh was running resolves to a stale outcome, and the newest
//! selection always renders last.

use std::cell::Cell;

use tokio::sync::Mutex;

use crate::api_client::BlogApi;
use crate::dom::Element;
use crate::elements::create_select_options;
use crate::refresh::{ClickEvent, RefreshController, ToggleOutcome};
use crate::types::{PostId, UserId};

/// User shown when the select menu has no value yet.
pub const DEFAULT_USER_ID: UserId = 1;

/// Outcome of one select-change.
#[derive(Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The content region now shows this user's posts.
    Rendered { user_id: UserId, post_count: usize },
    /// The posts fetch failed; the content region was left untouched.
    NoPosts { user_id: UserId },
    /// A newer selection superseded this one; its result was dropped.
    Stale { user_id: UserId },
}

pub struct App<A: BlogApi> {
    api: A,
    select: Element,
    content: Element,
    controller: Mutex<RefreshController>,
    generation: Cell<u64>,
}

impl<A: BlogApi> App<A> {
    /// Fetch all users, build the populated select menu and the empty main
    /// region showing the placeholder text.
    pub async fn init(api: A) -> Self {
        let select = Element::new("select");
        select.set_attr("id", "selectMenu");

        let users = api.all_users().await;
        match create_select_options(users.as_deref()) {
            Some(options) => {
                for option in &options {
                    select.append(option);
                }
                tracing::info!(count = options.len(), "populated select menu");
            }
            None => tracing::warn!("no users fetched, select menu left empty"),
        }

        let content = Element::new("main");
        let mut controller = RefreshController::new(content.clone());
        if let Err(error) = controller.show_placeholder(&api).await {
            tracing::error!(%error, "failed to render placeholder");
        }

        Self {
            api,
            select,
            content,
            controller: Mutex::new(controller),
            generation: Cell::new(0),
        }
    }

    pub fn select_menu(&self) -> &Element {
        &self.select
    }

    /// Handle to the main content region.
    pub fn content(&self) -> Element {
        self.content.clone()
    }

    fn superseded(&self, generation: u64) -> bool {
        self.generation.get() != generation
    }

    /// Handle a select-change: fetch the chosen user's posts and refresh.
    ///
    /// An unset selection falls back to [`DEFAULT_USER_ID`]. The result is
    /// dropped as [`SelectionOutcome::Stale`] when another selection was
    /// made while this one was fetching, waiting for the renderer, or
    /// refreshing; the newest selection's refresh runs after this one
    /// releases the renderer and determines the final content.
    pub async fn select_user(&self, selected: Option<UserId>) -> SelectionOutcome {
        let user_id = selected.unwrap_or(DEFAULT_USER_ID);
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        tracing::info!(user_id, generation, "selection changed");

        let posts = self.api.user_posts(user_id).await;
        if self.superseded(generation) {
            tracing::debug!(user_id, generation, "superseded during posts fetch");
            return SelectionOutcome::Stale { user_id };
        }

        let mut controller = self.controller.lock().await;
        if self.superseded(generation) {
            tracing::debug!(user_id, generation, "superseded while queued for the renderer");
            return SelectionOutcome::Stale { user_id };
        }

        let result = controller.refresh(&self.api, posts.as_deref()).await;
        drop(controller);
        if self.superseded(generation) {
            // The newer selection is queued behind this refresh and will
            // rebuild the content next; this result is no longer current.
            tracing::debug!(user_id, generation, "superseded during refresh");
            return SelectionOutcome::Stale { user_id };
        }

        match result {
            Ok(Some(summary)) => SelectionOutcome::Rendered {
                user_id,
                post_count: summary.handlers_attached,
            },
            Ok(None) => SelectionOutcome::NoPosts { user_id },
            Err(error) => {
                // The original surfaced this as an unhandled rejection;
                // here it is logged and the refresh stays aborted.
                tracing::error!(user_id, %error, "refresh aborted");
                SelectionOutcome::NoPosts { user_id }
            }
        }
    }

    /// Route a toggle-button click for one post.
    ///
    /// Resolves to no value while a refresh holds the renderer: the nodes
    /// are mid-rebuild and there is nothing consistent to toggle.
    pub fn click(&self, post_id: PostId) -> Option<ToggleOutcome> {
        let controller = self.controller.try_lock().ok()?;
        controller.toggle(&ClickEvent { post_id })
    }
}
