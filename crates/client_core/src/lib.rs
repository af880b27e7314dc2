//! Request/response/render lifecycles for the mock posts API demo.
//!
//! Each of the three user-triggered actions runs the same linear lifecycle
//! against its own surface: clear prior feedback, show the loading
//! indicator, perform exactly one network call, render either the result or
//! a labeled error block, then clear the loading indicator. Errors never
//! escape an action.

use std::sync::Arc;

use shared::{domain::PostDraft, error::ClientError};
use tracing::{error, info};

pub mod api;
pub mod render;
pub mod surface;

pub use api::{HttpPostsApi, PostsApi, DEFAULT_BASE_URL};
pub use surface::{ActionSurface, CreateFormSurface, DeleteFormSurface, PostFormInput};

/// Page size requested by the list action.
pub const POSTS_PAGE_LIMIT: u32 = 5;
/// Inclusive id range the delete action accepts (the mock dataset holds
/// exactly 100 posts).
pub const DELETE_ID_MIN: i64 = 1;
pub const DELETE_ID_MAX: i64 = 100;

const DELETE_ID_HINT: &str = "provide a valid ID (1–100)";

/// Per-action lifecycle configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionOptions {
    /// Whether the trigger is disabled on entry and re-enabled on exit.
    /// The original page disables the list and delete triggers while a
    /// request is in flight but never the create form's submit control;
    /// that asymmetry is kept as configuration rather than divergent code.
    pub disables_trigger_during_flight: bool,
}

const LIST_OPTIONS: ActionOptions = ActionOptions {
    disables_trigger_during_flight: true,
};
const CREATE_OPTIONS: ActionOptions = ActionOptions {
    disables_trigger_during_flight: false,
};
const DELETE_OPTIONS: ActionOptions = ActionOptions {
    disables_trigger_during_flight: true,
};

/// Drives the three actions over an injected [`PostsApi`].
pub struct PostsController {
    api: Arc<dyn PostsApi>,
}

impl PostsController {
    /// Controller against the public mock service.
    pub fn new() -> Self {
        Self::with_api(Arc::new(HttpPostsApi::default()))
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_api(Arc::new(HttpPostsApi::new(base_url)))
    }

    pub fn with_api(api: Arc<dyn PostsApi>) -> Self {
        Self { api }
    }

    /// Fetches the first page of posts and renders one card per post, or
    /// the informational empty line.
    pub async fn fetch_posts(&self, surface: &dyn ActionSurface) {
        begin(surface, LIST_OPTIONS);

        info!(limit = POSTS_PAGE_LIMIT, "posts: fetching recent page");
        match self.api.recent_posts(POSTS_PAGE_LIMIT).await {
            Ok(posts) => {
                info!(count = posts.len(), "posts: page received");
                surface.show_result(&render::post_list(&posts));
            }
            Err(err) => {
                error!("posts: GET request failed: {err}");
                surface.show_error(&render::action_error("GET", &err));
            }
        }

        finish(surface, LIST_OPTIONS);
    }

    /// Reads the form, posts the draft and renders the created post. The
    /// form is reset only after a successful render.
    pub async fn create_post(&self, surface: &dyn CreateFormSurface) {
        begin(surface, CREATE_OPTIONS);

        let input = surface.read_form();
        let draft = PostDraft::from_form(&input.user_id, &input.title, &input.body);
        info!(user_id = ?draft.user_id, "posts: creating post");
        match self.api.create_post(&draft).await {
            Ok(post) => {
                info!(post_id = post.id.0, "posts: post created");
                surface.show_result(&render::post_created(&post));
                surface.reset_form();
            }
            Err(err) => {
                error!("posts: POST request failed: {err}");
                surface.show_error(&render::action_error("POST", &err));
            }
        }

        finish(surface, CREATE_OPTIONS);
    }

    /// Validates the id field locally, then issues the delete and renders a
    /// confirmation. Out-of-range or non-numeric input never reaches the
    /// network.
    pub async fn delete_post(&self, surface: &dyn DeleteFormSurface) {
        begin(surface, DELETE_OPTIONS);

        let raw_id = surface.read_post_id();
        let outcome = match parse_delete_id(&raw_id) {
            Ok(post_id) => {
                info!(post_id, "posts: deleting post");
                self.api.delete_post(post_id).await.map(|()| post_id)
            }
            Err(err) => Err(err),
        };
        match outcome {
            Ok(post_id) => {
                info!(post_id, "posts: post deleted");
                surface.show_result(&render::post_deleted(post_id));
            }
            Err(err) => {
                error!("posts: DELETE request failed: {err}");
                surface.show_error(&render::action_error("DELETE", &err));
            }
        }

        finish(surface, DELETE_OPTIONS);
    }
}

impl Default for PostsController {
    fn default() -> Self {
        Self::new()
    }
}

/// The id field must hold an integer in `[DELETE_ID_MIN, DELETE_ID_MAX]`
/// once trimmed. Non-numeric input is rejected with the same message as
/// out-of-range input.
fn parse_delete_id(raw: &str) -> Result<i64, ClientError> {
    let invalid = || ClientError::Validation(DELETE_ID_HINT.to_string());
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }
    let post_id = trimmed.parse::<i64>().map_err(|_| invalid())?;
    if !(DELETE_ID_MIN..=DELETE_ID_MAX).contains(&post_id) {
        return Err(invalid());
    }
    Ok(post_id)
}

fn begin<S: ActionSurface + ?Sized>(surface: &S, options: ActionOptions) {
    surface.clear_feedback();
    if options.disables_trigger_during_flight {
        surface.set_trigger_enabled(false);
    }
    surface.set_loading(true);
}

fn finish<S: ActionSurface + ?Sized>(surface: &S, options: ActionOptions) {
    surface.set_loading(false);
    if options.disables_trigger_during_flight {
        surface.set_trigger_enabled(true);
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
