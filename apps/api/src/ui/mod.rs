//! Form-driven remix page. Errors are rendered inline, never as JSON.

pub mod render;

use axum::{
    extract::{Path, State},
    response::Html,
};
use axum_extra::extract::Form;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::posts::validate_post_text;
use crate::remix::remix_text;
use crate::state::AppState;
use crate::workspace::{
    Workspace, DELETE_FAILED_MESSAGE, EMPTY_POST_MESSAGE, LOAD_FAILED_MESSAGE,
    SAVE_FAILED_MESSAGE,
};

/// Everything the workspace form submits, whichever button was pressed.
#[derive(Debug, Deserialize)]
pub struct WorkspaceForm {
    #[serde(default)]
    pub text: String,
    /// Every candidate on the page, in page order, edits included.
    #[serde(default)]
    pub candidate: Vec<String>,
    /// Index of the candidate whose Save button was pressed.
    pub save: Option<usize>,
}

impl WorkspaceForm {
    fn into_workspace(self) -> Workspace {
        Workspace::restore(self.text, self.candidate)
    }
}

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    let mut ws = Workspace::default();
    load_saved(&state, &mut ws).await;
    render_page(&ws)
}

/// POST /
pub async fn handle_remix_form(
    State(state): State<AppState>,
    Form(form): Form<WorkspaceForm>,
) -> Html<String> {
    let mut ws = form.into_workspace();

    if let Some(text) = ws.begin_submit() {
        let result = remix_text(&state.llm, &text).await;
        ws.finish_submit(result);
        info!(candidates = ws.candidates.len(), "Rendered remix candidates");
    }

    load_saved(&state, &mut ws).await;
    render_page(&ws)
}

/// POST /posts
///
/// Saves the candidate named by `save` and re-renders the page with the
/// submitted input and candidates untouched.
pub async fn handle_save_form(
    State(state): State<AppState>,
    Form(form): Form<WorkspaceForm>,
) -> Html<String> {
    let index = form.save;
    let mut ws = form.into_workspace();
    let text = index
        .and_then(|i| ws.candidate(i))
        .unwrap_or_default()
        .to_string();

    match validate_post_text(&text) {
        Ok(text) => match state.posts.insert(text).await {
            Ok(post) => info!(post_id = %post.id, index = ?index, "Saved post"),
            Err(e) => {
                warn!("Failed to save post: {e}");
                ws.fail(SAVE_FAILED_MESSAGE);
            }
        },
        Err(_) => ws.fail(EMPTY_POST_MESSAGE),
    }

    load_saved(&state, &mut ws).await;
    render_page(&ws)
}

/// POST /posts/:id/delete
///
/// Deleting an unknown id is not an error; the page simply no longer lists it.
pub async fn handle_delete_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<WorkspaceForm>,
) -> Html<String> {
    let mut ws = form.into_workspace();

    match state.posts.delete(id).await {
        Ok(deleted) => info!(post_id = %id, deleted, "Delete requested"),
        Err(e) => {
            warn!("Failed to delete post {id}: {e}");
            ws.fail(DELETE_FAILED_MESSAGE);
        }
    }

    load_saved(&state, &mut ws).await;
    render_page(&ws)
}

async fn load_saved(state: &AppState, ws: &mut Workspace) {
    match state.posts.list().await {
        Ok(posts) => ws.set_saved(posts),
        Err(e) => {
            warn!("Failed to load saved posts: {e}");
            // Keep the error from the action itself if there was one
            if ws.error.is_none() {
                ws.fail(LOAD_FAILED_MESSAGE);
            }
        }
    }
}

fn render_page(ws: &Workspace) -> Html<String> {
    Html(render::page(ws).into_string())
}
