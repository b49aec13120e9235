//! Axum route handlers for the saved posts JSON API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::post::SavedPost;
use crate::posts::validate_post_text;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct NewPost {
    #[serde(default)]
    pub text: String,
}

/// GET /api/posts
pub async fn handle_list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<SavedPost>>, AppError> {
    Ok(Json(state.posts.list().await?))
}

/// POST /api/posts
///
/// A body that is not JSON is answered like blank text, with the JSON error body.
pub async fn handle_create_post(
    State(state): State<AppState>,
    payload: Result<Json<NewPost>, JsonRejection>,
) -> Result<(StatusCode, Json<SavedPost>), AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected post body: {rejection}");
            NewPost::default()
        }
    };
    let text = validate_post_text(&request.text)?;
    let post = state.posts.insert(text).await?;
    info!(post_id = %post.id, "Saved post");
    Ok((StatusCode::CREATED, Json(post)))
}

/// DELETE /api/posts/:id
pub async fn handle_delete_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.posts.delete(id).await? {
        return Err(AppError::NotFound(format!("Post {id} not found")));
    }
    info!(post_id = %id, "Deleted post");
    Ok(StatusCode::NO_CONTENT)
}
