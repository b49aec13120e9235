pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::posts::handlers as posts;
use crate::remix::handlers as remix;
use crate::state::AppState;
use crate::ui;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Remix page
        .route("/", get(ui::handle_index).post(ui::handle_remix_form))
        .route("/posts", post(ui::handle_save_form))
        .route("/posts/:id/delete", post(ui::handle_delete_form))
        // Remix API
        .route(
            "/api/remix",
            post(remix::handle_remix).fallback(remix::handle_remix_method_not_allowed),
        )
        // Saved posts API
        .route(
            "/api/posts",
            get(posts::handle_list_posts).post(posts::handle_create_post),
        )
        .route("/api/posts/:id", delete(posts::handle_delete_post))
        .with_state(state)
}
