//! Axum route handlers for the Remix API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::Method,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::remix::remix_text;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RemixRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemixResponse {
    pub remixed_text: String,
}

/// POST /api/remix
///
/// A body that is not JSON, or has no usable `text`, is a 400 like an empty one.
pub async fn handle_remix(
    State(state): State<AppState>,
    payload: Result<Json<RemixRequest>, JsonRejection>,
) -> Result<Json<RemixResponse>, AppError> {
    let text = match payload {
        Ok(Json(request)) => request.text.unwrap_or_default(),
        Err(rejection) => {
            warn!("Rejected remix body: {rejection}");
            String::new()
        }
    };

    info!(text_length = text.len(), "Received remix request");

    if text.trim().is_empty() {
        return Err(AppError::Validation("Text is required".to_string()));
    }

    let remixed_text = remix_text(&state.llm, &text).await?;

    Ok(Json(RemixResponse { remixed_text }))
}

/// Any non-POST method on /api/remix.
pub async fn handle_remix_method_not_allowed(method: Method) -> AppError {
    info!(%method, "Rejected remix request method");
    AppError::MethodNotAllowed
}
