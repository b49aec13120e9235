//! Workspace: the editable state behind the remix page.
//!
//! Holds the input text, the current candidates and the saved posts panel.
//! Nothing here touches the network; handlers drive the transitions around
//! each awaited call and then render the result.

use std::fmt::Display;

use reqwest::Url;
use tracing::warn;

use crate::models::post::SavedPost;
use crate::remix::prompts::TWEET_SEPARATOR;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text to remix";
pub const REMIX_FAILED_MESSAGE: &str = "Failed to remix text. Please try again.";
pub const EMPTY_POST_MESSAGE: &str = "Cannot save an empty post";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save post. Please try again.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete post. Please try again.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load saved posts.";

const SHARE_INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// Rejects input with nothing to remix, before any network call.
pub fn validate_input(text: &str) -> Result<&str, &'static str> {
    if text.trim().is_empty() {
        return Err(EMPTY_INPUT_MESSAGE);
    }
    Ok(text)
}

/// Splits combined model output into trimmed, non-empty candidates.
pub fn split_candidates(remixed: &str) -> Vec<String> {
    remixed
        .split(TWEET_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// A pre-filled share intent for one candidate.
pub fn share_intent_url(text: &str) -> String {
    Url::parse_with_params(SHARE_INTENT_URL, &[("text", text)])
        .map(String::from)
        .unwrap_or_else(|_| SHARE_INTENT_URL.to_string())
}

#[derive(Debug, Default, Clone)]
pub struct Workspace {
    pub input: String,
    pub candidates: Vec<String>,
    pub saved: Vec<SavedPost>,
    pub error: Option<String>,
    /// Set while a remix call is in flight; the page renders its input read-only.
    pub loading: bool,
}

impl Workspace {
    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Restores the input and candidates exactly as the page submitted them,
    /// edits and blank candidates included.
    pub fn restore(input: impl Into<String>, candidates: Vec<String>) -> Self {
        Self {
            input: input.into(),
            candidates,
            ..Self::default()
        }
    }

    /// Clears the previous error and returns the text to send, or records
    /// an inline error when there is nothing to remix.
    pub fn begin_submit(&mut self) -> Option<String> {
        self.error = None;
        match validate_input(&self.input) {
            Ok(text) => {
                self.loading = true;
                Some(text.to_string())
            }
            Err(message) => {
                self.fail(message);
                None
            }
        }
    }

    /// Applies the outcome of a remix call. Failures keep the previous candidates.
    pub fn finish_submit<E: Display>(&mut self, result: Result<String, E>) {
        self.loading = false;
        match result {
            Ok(remixed) => self.candidates = split_candidates(&remixed),
            Err(e) => {
                warn!("Remix failed: {e}");
                self.error = Some(REMIX_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Current (possibly edited) text of one candidate.
    pub fn candidate(&self, index: usize) -> Option<&str> {
        self.candidates.get(index).map(String::as_str)
    }

    pub fn set_saved(&mut self, posts: Vec<SavedPost>) {
        self.saved = posts;
    }

    pub fn fail(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }
}
