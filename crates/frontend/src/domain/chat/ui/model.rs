//! Chat widget - Model (API functions)

use crate::shared::api_utils::api_url;
use contracts::domain::chat::{ChatReply, ChatRequest};
use gloo_net::http::Request;

/// Send the conversation to the backend. Transport and decode failures are
/// errors; model failures arrive as replies with `is_error` set.
pub async fn send_chat(request: &ChatRequest) -> Result<ChatReply, String> {
    let response = Request::post(&api_url("/api/chat"))
        .json(request)
        .map_err(|e| format!("{e}"))?
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<ChatReply>()
        .await
        .map_err(|e| format!("{e}"))
}
