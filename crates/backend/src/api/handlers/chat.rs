use axum::{http::StatusCode, Json};
use contracts::domain::chat::{ChatReply, ChatRequest};

use crate::domain::chat::service;

/// POST /api/chat
///
/// Model failures come back as `200` with `is_error` set; only a blank
/// message is rejected.
pub async fn send_message(
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, StatusCode> {
    if request.message.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok(Json(service::reply(&request).await))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_blank_message_rejected() {
        let request = ChatRequest {
            history: vec![],
            message: "   ".to_string(),
        };
        let result = send_message(Json(request)).await;
        assert_eq!(result.err(), Some(StatusCode::BAD_REQUEST));
    }
}
