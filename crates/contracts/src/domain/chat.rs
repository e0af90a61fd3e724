//! Chat widget model: messages, wire DTOs and the submission controller.

use serde::{Deserialize, Serialize};

/// First message shown when the widget opens.
pub const GREETING: &str = "Hello! I'm Badrish's AI assistant. I can tell you about his work, skills, or experience. What would you like to know?";
/// Shown when the chat endpoint cannot be reached at all.
pub const APOLOGY_UNREACHABLE: &str =
    "I'm having trouble connecting right now. Please try again later.";
/// Returned by the server when the model call fails.
pub const APOLOGY_PROVIDER: &str =
    "I'm currently having trouble connecting to my brain. Please try again later.";
/// Returned by the server when the model answers with empty text.
pub const EMPTY_REPLY: &str = "I'm sorry, I couldn't generate a response.";
/// Returned by the server when no API key is configured.
pub const CONFIG_ERROR: &str =
    "Configuration Error: API Key is missing. Please ensure the server's API key variable is set.";

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

/// Immutable chat entry. `is_error` only affects styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            is_error: false,
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
            is_error: true,
        }
    }
}

/// POST /api/chat body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation before `message`, oldest first.
    pub history: Vec<ChatMessage>,
    pub message: String,
}

/// POST /api/chat response. Failures are replies too, flagged with `is_error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub text: String,
    #[serde(default)]
    pub is_error: bool,
}

impl ChatReply {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn failed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Submission state of the chat widget.
///
/// ```text
///   Ready ──submit(non-blank)──► Waiting ──complete(Ok|Err)──► Ready
///     ▲  submit(blank) / submit while waiting: no-op  │
///     └───────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ChatController {
    messages: Vec<ChatMessage>,
    is_loading: bool,
}

impl Default for ChatController {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatController {
    pub fn new() -> Self {
        Self::with_history(vec![ChatMessage::model(GREETING)])
    }

    pub fn with_history(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            is_loading: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether the send button should be enabled for `input`.
    pub fn can_submit(&self, input: &str) -> bool {
        !self.is_loading && !input.trim().is_empty()
    }

    /// Accept user input. Returns the request to send, or `None` when the
    /// input is blank or a request is already in flight.
    pub fn submit(&mut self, input: &str) -> Option<ChatRequest> {
        if !self.can_submit(input) {
            return None;
        }
        let text = input.trim().to_string();
        let history = self.messages.clone();
        self.messages.push(ChatMessage::user(text.clone()));
        self.is_loading = true;
        Some(ChatRequest {
            history,
            message: text,
        })
    }

    /// Finish the in-flight request. Transport failures become an
    /// error-flagged apology; the waiting state is always cleared.
    pub fn complete(&mut self, outcome: Result<ChatReply, String>) {
        if !self.is_loading {
            return;
        }
        let message = match outcome {
            Ok(reply) if reply.is_error => ChatMessage::error(reply.text),
            Ok(reply) => ChatMessage::model(reply.text),
            Err(_) => ChatMessage::error(APOLOGY_UNREACHABLE),
        };
        self.messages.push(message);
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_greeting() {
        let c = ChatController::new();
        assert_eq!(c.messages(), &[ChatMessage::model(GREETING)]);
        assert!(!c.is_loading());
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut c = ChatController::new();
        assert!(c.submit("").is_none());
        assert!(c.submit("   \n\t").is_none());
        assert_eq!(c.messages().len(), 1);
        assert!(!c.is_loading());
    }

    #[test]
    fn test_submit_appends_and_waits() {
        let mut c = ChatController::new();
        let req = c.submit("  What does he build?  ").unwrap();
        assert_eq!(req.message, "What does he build?");
        assert_eq!(req.history, vec![ChatMessage::model(GREETING)]);
        assert_eq!(c.messages().last(), Some(&ChatMessage::user("What does he build?")));
        assert!(c.is_loading());
    }

    #[test]
    fn test_submit_while_loading_is_noop() {
        let mut c = ChatController::new();
        c.submit("first").unwrap();
        assert!(c.submit("second").is_none());
        assert_eq!(c.messages().len(), 2);
        assert!(!c.can_submit("second"));
    }

    #[test]
    fn test_success_clears_loading() {
        let mut c = ChatController::new();
        c.submit("hi").unwrap();
        c.complete(Ok(ChatReply::ok("Data pipelines, mostly.")));
        assert!(!c.is_loading());
        assert_eq!(c.messages().last(), Some(&ChatMessage::model("Data pipelines, mostly.")));
    }

    #[test]
    fn test_transport_failure_clears_loading() {
        let mut c = ChatController::new();
        c.submit("hi").unwrap();
        c.complete(Err("HTTP 502".into()));
        assert!(!c.is_loading());
        let last = c.messages().last().unwrap();
        assert!(last.is_error);
        assert_eq!(last.role, ChatRole::Model);
        assert_eq!(last.text, APOLOGY_UNREACHABLE);
    }

    #[test]
    fn test_server_side_failure_is_flagged() {
        let mut c = ChatController::new();
        c.submit("hi").unwrap();
        c.complete(Ok(ChatReply::failed(CONFIG_ERROR)));
        assert!(!c.is_loading());
        assert_eq!(c.messages().last(), Some(&ChatMessage::error(CONFIG_ERROR)));
    }

    #[test]
    fn test_history_grows_with_each_turn() {
        let mut c = ChatController::new();
        c.submit("one").unwrap();
        c.complete(Ok(ChatReply::ok("1")));
        let req = c.submit("two").unwrap();
        assert_eq!(req.history.len(), 3);
        assert_eq!(req.history[1], ChatMessage::user("one"));
        assert_eq!(req.history[2], ChatMessage::model("1"));
    }

    #[test]
    fn test_spurious_completion_ignored() {
        let mut c = ChatController::new();
        c.complete(Ok(ChatReply::ok("late")));
        assert_eq!(c.messages().len(), 1);
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_string(&ChatMessage::user("hey")).unwrap();
        assert_eq!(json, r#"{"role":"user","text":"hey"}"#);
        let msg: ChatMessage =
            serde_json::from_str(r#"{"role":"model","text":"x","is_error":true}"#).unwrap();
        assert!(msg.is_error);
        let reply: ChatReply = serde_json::from_str(r#"{"text":"ok"}"#).unwrap();
        assert!(!reply.is_error);
    }
}
