use async_trait::async_trait;
use contracts::domain::chat::{ChatMessage as WidgetMessage, ChatRole as WidgetRole};
use thiserror::Error;

/// Why a completion could not be produced. Logged, then folded into the
/// apology the visitor sees.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("credential rejected: {0}")]
    Unauthorized(String),

    #[error("rate limited by provider")]
    RateLimited,

    #[error("provider unreachable: {0}")]
    Unreachable(String),

    #[error("request could not be built: {0}")]
    Rejected(String),

    #[error("provider error: {0}")]
    Provider(String),
}

impl LlmError {
    /// Short tag for log lines.
    pub fn label(&self) -> &'static str {
        match self {
            LlmError::Unauthorized(_) => "unauthorized",
            LlmError::RateLimited => "rate_limited",
            LlmError::Unreachable(_) => "unreachable",
            LlmError::Rejected(_) => "rejected",
            LlmError::Provider(_) => "provider",
        }
    }
}

/// Who is speaking in the prompt sent upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptRole {
    Instruction,
    Visitor,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PromptTurn {
    pub role: PromptRole,
    pub content: String,
}

impl PromptTurn {
    pub fn instruction(content: impl Into<String>) -> Self {
        Self {
            role: PromptRole::Instruction,
            content: content.into(),
        }
    }

    pub fn visitor(content: impl Into<String>) -> Self {
        Self {
            role: PromptRole::Visitor,
            content: content.into(),
        }
    }
}

/// Widget history keeps error-flagged replies; they go upstream as ordinary
/// assistant turns.
impl From<&WidgetMessage> for PromptTurn {
    fn from(message: &WidgetMessage) -> Self {
        let role = match message.role {
            WidgetRole::User => PromptRole::Visitor,
            WidgetRole::Model => PromptRole::Assistant,
        };
        Self {
            role,
            content: message.text.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub model: String,
    pub tokens_used: Option<u32>,
    pub finish_reason: Option<String>,
}

impl Completion {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A chat-completion backend. One call, one attempt.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn complete(&self, turns: Vec<PromptTurn>) -> Result<Completion, LlmError>;

    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_roles_map_to_prompt_roles() {
        assert_eq!(PromptTurn::from(&WidgetMessage::user("hi")).role, PromptRole::Visitor);
        assert_eq!(PromptTurn::from(&WidgetMessage::model("hey")).role, PromptRole::Assistant);
        let failed = PromptTurn::from(&WidgetMessage::error("sorry"));
        assert_eq!(failed.role, PromptRole::Assistant);
        assert_eq!(failed.content, "sorry");
    }

    #[test]
    fn test_blank_completion() {
        let completion = Completion {
            text: " \n\t".into(),
            model: "m".into(),
            tokens_used: None,
            finish_reason: None,
        };
        assert!(completion.is_blank());
    }
}
