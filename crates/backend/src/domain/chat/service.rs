use contracts::domain::chat::{ChatReply, ChatRequest, APOLOGY_PROVIDER, CONFIG_ERROR, EMPTY_REPLY};
use contracts::domain::portfolio::SYSTEM_INSTRUCTION;

use crate::shared::config::{self, resolve_api_key};
use crate::shared::format::preview;
use crate::shared::llm::openai_provider::OpenAiProvider;
use crate::shared::llm::types::{LlmProvider, PromptTurn};

/// Upstream prompt: system instruction, prior turns, then the new message.
pub fn build_prompt(request: &ChatRequest) -> Vec<PromptTurn> {
    let mut turns = Vec::with_capacity(request.history.len() + 2);
    turns.push(PromptTurn::instruction(SYSTEM_INSTRUCTION.trim()));
    turns.extend(request.history.iter().map(PromptTurn::from));
    turns.push(PromptTurn::visitor(request.message.clone()));
    turns
}

/// Single attempt against `provider`. Every outcome is a reply.
pub async fn respond(provider: &dyn LlmProvider, request: &ChatRequest) -> ChatReply {
    tracing::info!(
        "Chat via {}: {} prior turns, message \"{}\"",
        provider.name(),
        request.history.len(),
        preview(&request.message, 60)
    );

    match provider.complete(build_prompt(request)).await {
        Ok(completion) if completion.is_blank() => {
            tracing::warn!(
                "Model {} returned empty text (finish reason {:?})",
                completion.model,
                completion.finish_reason
            );
            ChatReply::ok(EMPTY_REPLY)
        }
        Ok(completion) => {
            tracing::debug!(
                "Model {} answered with {} chars, tokens {:?}",
                completion.model,
                completion.text.len(),
                completion.tokens_used
            );
            ChatReply::ok(completion.text)
        }
        Err(e) => {
            tracing::error!("Chat completion failed [{}]: {}", e.label(), e);
            ChatReply::failed(APOLOGY_PROVIDER)
        }
    }
}

/// Answer `request` with the configured provider.
pub async fn reply(request: &ChatRequest) -> ChatReply {
    let config = match config::get() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration unavailable: {}", e);
            return ChatReply::failed(CONFIG_ERROR);
        }
    };

    let Some(api_key) = resolve_api_key(&config.chat, |name| std::env::var(name).ok()) else {
        tracing::warn!("Chat request rejected: ${} is not set", config.chat.api_key_env);
        return ChatReply::failed(CONFIG_ERROR);
    };

    let provider = OpenAiProvider::from_config(&config.chat, api_key);
    respond(&provider, request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::llm::types::{Completion, LlmError, PromptRole};
    use async_trait::async_trait;
    use contracts::domain::chat::ChatMessage;
    use std::sync::Mutex;

    struct MockProvider {
        outcome: fn() -> Result<Completion, LlmError>,
        seen: Mutex<Vec<PromptTurn>>,
    }

    impl MockProvider {
        fn new(outcome: fn() -> Result<Completion, LlmError>) -> Self {
            Self {
                outcome,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for MockProvider {
        async fn complete(&self, turns: Vec<PromptTurn>) -> Result<Completion, LlmError> {
            *self.seen.lock().unwrap() = turns;
            (self.outcome)()
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    fn answer(text: &str) -> Result<Completion, LlmError> {
        Ok(Completion {
            text: text.to_string(),
            model: "mock-model".to_string(),
            tokens_used: Some(42),
            finish_reason: Some("Stop".to_string()),
        })
    }

    fn request() -> ChatRequest {
        ChatRequest {
            history: vec![
                ChatMessage::model("Hello!"),
                ChatMessage::user("What does he do?"),
                ChatMessage::model("Data engineering."),
            ],
            message: "Where is he based?".to_string(),
        }
    }

    #[test]
    fn test_build_prompt_order_and_roles() {
        let turns = build_prompt(&request());
        let roles: Vec<PromptRole> = turns.iter().map(|t| t.role).collect();
        assert_eq!(
            roles,
            vec![
                PromptRole::Instruction,
                PromptRole::Assistant,
                PromptRole::Visitor,
                PromptRole::Assistant,
                PromptRole::Visitor
            ]
        );
        assert!(turns[0].content.contains("Badrish AI"));
        assert_eq!(turns[4].content, "Where is he based?");
    }

    #[tokio::test]
    async fn test_respond_passes_model_text() {
        let provider = MockProvider::new(|| answer("Bremen, Germany."));
        let reply = respond(&provider, &request()).await;
        assert_eq!(reply, ChatReply::ok("Bremen, Germany."));
        assert_eq!(provider.seen.lock().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_respond_empty_text() {
        let provider = MockProvider::new(|| answer("  \n"));
        let reply = respond(&provider, &request()).await;
        assert_eq!(reply, ChatReply::ok(EMPTY_REPLY));
    }

    #[tokio::test]
    async fn test_respond_provider_error() {
        let provider = MockProvider::new(|| Err(LlmError::RateLimited));
        let reply = respond(&provider, &request()).await;
        assert_eq!(reply, ChatReply::failed(APOLOGY_PROVIDER));
    }
}
