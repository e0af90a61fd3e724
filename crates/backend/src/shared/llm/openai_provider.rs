use super::types::{Completion, LlmError, LlmProvider, PromptRole, PromptTurn};
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;

use crate::shared::config::ChatConfig;

/// Chat completions over the OpenAI wire format. Gemini is reached through
/// its `/v1beta/openai` compatibility base.
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiProvider {
    pub fn from_config(chat: &ChatConfig, api_key: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(chat.api_base.clone());

        Self {
            client: Client::with_config(config),
            model: chat.model.clone(),
            temperature: chat.temperature as f32,
            max_tokens: chat.max_tokens.max(1) as u32,
        }
    }
}

fn to_request_message(turn: PromptTurn) -> Result<ChatCompletionRequestMessage, LlmError> {
    let rejected = |e: async_openai::error::OpenAIError| LlmError::Rejected(e.to_string());
    let message = match turn.role {
        PromptRole::Instruction => ChatCompletionRequestSystemMessageArgs::default()
            .content(turn.content)
            .build()
            .map_err(rejected)?
            .into(),
        PromptRole::Visitor => ChatCompletionRequestUserMessageArgs::default()
            .content(turn.content)
            .build()
            .map_err(rejected)?
            .into(),
        PromptRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
            .content(turn.content)
            .build()
            .map_err(rejected)?
            .into(),
    };
    Ok(message)
}

/// Sorts a client error by the status hints in its message.
fn classify_error(message: String) -> LlmError {
    let lower = message.to_lowercase();
    if lower.contains("401") || lower.contains("403") || lower.contains("api key") {
        LlmError::Unauthorized(message)
    } else if lower.contains("429") || lower.contains("rate limit") || lower.contains("quota") {
        LlmError::RateLimited
    } else if lower.contains("error sending request") || lower.contains("connection") {
        LlmError::Unreachable(message)
    } else {
        LlmError::Provider(message)
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn complete(&self, turns: Vec<PromptTurn>) -> Result<Completion, LlmError> {
        let messages = turns
            .into_iter()
            .map(to_request_message)
            .collect::<Result<Vec<_>, _>>()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(self.temperature)
            .max_completion_tokens(self.max_tokens)
            .build()
            .map_err(|e| LlmError::Rejected(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| classify_error(e.to_string()))?;

        // no choice at all is treated like an empty answer
        let choice = response.choices.first();
        Ok(Completion {
            text: choice
                .and_then(|c| c.message.content.clone())
                .unwrap_or_default(),
            model: response.model.clone(),
            tokens_used: response.usage.as_ref().map(|u| u.total_tokens),
            finish_reason: choice
                .and_then(|c| c.finish_reason.as_ref())
                .map(|r| format!("{:?}", r)),
        })
    }

    fn name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_error() {
        assert!(matches!(
            classify_error("status 401 Unauthorized".into()),
            LlmError::Unauthorized(_)
        ));
        assert!(matches!(
            classify_error("Resource exhausted: quota".into()),
            LlmError::RateLimited
        ));
        assert!(matches!(
            classify_error("http error: error sending request for url".into()),
            LlmError::Unreachable(_)
        ));
        assert!(matches!(
            classify_error("model not found".into()),
            LlmError::Provider(_)
        ));
    }

    #[test]
    fn test_turns_map_to_request_variants() {
        let converted: Vec<_> = [
            PromptTurn::instruction("sys"),
            PromptTurn::visitor("hi"),
            PromptTurn {
                role: PromptRole::Assistant,
                content: "hello".into(),
            },
        ]
        .into_iter()
        .map(|t| to_request_message(t).unwrap())
        .collect();
        assert!(matches!(converted[0], ChatCompletionRequestMessage::System(_)));
        assert!(matches!(converted[1], ChatCompletionRequestMessage::User(_)));
        assert!(matches!(converted[2], ChatCompletionRequestMessage::Assistant(_)));
    }

    #[test]
    fn test_from_config_clamps_max_tokens() {
        let chat = ChatConfig {
            api_base: "http://localhost:9".into(),
            model: "gemini-test".into(),
            api_key_env: "UNUSED".into(),
            temperature: 0.5,
            max_tokens: 0,
        };
        let provider = OpenAiProvider::from_config(&chat, "key".into());
        assert_eq!(provider.max_tokens, 1);
        assert_eq!(provider.name(), "gemini-test");
    }
}
