use serde::Serialize;

use super::ProviderConfig;

/// Only `user` messages are ever sent; there is no conversation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    role: Role,
    content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Body of a chat-completion request, in the provider's wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

impl ChatRequest {
    /// A single user message with the model and sampling settings from `config`.
    pub fn single_user_message(config: &ProviderConfig, prompt: impl Into<String>) -> Self {
        Self {
            model: config.model().to_string(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: config.temperature(),
            max_tokens: config.max_tokens(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_to_provider_schema() {
        let config = ProviderConfig::new("key", "https://api.cerebras.ai", "llama3.1-8b");
        let request = ChatRequest::single_user_message(&config, "Hello");

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "llama3.1-8b",
                "messages": [{"role": "user", "content": "Hello"}],
                "temperature": 0.7f32,
                "max_tokens": 2000
            })
        );
    }

    #[test]
    fn single_user_message_has_one_user_entry() {
        let request = ChatRequest::single_user_message(&ProviderConfig::default(), "Hi");
        assert_eq!(request.messages().len(), 1);
        assert_eq!(request.messages()[0].role(), Role::User);
        assert_eq!(request.messages()[0].content(), "Hi");
    }
}
