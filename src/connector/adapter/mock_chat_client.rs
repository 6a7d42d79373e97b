use async_trait::async_trait;

use crate::application::ChatClient;
use crate::domain::DomainError;

/// Offline [`ChatClient`]: echoes the prompt back, or returns a fixed reply.
pub struct MockChatClient {
    reply: Option<String>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self { reply: None }
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
        }
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        if prompt.is_empty() {
            return Err(DomainError::invalid_input("prompt must not be empty"));
        }
        Ok(self.reply.clone().unwrap_or_else(|| prompt.to_string()))
    }

    fn has_credentials(&self) -> bool {
        false
    }

    fn model_name(&self) -> &str {
        "mock-chat"
    }
}
