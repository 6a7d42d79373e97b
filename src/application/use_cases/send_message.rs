use std::sync::Arc;

use crate::application::ChatClient;
use crate::domain::DomainError;

/// Free-form chat: one message in, one reply out. No history is kept.
pub struct SendMessageUseCase {
    chat_client: Arc<dyn ChatClient>,
}

impl SendMessageUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    pub async fn execute(&self, message: &str) -> Result<String, DomainError> {
        self.chat_client.complete(message).await
    }
}
