use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{ChatClient, ItineraryPromptBuilder, SendMessageUseCase};
use crate::connector::adapter::{ChatCompletionClient, MockChatClient};
use crate::domain::{DomainError, ProviderConfig};

pub struct ContainerConfig {
    /// Resolved once at start-up (environment, then CLI overrides).
    pub provider: ProviderConfig,
    /// Answer from [`MockChatClient`] instead of calling the provider.
    pub mock_provider: bool,
}

pub struct Container {
    chat_client: Arc<dyn ChatClient>,
    /// Set when talking to a real provider; used for credential diagnostics.
    remote_client: Option<Arc<ChatCompletionClient>>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        if config.mock_provider {
            debug!("Using mock chat client");
            return Ok(Self::with_chat_client(Arc::new(MockChatClient::new()), config));
        }

        debug!(
            "Using chat completion provider at {} (model {})",
            config.provider.base_url(),
            config.provider.model()
        );
        let remote = Arc::new(ChatCompletionClient::new(config.provider.clone())?);
        Ok(Self {
            chat_client: remote.clone(),
            remote_client: Some(remote),
            config,
        })
    }

    /// Wire an arbitrary [`ChatClient`]; credential checks are skipped.
    pub fn with_chat_client(chat_client: Arc<dyn ChatClient>, config: ContainerConfig) -> Self {
        Self {
            chat_client,
            remote_client: None,
            config,
        }
    }

    pub fn itinerary_use_case(&self) -> ItineraryPromptBuilder {
        ItineraryPromptBuilder::new(self.chat_client.clone())
    }

    pub fn send_message_use_case(&self) -> SendMessageUseCase {
        SendMessageUseCase::new(self.chat_client.clone())
    }

    pub fn chat_client(&self) -> Arc<dyn ChatClient> {
        self.chat_client.clone()
    }

    pub fn require_credentials(&self) -> Result<(), DomainError> {
        match &self.remote_client {
            Some(client) => client.require_credentials(),
            None => Ok(()),
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.chat_client.has_credentials()
    }

    pub fn endpoint(&self) -> String {
        match &self.remote_client {
            Some(client) => client.endpoint().to_string(),
            None => self.config.provider.endpoint(),
        }
    }

    pub fn provider_config(&self) -> &ProviderConfig {
        &self.config.provider
    }

    pub fn mock_provider(&self) -> bool {
        self.config.mock_provider
    }
}
