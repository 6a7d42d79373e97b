use async_trait::async_trait;

use crate::domain::DomainError;

/// Sends a single prompt to an LLM and returns the assistant's reply text.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Consumers (e.g. [`crate::application::ItineraryPromptBuilder`]) stay
/// decoupled from any particular provider or HTTP client library.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send `prompt` as one `user` message and return the reply verbatim.
    async fn complete(&self, prompt: &str) -> Result<String, DomainError>;

    /// Whether a non-blank API key is configured. An empty or whitespace-only
    /// key counts as missing. Diagnostic only; requests are attempted either way.
    fn has_credentials(&self) -> bool;

    /// Model identifier reported by `check`.
    fn model_name(&self) -> &str;
}
