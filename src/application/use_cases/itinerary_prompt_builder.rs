use std::sync::Arc;

use tracing::debug;

use crate::application::ChatClient;
use crate::domain::{DomainError, ItineraryRequest};

/// Turns a destination and trip length into the fixed travel-planning prompt and
/// asks the chat client for suggestions.
///
/// The reply is returned as-is. Splitting it on the `'` and `*` delimiters the
/// prompt asks for is left to the caller.
pub struct ItineraryPromptBuilder {
    chat_client: Arc<dyn ChatClient>,
}

impl ItineraryPromptBuilder {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    pub async fn get_itinerary(&self, destination: &str, days: u32) -> Result<String, DomainError> {
        let request = ItineraryRequest::new(destination, days)?;
        debug!(
            "Requesting {} places for {} ({} days)",
            request.place_count(),
            request.destination(),
            request.days()
        );
        self.chat_client.complete(&request.prompt()).await
    }

    /// The prompt `get_itinerary` would send, without sending it.
    pub fn prompt_for(&self, destination: &str, days: u32) -> Result<String, DomainError> {
        Ok(ItineraryRequest::new(destination, days)?.prompt())
    }
}
