use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::{ChatRequest, DomainError, ProviderConfig};

/// Minimal subset of the chat-completion response we care about.
/// Everything except `choices[0].message.content` is ignored.
#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// HTTP client for OpenAI-compatible chat-completion endpoints (Cerebras by default).
///
/// Implements [`ChatClient`] so higher-level components (e.g.
/// [`crate::application::ItineraryPromptBuilder`]) stay decoupled from transport
/// and serialization details.
///
/// The configured base URL must not contain `/v1/chat/completions`; the client
/// appends it exactly once:
///
/// ```text
/// https://api.cerebras.ai/  ->  https://api.cerebras.ai/v1/chat/completions
/// https://api.cerebras.ai   ->  https://api.cerebras.ai/v1/chat/completions
/// ```
///
/// Each call is a single POST. Failures are never retried: transport errors and
/// non-2xx statuses become [`DomainError::Provider`], a successful exchange with an
/// unexpected body becomes [`DomainError::ResponseParse`].
pub struct ChatCompletionClient {
    client: reqwest::Client,
    config: ProviderConfig,
    /// Full endpoint URL (normalized base + `/v1/chat/completions`).
    url: String,
}

impl ChatCompletionClient {
    /// No timeout is configured; the transport default applies.
    pub fn new(config: ProviderConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder().build().map_err(|e| {
            DomainError::configuration(format!(
                "ChatCompletionClient: failed to build HTTP client: {e}"
            ))
        })?;
        Ok(Self::with_http_client(config, client))
    }

    pub fn with_http_client(config: ProviderConfig, client: reqwest::Client) -> Self {
        let url = config.endpoint();
        debug!(
            url = %url,
            model = config.model(),
            has_credentials = config.has_credentials(),
            "Initialized chat completion client"
        );
        Self {
            client,
            config,
            url,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.url
    }

    /// Fails with [`DomainError::Configuration`] when no API key is set.
    ///
    /// Only for diagnostics: `complete` still sends the request without a key and
    /// lets the provider reject it.
    pub fn require_credentials(&self) -> Result<(), DomainError> {
        if self.config.has_credentials() {
            Ok(())
        } else {
            Err(DomainError::configuration(
                "ChatCompletionClient: no API key configured (set CEREBRAS_API_KEY)",
            ))
        }
    }

    /// Pull `choices[0].message.content` out of a response body.
    fn extract_content(body: &str) -> Result<String, DomainError> {
        let response: ApiResponse = serde_json::from_str(body).map_err(|e| {
            DomainError::response_parse(format!(
                "ChatCompletionClient: failed to parse response: {e}"
            ))
        })?;

        let choice = response.choices.into_iter().next().ok_or_else(|| {
            DomainError::response_parse("ChatCompletionClient: response contained no choices")
        })?;

        choice
            .message
            .and_then(|m| m.content)
            .ok_or_else(|| {
                DomainError::response_parse(
                    "ChatCompletionClient: choices[0].message.content is missing",
                )
            })
    }

    /// Best-effort error text from a non-2xx body: `error.message`, then
    /// `message`, then the raw body.
    fn provider_error_message(body: &str) -> Option<String> {
        let body = body.trim();
        if body.is_empty() {
            return None;
        }

        if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
            let message = value
                .pointer("/error/message")
                .or_else(|| value.get("message"))
                .and_then(|m| m.as_str());
            if let Some(message) = message {
                return Some(message.to_string());
            }
        }

        Some(body.to_string())
    }
}

#[async_trait]
impl ChatClient for ChatCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        if prompt.is_empty() {
            return Err(DomainError::invalid_input("prompt must not be empty"));
        }

        let request = ChatRequest::single_user_message(&self.config, prompt);

        debug!(
            url = %self.url,
            model = request.model(),
            prompt_chars = prompt.chars().count(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(self.config.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::provider(format!("ChatCompletionClient: request failed: {e}")))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            DomainError::provider(format!(
                "ChatCompletionClient: failed to read response body: {e}"
            ))
        })?;

        if !status.is_success() {
            warn!("ChatCompletionClient: provider returned {status}");
            return Err(DomainError::provider(
                match Self::provider_error_message(&body) {
                    Some(message) => {
                        format!("ChatCompletionClient: provider returned {status}: {message}")
                    }
                    None => format!("ChatCompletionClient: provider returned {status}"),
                },
            ));
        }

        let content = Self::extract_content(&body)?;
        debug!(reply_chars = content.chars().count(), "Received chat completion");
        Ok(content)
    }

    fn has_credentials(&self) -> bool {
        self.config.has_credentials()
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str, api_key: &str) -> ChatCompletionClient {
        ChatCompletionClient::with_http_client(
            ProviderConfig::new(api_key, base_url, "llama3.1-8b"),
            reqwest::Client::new(),
        )
    }

    #[test]
    fn endpoint_appends_suffix_once() {
        let plain = client("https://api.cerebras.ai", "k");
        let slashed = client("https://api.cerebras.ai/", "k");
        assert_eq!(plain.endpoint(), "https://api.cerebras.ai/v1/chat/completions");
        assert_eq!(plain.endpoint(), slashed.endpoint());
    }

    #[test]
    fn extract_content_reads_first_choice() {
        let body = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"X"}},{"message":{"content":"Y"}}],"usage":{}}"#;
        assert_eq!(ChatCompletionClient::extract_content(body).unwrap(), "X");
    }

    #[test]
    fn extract_content_keeps_whitespace() {
        let body = r#"{"choices":[{"message":{"content":"  spaced\n"}}]}"#;
        assert_eq!(
            ChatCompletionClient::extract_content(body).unwrap(),
            "  spaced\n"
        );
    }

    #[test]
    fn extract_content_rejects_missing_or_empty_choices() {
        for body in [r#"{}"#, r#"{"choices":[]}"#, r#"{"choices":null}"#] {
            let err = ChatCompletionClient::extract_content(body).unwrap_err();
            assert!(err.is_response_parse_error(), "{body}: {err}");
        }
    }

    #[test]
    fn extract_content_rejects_missing_nested_path() {
        for body in [
            r#"{"choices":[{}]}"#,
            r#"{"choices":[{"message":{}}]}"#,
            r#"{"choices":[{"message":{"content":null}}]}"#,
            r#"{"choices":[{"message":{"content":42}}]}"#,
        ] {
            let err = ChatCompletionClient::extract_content(body).unwrap_err();
            assert!(err.is_response_parse_error(), "{body}: {err}");
        }
    }

    #[test]
    fn extract_content_rejects_invalid_json() {
        let err = ChatCompletionClient::extract_content("<html>oops</html>").unwrap_err();
        assert!(err.is_response_parse_error());
    }

    #[test]
    fn provider_error_message_prefers_structured_fields() {
        assert_eq!(
            ChatCompletionClient::provider_error_message(r#"{"error":{"message":"bad key"}}"#),
            Some("bad key".to_string())
        );
        assert_eq!(
            ChatCompletionClient::provider_error_message(r#"{"message":"quota","code":"429"}"#),
            Some("quota".to_string())
        );
        assert_eq!(
            ChatCompletionClient::provider_error_message("Bad Gateway"),
            Some("Bad Gateway".to_string())
        );
        assert_eq!(ChatCompletionClient::provider_error_message("  "), None);
    }

    #[test]
    fn require_credentials_reports_missing_key() {
        let err = client("https://api.cerebras.ai", "").require_credentials().unwrap_err();
        assert!(err.is_configuration_error());
        assert!(client("https://api.cerebras.ai", "csk-1").require_credentials().is_ok());
    }

    #[tokio::test]
    async fn empty_prompt_is_rejected_before_sending() {
        // Unroutable port: a request attempt would surface as a provider error.
        let err = client("http://127.0.0.1:9", "k").complete("").await.unwrap_err();
        assert!(err.is_invalid_input());
    }
}
