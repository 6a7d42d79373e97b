use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://api.cerebras.ai";
pub const DEFAULT_MODEL: &str = "llama3.1-8b";
pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 2000;

/// Path appended to the base URL by the client. Never part of the configured URL.
pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

const API_KEY_VAR: &str = "CEREBRAS_API_KEY";
const BASE_URL_VAR: &str = "CEREBRAS_BASE_URL";
const MODEL_VAR: &str = "CEREBRAS_MODEL";

/// Immutable provider settings, resolved once at start-up and handed to the
/// chat client's constructor.
///
/// `temperature` and `max_tokens` are fixed; only the key, base URL and model
/// can be configured.
///
/// | Variable            | Default                   |
/// |---------------------|---------------------------|
/// | `CEREBRAS_API_KEY`  | `""` (empty)              |
/// | `CEREBRAS_BASE_URL` | `https://api.cerebras.ai` |
/// | `CEREBRAS_MODEL`    | `llama3.1-8b`             |
#[derive(Clone, PartialEq)]
pub struct ProviderConfig {
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl ProviderConfig {
    /// The base URL is stored normalized: one trailing `/` is stripped.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            api_key: api_key.into(),
            base_url: normalize_base_url(&base_url).to_string(),
            model: model.into(),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }

    /// Read `CEREBRAS_*` variables, falling back to the defaults above.
    pub fn from_env() -> Self {
        let key = std::env::var(API_KEY_VAR).unwrap_or_default();
        let base = std::env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var(MODEL_VAR).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(key, base, model)
    }

    pub fn with_api_key(self, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..self
        }
    }

    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: normalize_base_url(&base_url).to_string(),
            ..self
        }
    }

    pub fn with_model(self, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..self
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn has_credentials(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Full chat-completions URL. The suffix is appended here and nowhere else.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new("", DEFAULT_BASE_URL, DEFAULT_MODEL)
    }
}

// Never print the key itself.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("has_credentials", &self.has_credentials())
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

/// Strip exactly one trailing `/`.
pub fn normalize_base_url(base_url: &str) -> &str {
    base_url.strip_suffix('/').unwrap_or(base_url)
}
