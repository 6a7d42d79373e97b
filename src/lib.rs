pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use cli::Commands;

pub use application::{ChatClient, ItineraryPromptBuilder, SendMessageUseCase};

pub use connector::{
    ChatCompletionClient, Container, ContainerConfig, HttpServer, MockChatClient, Router,
};

pub use domain::{
    ChatMessage, ChatRequest, DomainError, ItineraryRequest, ProviderConfig, Role,
    CHAT_COMPLETIONS_PATH, DEFAULT_BASE_URL, DEFAULT_MODEL,
};
