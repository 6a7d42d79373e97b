mod chat_completion_client;
mod mock_chat_client;

pub use chat_completion_client::*;
pub use mock_chat_client::*;
