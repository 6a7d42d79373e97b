mod chat;
mod itinerary;
mod provider_config;

pub use chat::*;
pub use itinerary::*;
pub use provider_config::*;
