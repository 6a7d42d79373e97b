mod itinerary_prompt_builder;
mod send_message;

pub use itinerary_prompt_builder::*;
pub use send_message::*;
