pub mod chat_controller;
pub mod check_controller;
pub mod itinerary_controller;

pub use chat_controller::ChatController;
pub use check_controller::CheckController;
pub use itinerary_controller::ItineraryController;
