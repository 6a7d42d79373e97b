use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{ChatController, CheckController, ItineraryController};

pub struct Router<'a> {
    itinerary_controller: ItineraryController<'a>,
    chat_controller: ChatController<'a>,
    check_controller: CheckController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            itinerary_controller: ItineraryController::new(container),
            chat_controller: ChatController::new(container),
            check_controller: CheckController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Itinerary {
                destination,
                days,
                dry_run,
            } => {
                self.itinerary_controller
                    .itinerary(destination, days, dry_run)
                    .await
            }
            Commands::Chat { message } => self.chat_controller.chat(message).await,
            Commands::Check => self.check_controller.check().await,
            Commands::Serve { .. } => {
                anyhow::bail!("serve is not a one-shot command; run it from the binary")
            }
        }
    }
}
