use anyhow::Result;

use super::super::Container;

pub struct ItineraryController<'a> {
    container: &'a Container,
}

impl<'a> ItineraryController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// With `dry_run`, print the prompt instead of sending it.
    pub async fn itinerary(&self, destination: String, days: u32, dry_run: bool) -> Result<String> {
        let use_case = self.container.itinerary_use_case();

        if dry_run {
            return Ok(use_case.prompt_for(&destination, days)?);
        }

        Ok(use_case.get_itinerary(&destination, days).await?)
    }
}
