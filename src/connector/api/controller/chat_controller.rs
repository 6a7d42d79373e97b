use anyhow::Result;

use super::super::Container;

pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn chat(&self, message: String) -> Result<String> {
        let use_case = self.container.send_message_use_case();
        Ok(use_case.execute(&message).await?)
    }
}
