use anyhow::Result;

use super::super::Container;

pub struct CheckController<'a> {
    container: &'a Container,
}

impl<'a> CheckController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Report the resolved provider settings. The API key is never printed.
    pub async fn check(&self) -> Result<String> {
        let config = self.container.provider_config();

        let credentials = match self.container.require_credentials() {
            Ok(()) if self.container.mock_provider() => "not needed (mock provider)".to_string(),
            Ok(()) => "present".to_string(),
            Err(e) => format!("missing ({e})"),
        };

        Ok(format!(
            "Provider Configuration\n======================\nEndpoint:    {}\nModel:       {}\nTemperature: {}\nMax Tokens:  {}\nCredentials: {}",
            self.container.endpoint(),
            self.container.chat_client().model_name(),
            config.temperature(),
            config.max_tokens(),
            credentials
        ))
    }
}
