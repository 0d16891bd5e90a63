use reqwest::Client;
use scholora_core::model::VoiceCommand;
use serde::Deserialize;

use crate::error::VoiceAssistantError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoiceAssistantConfig {
    pub base_url: String,
}

impl VoiceAssistantConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:5001";
    pub const ENV_BASE_URL: &'static str = "SCHOLORA_VOICE_URL";

    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn endpoint(&self, command: VoiceCommand) -> String {
        let path = match command {
            VoiceCommand::Start => "api/start-voicebot",
            VoiceCommand::Stop => "api/stop-voicebot",
        };
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }
}

impl Default for VoiceAssistantConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

/// Client for the local voice-bot control service.
///
/// Requests carry no body and nothing about them is tracked in the session.
#[derive(Clone)]
pub struct VoiceAssistantClient {
    client: Client,
    config: VoiceAssistantConfig,
}

impl VoiceAssistantClient {
    #[must_use]
    pub fn new(config: VoiceAssistantConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &VoiceAssistantConfig {
        &self.config
    }

    /// POST the command to the voice service.
    ///
    /// # Errors
    ///
    /// Returns `VoiceAssistantError` if the request fails or the service
    /// answers with a non-success status.
    pub async fn send(&self, command: VoiceCommand) -> Result<(), VoiceAssistantError> {
        let url = self.config.endpoint(command);
        let response = self.client.post(url).send().await?;

        if !response.status().is_success() {
            return Err(VoiceAssistantError::HttpStatus(response.status()));
        }

        if let Ok(reply) = response.json::<VoiceReply>().await {
            tracing::debug!(?command, message = %reply.message, "voice assistant replied");
        }
        Ok(())
    }

    /// Fire-and-forget form of [`send`](Self::send): failures are logged only.
    pub async fn trigger(&self, command: VoiceCommand) {
        if let Err(err) = self.send(command).await {
            tracing::warn!(?command, error = %err, "voice assistant trigger failed");
        }
    }
}

#[derive(Debug, Deserialize)]
struct VoiceReply {
    message: String,
}
