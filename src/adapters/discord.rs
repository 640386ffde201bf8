use crate::domain::model::ApplicationCommand;
use crate::domain::ports::CommandRegistry;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;

pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

/// Minimal Discord REST client, bot-token authenticated.
#[derive(Clone)]
pub struct DiscordClient {
    http: reqwest::Client,
    api_base: String,
    application_id: String,
    token: String,
}

impl DiscordClient {
    pub fn new(api_base: &str, application_id: &str, token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            application_id: application_id.to_string(),
            token: token.to_string(),
        }
    }

    pub fn commands_url(&self) -> String {
        format!(
            "{}/applications/{}/commands",
            self.api_base, self.application_id
        )
    }
}

#[async_trait]
impl CommandRegistry for DiscordClient {
    async fn overwrite_commands(
        &self,
        commands: &[ApplicationCommand],
    ) -> Result<serde_json::Value> {
        let url = self.commands_url();
        tracing::info!("📡 PUT {} ({} commands)", url, commands.len());

        let response = self
            .http
            .put(&url)
            .header(AUTHORIZATION, format!("Bot {}", self.token))
            .json(commands)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::RegistrationFailed {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
