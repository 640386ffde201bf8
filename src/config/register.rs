use crate::adapters::discord::{DiscordClient, DEFAULT_API_BASE};
use crate::config::toml_config::TomlConfig;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Clone, Parser)]
#[command(name = "register_commands")]
#[command(about = "Register the /roll slash command with Discord")]
pub struct RegisterConfig {
    #[arg(long, env = "DISCORD_APPLICATION_ID")]
    pub application_id: Option<String>,

    /// Bot token, sent as `Authorization: Bot <token>`
    #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[arg(long, env = "DISCORD_API_BASE")]
    pub api_base: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the command payload without calling Discord
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Credentials resolved from CLI, environment and TOML.
pub struct RegisterSettings {
    pub application_id: String,
    pub token: String,
    pub api_base: String,
}

impl RegisterConfig {
    pub fn resolve(&self) -> Result<RegisterSettings> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        self.merge(file)
    }

    pub fn merge(&self, file: TomlConfig) -> Result<RegisterSettings> {
        let application_id = self.application_id.clone().or(file.discord.application_id);
        let token = self.token.clone().or(file.discord.token);

        let (Some(application_id), Some(token)) = (application_id.clone(), token.clone()) else {
            let status = |set: bool| if set { "set" } else { "missing" };
            return Err(AppError::ConfigError {
                message: format!(
                    "Missing environment variables: DISCORD_APPLICATION_ID: {}, DISCORD_TOKEN: {}",
                    status(application_id.is_some()),
                    status(token.is_some())
                ),
            });
        };

        let settings = RegisterSettings {
            application_id,
            token,
            api_base: self
                .api_base
                .clone()
                .or(file.discord.api_base)
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl RegisterSettings {
    pub fn client(&self) -> DiscordClient {
        DiscordClient::new(&self.api_base, &self.application_id, &self.token)
    }
}

impl Validate for RegisterSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_snowflake("DISCORD_APPLICATION_ID", &self.application_id)?;
        validation::validate_non_empty_string("DISCORD_TOKEN", &self.token)?;
        validation::validate_url("api_base", &self.api_base)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> RegisterConfig {
        RegisterConfig {
            application_id: None,
            token: None,
            api_base: None,
            config: None,
            dry_run: false,
            verbose: false,
        }
    }

    #[test]
    fn test_missing_credentials_lists_each_variable() {
        let mut config = args();
        config.application_id = Some("42".to_string());

        let err = config.merge(TomlConfig::default()).err().unwrap();
        let message = err.to_string();
        assert!(message.contains("DISCORD_APPLICATION_ID: set"));
        assert!(message.contains("DISCORD_TOKEN: missing"));
    }

    #[test]
    fn test_file_supplies_token_and_default_api_base() {
        let mut config = args();
        config.application_id = Some("42".to_string());
        let mut file = TomlConfig::default();
        file.discord.token = Some("file-token".to_string());

        let settings = config.merge(file).unwrap();
        assert_eq!(settings.token, "file-token");
        assert_eq!(settings.api_base, DEFAULT_API_BASE);
        assert_eq!(
            settings.client().commands_url(),
            "https://discord.com/api/v10/applications/42/commands"
        );
    }

    #[test]
    fn test_non_numeric_application_id_is_rejected() {
        let mut config = args();
        config.application_id = Some("my-app".to_string());
        config.token = Some("t".to_string());
        assert!(config.merge(TomlConfig::default()).is_err());
    }
}
