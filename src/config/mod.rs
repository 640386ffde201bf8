pub mod register;
pub mod toml_config;

use crate::core::format::FormatStyle;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use toml_config::TomlConfig;

pub const DEFAULT_BIND: &str = "0.0.0.0:8787";

#[derive(Debug, Clone, Parser)]
#[command(name = "roll-bot")]
#[command(about = "Discord dice rolling bot served over the interactions webhook")]
pub struct ServeConfig {
    /// Address to listen on
    #[arg(long, env = "BIND_ADDR")]
    pub bind: Option<String>,

    /// Hex-encoded Ed25519 public key of the Discord application
    #[arg(long, env = "DISCORD_PUBLIC_KEY")]
    pub public_key: Option<String>,

    /// Discord application id (only logged, used for registration)
    #[arg(long, env = "DISCORD_APPLICATION_ID")]
    pub application_id: Option<String>,

    /// How roll results are rendered
    #[arg(long, env = "ROLL_FORMAT", value_enum)]
    pub format: Option<FormatStyle>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

/// Fully resolved settings for the webhook server.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub bind: String,
    pub public_key: String,
    pub application_id: Option<String>,
    pub format: FormatStyle,
}

impl ServeConfig {
    /// CLI / 環境變數優先，其次是 TOML 檔案，最後是預設值。
    /// 只驗證合併後的結果，檔案裡沒展開的 `${VAR}` 可以被 CLI 蓋掉
    pub fn resolve(&self) -> Result<BotConfig> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        self.merge(file)
    }

    pub fn merge(&self, file: TomlConfig) -> Result<BotConfig> {
        let public_key = self.public_key.clone().or(file.discord.public_key);
        let public_key = validation::validate_required_field("DISCORD_PUBLIC_KEY", &public_key)?;

        let config = BotConfig {
            bind: self
                .bind
                .clone()
                .or(file.server.bind)
                .unwrap_or_else(|| DEFAULT_BIND.to_string()),
            public_key: public_key.clone(),
            application_id: self.application_id.clone().or(file.discord.application_id),
            format: self.format.or(file.server.format).unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}

impl BotConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        validation::validate_socket_addr("bind", &self.bind)
    }
}

impl ConfigProvider for BotConfig {
    fn public_key(&self) -> &str {
        &self.public_key
    }

    fn format_style(&self) -> FormatStyle {
        self.format
    }
}

impl Validate for BotConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_socket_addr("bind", &self.bind)?;
        validation::validate_hex_key("public_key", &self.public_key, 32)?;
        if let Some(id) = &self.application_id {
            validation::validate_snowflake("application_id", id)?;
        }

        tracing::debug!("✅ Server configuration validation passed");
        Ok(())
    }
}
