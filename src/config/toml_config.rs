use crate::core::format::FormatStyle;
use crate::utils::error::{AppError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional `bot.toml` file. Every value may also come from the CLI or
/// environment, which take precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub discord: DiscordSection,
    #[serde(default)]
    pub server: ServerSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscordSection {
    pub application_id: Option<String>,
    pub public_key: Option<String>,
    pub token: Option<String>,
    pub api_base: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub bind: Option<String>,
    pub format: Option<FormatStyle>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DISCORD_TOKEN})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AppError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[discord]
application_id = "123456789"
public_key = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"
token = "secret"

[server]
bind = "127.0.0.1:9000"
format = "table"
"#,
        )
        .unwrap();

        assert_eq!(config.discord.application_id.as_deref(), Some("123456789"));
        assert_eq!(config.server.format, Some(FormatStyle::Table));
        assert_eq!(config.server.bind.as_deref(), Some("127.0.0.1:9000"));
    }

    #[test]
    fn test_sections_are_optional() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.discord.public_key.is_none());
        assert!(config.server.bind.is_none());
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("ROLL_BOT_TEST_TOKEN", "from-env");
        let config = TomlConfig::from_toml_str(
            r#"
[discord]
token = "${ROLL_BOT_TEST_TOKEN}"
api_base = "${ROLL_BOT_UNSET_VARIABLE}"
"#,
        )
        .unwrap();

        assert_eq!(config.discord.token.as_deref(), Some("from-env"));
        assert_eq!(
            config.discord.api_base.as_deref(),
            Some("${ROLL_BOT_UNSET_VARIABLE}")
        );
    }

    #[test]
    fn test_unknown_format_is_a_parse_error() {
        let result = TomlConfig::from_toml_str("[server]\nformat = \"fancy\"\n");
        assert!(matches!(result, Err(AppError::ConfigError { .. })));
    }
}
