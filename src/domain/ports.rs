use crate::core::format::FormatStyle;
use crate::domain::model::ApplicationCommand;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn public_key(&self) -> &str;
    fn format_style(&self) -> FormatStyle;
}

#[async_trait]
pub trait CommandRegistry: Send + Sync {
    /// Replace every global command of the application, returning what the
    /// platform echoed back.
    async fn overwrite_commands(
        &self,
        commands: &[ApplicationCommand],
    ) -> Result<serde_json::Value>;
}
