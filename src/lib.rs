pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::discord::DiscordClient;
pub use adapters::http::{create_router, AppState};
pub use adapters::signature::SignatureVerifier;
pub use config::{BotConfig, ServeConfig};
pub use core::format::FormatStyle;
pub use utils::error::{AppError, Result};
