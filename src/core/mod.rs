pub mod commands;
pub mod format;
pub mod interaction;
pub mod notation;
pub mod roller;

pub use crate::domain::model::{Interaction, InteractionResponse, RollOutcome, RollSpec};
pub use crate::domain::ports::{CommandRegistry, ConfigProvider};
pub use crate::utils::error::Result;
