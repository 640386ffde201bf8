use crate::core::format::{format_result, FormatStyle};
use crate::core::notation::parse_dice_notation;
use crate::core::roller::roll_dice;
use crate::domain::model::{Interaction, InteractionResponse, InteractionType};

pub const ROLL_COMMAND: &str = "roll";
pub const DICE_OPTION: &str = "dice";
pub const DEFAULT_DICE: &str = "1d20";
pub const UNKNOWN_COMMAND: &str = "Unknown command";

/// Turn a verified interaction into the reply Discord should post.
///
/// Never fails: bad notation and unknown commands become chat messages.
pub fn handle_interaction(interaction: &Interaction, style: FormatStyle) -> InteractionResponse {
    match (interaction.kind, &interaction.data) {
        (InteractionType::Ping, _) => {
            tracing::debug!("🏓 PING received");
            InteractionResponse::pong()
        }
        (InteractionType::ApplicationCommand, Some(data)) if data.name == ROLL_COMMAND => {
            let notation = data.string_option(DICE_OPTION).unwrap_or(DEFAULT_DICE);
            roll_command(notation, style)
        }
        (kind, data) => {
            tracing::info!(
                ?kind,
                command = data.as_ref().map(|d| d.name.as_str()),
                "❓ Unhandled interaction"
            );
            InteractionResponse::message(UNKNOWN_COMMAND)
        }
    }
}

fn roll_command(notation: &str, style: FormatStyle) -> InteractionResponse {
    match parse_dice_notation(notation) {
        Some(spec) => {
            let outcome = roll_dice(&spec);
            tracing::info!(
                notation = outcome.notation(),
                total = outcome.total(),
                "🎲 Rolled"
            );
            InteractionResponse::message(format_result(&outcome, style))
        }
        None => {
            tracing::info!(input = notation, "⚠️ Rejected dice notation");
            InteractionResponse::message(invalid_notation_message(notation))
        }
    }
}

pub fn invalid_notation_message(input: &str) -> String {
    format!(
        "Invalid dice notation: `{}`. Use format like `2d6`, `1d20+5`, or `3d8-2`.",
        input
    )
}
