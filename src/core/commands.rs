use crate::core::interaction::{DICE_OPTION, ROLL_COMMAND};
use crate::domain::model::{ApplicationCommand, ApplicationCommandOption, OPTION_TYPE_STRING};

/// The `/roll` slash command as registered with Discord.
pub fn roll_command() -> ApplicationCommand {
    ApplicationCommand {
        name: ROLL_COMMAND.to_string(),
        description: "Roll dice using standard notation (e.g., 2d6+2)".to_string(),
        options: vec![ApplicationCommandOption {
            name: DICE_OPTION.to_string(),
            description: "Dice notation (e.g., 2d6, 1d20+5, 3d8-2)".to_string(),
            kind: OPTION_TYPE_STRING,
            required: true,
        }],
    }
}

pub fn all_commands() -> Vec<ApplicationCommand> {
    vec![roll_command()]
}
