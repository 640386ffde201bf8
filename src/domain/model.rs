use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const MIN_DICE: u32 = 1;
pub const MAX_DICE: u32 = 100;
pub const MIN_SIDES: u32 = 2;
pub const MAX_SIDES: u32 = 1000;

/// A validated dice request. Only the notation parser builds one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollSpec {
    count: u32,
    sides: u32,
    modifier: i64,
}

impl RollSpec {
    pub(crate) fn new_unchecked(count: u32, sides: u32, modifier: i64) -> Self {
        Self {
            count,
            sides,
            modifier,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn modifier(&self) -> i64 {
        self.modifier
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome {
    rolls: Vec<u32>,
    modifier: i64,
    total: i64,
    notation: String,
}

impl RollOutcome {
    pub(crate) fn new(rolls: Vec<u32>, modifier: i64, notation: String) -> Self {
        let total = rolls.iter().map(|&r| i64::from(r)).sum::<i64>() + modifier;
        Self {
            rolls,
            modifier,
            total,
            notation,
        }
    }

    pub fn rolls(&self) -> &[u32] {
        &self.rolls
    }

    pub fn modifier(&self) -> i64 {
        self.modifier
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn notation(&self) -> &str {
        &self.notation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionType {
    Ping,
    ApplicationCommand,
    Other(u8),
}

impl From<u8> for InteractionType {
    fn from(value: u8) -> Self {
        match value {
            1 => InteractionType::Ping,
            2 => InteractionType::ApplicationCommand,
            other => InteractionType::Other(other),
        }
    }
}

impl<'de> Deserialize<'de> for InteractionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u8::deserialize(deserializer).map(InteractionType::from)
    }
}

/// Inbound webhook payload. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub kind: InteractionType,
    #[serde(default)]
    pub data: Option<CommandData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandData {
    pub name: String,
    #[serde(default)]
    pub options: Vec<CommandOption>,
}

impl CommandData {
    /// 依名稱找出字串型別的選項值
    pub fn string_option(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|opt| opt.name == name)
            .and_then(|opt| opt.value.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandOption {
    pub name: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionResponseType {
    Pong,
    ChannelMessageWithSource,
}

impl Serialize for InteractionResponseType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let code: u8 = match self {
            InteractionResponseType::Pong => 1,
            InteractionResponseType::ChannelMessageWithSource => 4,
        };
        serializer.serialize_u8(code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: InteractionResponseType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MessageData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    pub content: String,
}

impl InteractionResponse {
    pub fn pong() -> Self {
        Self {
            kind: InteractionResponseType::Pong,
            data: None,
        }
    }

    pub fn message(content: impl Into<String>) -> Self {
        Self {
            kind: InteractionResponseType::ChannelMessageWithSource,
            data: Some(MessageData {
                content: content.into(),
            }),
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.content.as_str())
    }
}

/// Slash command definition sent to the registration endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationCommand {
    pub name: String,
    pub description: String,
    pub options: Vec<ApplicationCommandOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationCommandOption {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: u8,
    pub required: bool,
}

pub const OPTION_TYPE_STRING: u8 = 3;
