use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Signature verification failed: {message}")]
    SignatureError { message: String },

    #[error("Invalid dice notation: {input}")]
    InvalidNotation { input: String },

    #[error("Command registration failed with status {status}: {body}")]
    RegistrationFailed { status: u16, body: String },
}

impl AppError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::ApiError(_) => "Could not reach the Discord API".to_string(),
            AppError::IoError(e) => format!("File access failed: {}", e),
            AppError::SerializationError(_) => "Received malformed JSON".to_string(),
            AppError::ConfigError { message } => format!("Configuration problem: {}", message),
            AppError::MissingConfigError { field } => format!("{} is not set", field),
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("{} is invalid: {}", field, reason)
            }
            AppError::SignatureError { .. } => "Request signature is not valid".to_string(),
            AppError::InvalidNotation { input } => format!("`{}` is not valid dice notation", input),
            AppError::RegistrationFailed { status, .. } => {
                format!("Discord rejected the command registration (HTTP {})", status)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::ApiError(_) => "Check network connectivity and the api_base setting",
            AppError::IoError(_) => "Make sure the file exists and is readable",
            AppError::SerializationError(_) => "Check the payload or config file syntax",
            AppError::ConfigError { .. }
            | AppError::MissingConfigError { .. }
            | AppError::InvalidConfigValueError { .. } => {
                "Set the value via CLI flag, environment variable, .env or the TOML config"
            }
            AppError::SignatureError { .. } => {
                "Copy the public key from the Discord developer portal"
            }
            AppError::InvalidNotation { .. } => "Use format like 2d6, 1d20+5, or 3d8-2",
            AppError::RegistrationFailed { status: 401, .. } => {
                "Check DISCORD_TOKEN, it must be the bot token"
            }
            AppError::RegistrationFailed { .. } => "Check DISCORD_APPLICATION_ID and the payload",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
