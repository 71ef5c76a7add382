use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Remote service returned {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(#[from] eyre::Report),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type TextResult<T> = Result<T, TextError>;
