pub type RingResult<T> = Result<T, RingError>;

#[derive(thiserror::Error, Debug)]
pub enum RingError {
    #[error("invalid color value '{0}': channels must be integers between 0 and 255")]
    InvalidColorValue(String),

    #[error("LED index must be between 0 and {max}, got {index}")]
    InvalidIndex { index: i64, max: usize },

    #[error("invalid brightness '{0}': must be between 0.0 and 1.0")]
    InvalidBrightness(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("unknown effect: {0}")]
    UnknownEffect(String),

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("device failure: {0}")]
    DeviceFailure(String),

    #[error("config error: {0}")]
    Config(String),
}

impl RingError {
    pub fn device(msg: impl Into<String>) -> Self {
        Self::DeviceFailure(msg.into())
    }

    /// Errors that must end the program instead of just the current command.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::DeviceFailure(_) | Self::Config(_))
    }
}

impl From<std::io::Error> for RingError {
    fn from(err: std::io::Error) -> Self {
        Self::device(err.to_string())
    }
}
