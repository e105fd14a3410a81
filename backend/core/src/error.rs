use thiserror::Error;

/// Top-level error type for the Herald command engine.
#[derive(Debug, Error)]
pub enum HeraldError {
    #[error("invalid identity pattern: {0}")]
    InvalidPattern(String),

    #[error("ambiguous command configuration: {0}")]
    AmbiguousConfig(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("channel closed: {0}")]
    ChannelClosed(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
