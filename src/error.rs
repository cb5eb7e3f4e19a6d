use thiserror::Error;

/// Errors raised by the checked ruler entry points and by config loading.
#[derive(Error, Debug)]
pub enum RulerError {
    #[error("zoom must be a positive finite number, got {0}")]
    InvalidZoom(f64),

    #[error("invalid ruler config: {message}")]
    InvalidConfig { message: String },

    #[error("failed to parse ruler config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Errors raised by [`History`](crate::history::History) implementations.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T, E = RulerError> = std::result::Result<T, E>;
