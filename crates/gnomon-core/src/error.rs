use thiserror::Error;

/// Errors the core layer produces: bad configuration values and
/// unparseable caller input (month strings, view-mode names).
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
