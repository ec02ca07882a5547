use thiserror::Error;

/// Errors an upstream fetch can produce: the request failed in flight,
/// the body was not the expected envelope, or a decorated source
/// declined to serve.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Source unavailable: {0}")]
    Unavailable(String),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
