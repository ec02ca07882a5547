use thiserror::Error;

/// Errors the planner layer produces. Source failures never surface
/// here: the load cycle degrades them to zero events (see
/// [`crate::planner`]), so construction-time configuration problems are
/// the only fallible path.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
