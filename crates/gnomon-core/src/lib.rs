//! Shared foundation for the gnomon calendar engine: configuration,
//! route constants, and the core error type.

pub mod config;
pub mod constants;
pub mod error;
