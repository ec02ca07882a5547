//! gnomon calendar engine - integration test support.
//!
//! This crate re-exports the workspace crates to support integration tests
//! that use `gnomon_test::` paths.

pub mod calendar {
    pub use gnomon_calendar::*;
}

pub mod client {
    pub use gnomon_client::*;
}

pub mod service {
    pub use gnomon_service::*;
}

pub mod app {
    pub use gnomon_app::*;
}

pub mod config {
    pub use gnomon_core::config::*;
}

pub mod error {
    pub use gnomon_client::error::*;
    pub use gnomon_core::error::*;
    pub use gnomon_service::error::*;
}

pub mod constants {
    pub use gnomon_core::constants::*;
}
