//! CLI argument parsing and text/JSON rendering for the gnomon binary.

pub mod cli;
pub mod render;
