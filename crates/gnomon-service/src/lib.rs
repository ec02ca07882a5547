//! Orchestration layer: the calendar planner driving loads, navigation,
//! and the derived views.

pub mod error;
pub mod planner;
