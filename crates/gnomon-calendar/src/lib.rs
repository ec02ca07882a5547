//! Pure calendar logic for the gnomon engine.
//!
//! Everything in this crate is a derived, in-memory projection: upstream
//! records come in, a unified event list, a 42-cell month grid, view
//! windows, and span classifications come out. Nothing here performs IO
//! or caches anything between load cycles.

pub mod aggregate;
pub mod color;
pub mod event;
pub mod grid;
pub mod lenient;
pub mod month;
pub mod records;
pub mod resolve;
pub mod span;
pub mod view;
