//! Text rendering helpers.
pub mod style;
