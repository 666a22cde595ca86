//! Implements `grade`: the grade planner with its credit-weighted average.

pub mod run;
pub mod ui;
