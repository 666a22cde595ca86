//! Implements `badges`, `level` and `notifications`: the views over the badge engine.

pub mod run;
pub mod ui;
