// Library entry so integration tests and external tools can reference internal modules.
// Re-export the same modules used by the binary (`main.rs`).
pub mod badges;
pub mod commands;
pub mod config;
pub mod constants;
pub mod database;
pub mod error;
pub mod handler;
pub mod model;
pub mod services;
pub mod ui;
pub mod wellbeing;

pub use config::Config;
pub use error::{Error, Result};
pub use model::AppState;
