// src/commands/mod.rs
// Command families. Each takes the engine plus parsed arguments and returns
// the text to show; the handler does the parsing and notification draining.

pub mod badges;
pub mod calendar;
pub mod community;
pub mod exercise;
pub mod grades;
pub mod help;
pub mod mood;
pub mod profile;
pub mod session;

/// Appended to a command's reply when a tracker unlocked something.
pub(crate) fn unlocked_suffix(unlocked: &[&'static str]) -> String {
    if unlocked.is_empty() {
        String::new()
    } else {
        format!(" ({} new badge{})", unlocked.len(), if unlocked.len() == 1 { "" } else { "s" })
    }
}
