//! Central text style constants and helpers shared by command renderers.

pub const EMOJI_TROPHY: &str = "🏆";
pub const EMOJI_PARTY: &str = "🎉";
pub const EMOJI_LOCK: &str = "🔒";
pub const EMOJI_CHECK: &str = "✅";
pub const EMOJI_ALERT: &str = "⚠️";
pub const EMOJI_CALENDAR: &str = "📅";
pub const EMOJI_GRAD: &str = "🎓";

// Width of rendered progress bars, in cells.
pub const BAR_WIDTH: usize = 10;

pub fn stat_pair(current: impl std::fmt::Display, max: impl std::fmt::Display) -> String {
    format!("{current}/{max}")
}

/// Fixed-width bar like `[####------]`; a zero `max` renders as empty.
pub fn progress_bar(current: u64, max: u64, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((current.min(max) as u128 * width as u128) / max as u128) as usize
    };
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn error_line(message: impl std::fmt::Display) -> String {
    format!("{EMOJI_ALERT} {message}")
}
