//! Text rendering for the badge overview, the level card and toasts.

use crate::badges::{BadgeNotification, BadgeStatus, LevelDescriptor};
use crate::ui::style::{
    BAR_WIDTH, EMOJI_CHECK, EMOJI_LOCK, EMOJI_PARTY, EMOJI_TROPHY, progress_bar, stat_pair,
};

pub fn level_card(exp: u32, level: &LevelDescriptor) -> String {
    format!(
        "Level {} ({} EXP gesammelt)\nFortschritt zu Level {}: {} {} EXP",
        level.level,
        exp,
        level.level + 1,
        progress_bar(level.current_exp, level.next_level_exp, BAR_WIDTH),
        stat_pair(level.current_exp, level.next_level_exp),
    )
}

fn badge_line(status: &BadgeStatus) -> String {
    let badge = status.badge;
    let mark = if status.unlocked { EMOJI_CHECK } else { EMOJI_LOCK };
    let mut line = format!("{mark} {} (+{} EXP) - {}", badge.name, badge.exp_reward, badge.description);
    if let Some(max) = badge.max_progress
        && !status.unlocked
    {
        let shown = status.progress.min(max);
        line.push_str(&format!(
            " {} {}",
            progress_bar(u64::from(shown), u64::from(max), BAR_WIDTH),
            stat_pair(shown, max)
        ));
    }
    line
}

pub fn badge_overview(exp: u32, level: &LevelDescriptor, badges: &[BadgeStatus]) -> String {
    let unlocked = badges.iter().filter(|b| b.unlocked).count();
    let mut out = format!(
        "{}\n{EMOJI_TROPHY} Deine Badges: {}",
        level_card(exp, level),
        stat_pair(unlocked, badges.len())
    );
    for status in badges {
        out.push('\n');
        out.push_str(&badge_line(status));
    }
    out
}

/// The toast shown for one unlock.
pub fn toast(notification: &BadgeNotification) -> String {
    format!(
        "{EMOJI_PARTY} Badge freigeschaltet! {} (+{} EXP)",
        notification.badge_name, notification.exp_reward
    )
}
