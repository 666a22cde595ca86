//! Maps cumulative EXP onto levels.

use crate::constants::LEVEL_BASE_EXP;

/// Where a given EXP total sits on the level curve. Never stored; always derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelDescriptor {
    pub level: u32,
    /// EXP earned since the current level was reached.
    pub current_exp: u64,
    /// Size of the span between the current level and the next one.
    pub next_level_exp: u64,
}

impl LevelDescriptor {
    /// Fraction of the current span already covered, in `0.0..1.0`.
    pub fn progress_ratio(&self) -> f64 {
        self.current_exp as f64 / self.next_level_exp as f64
    }

    pub fn exp_to_next_level(&self) -> u64 {
        self.next_level_exp - self.current_exp
    }
}

/// The span cost after `span`: `floor(span * 1.5)` without leaving integer arithmetic.
fn next_span(span: u64) -> u64 {
    span.saturating_add(span / 2)
}

/// Computes the level for a cumulative EXP total.
///
/// Level 2 costs 100 EXP; each following level costs 1.5x the previous span,
/// floored. Handles any number of level-ups in one call.
pub fn level_of(total_exp: u64) -> LevelDescriptor {
    let mut level = 1;
    let mut floor = 0_u64;
    let mut span = LEVEL_BASE_EXP;

    while floor.checked_add(span).is_some_and(|next| total_exp >= next) {
        floor += span;
        level += 1;
        span = next_span(span);
    }

    LevelDescriptor {
        level,
        current_exp: total_exp - floor,
        next_level_exp: span,
    }
}

/// Cumulative EXP at which `level` is first reached.
pub fn exp_for_level(level: u32) -> u64 {
    let mut floor = 0_u64;
    let mut span = LEVEL_BASE_EXP;
    for _ in 1..level {
        floor = floor.saturating_add(span);
        span = next_span(span);
    }
    floor
}
