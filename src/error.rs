//! Error type shared by the badge engine, the trackers and the feature models.

use thiserror::Error;

/// Everything the library can refuse to do.
///
/// Malformed stored payloads are not errors: readers fall back to the
/// empty value and log a warning instead of failing the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A tracker or caller referenced a badge id the catalog does not know.
    #[error("unknown badge id `{0}`")]
    UnknownBadge(String),
    /// Two catalog entries share the same id.
    #[error("badge id `{0}` is defined more than once")]
    DuplicateBadge(&'static str),
    /// A catalog entry violates a structural rule (zero reward, zero threshold, ...).
    #[error("badge `{id}` is misconfigured: {reason}")]
    InvalidBadge { id: &'static str, reason: &'static str },
    #[error("invalid grade entry: {0}")]
    InvalidGrade(String),
    #[error("unknown mood `{0}`")]
    UnknownMood(String),
    #[error("unknown coping category `{0}`")]
    UnknownCategory(String),
    #[error("unknown profile field `{0}`")]
    UnknownProfileField(String),
    #[error("invalid date `{0}`")]
    InvalidDate(String),
    #[error("{0} lies in the future")]
    FutureDate(String),
}

pub type Result<T> = std::result::Result<T, Error>;
