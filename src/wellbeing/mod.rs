//! Feature models the trackers are fed by: mood journal, coping categories,
//! grade planner, calendar and profile.

pub mod calendar;
pub mod coping;
pub mod grades;
pub mod mood;
pub mod profile;
