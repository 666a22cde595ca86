//! Implements `calendar` (month view) and `event` (store a day's event).

pub mod run;
pub mod ui;
