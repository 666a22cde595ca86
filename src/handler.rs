use crate::badges::BadgeEngine;
use crate::commands;
use crate::database::store::KeyValueStore;
use crate::ui::style::error_line;
use chrono::NaiveDateTime;
use std::str::FromStr;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Login,
    Mood,
    Exercise,
    Post,
    Read,
    Grade,
    Calendar,
    Event,
    Profile,
    Badges,
    Level,
    Notifications,
    Help,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "login" | "start" => Ok(Command::Login),
            "mood" | "m" => Ok(Command::Mood),
            "exercise" | "hugo" | "ex" => Ok(Command::Exercise),
            "post" => Ok(Command::Post),
            "read" | "r" => Ok(Command::Read),
            "grade" | "grades" | "g" => Ok(Command::Grade),
            "calendar" | "cal" => Ok(Command::Calendar),
            "event" | "e" => Ok(Command::Event),
            "profile" | "p" => Ok(Command::Profile),
            "badges" | "b" => Ok(Command::Badges),
            "level" | "lvl" => Ok(Command::Level),
            "notifications" | "n" => Ok(Command::Notifications),
            "help" | "h" => Ok(Command::Help),
            _ => Ok(Command::Unknown),
        }
    }
}

/// Run one input line against the engine and return the reply to print.
///
/// Command errors are rendered into the reply; the engine is left as the
/// failing command found it, because every operation validates before writing.
pub fn dispatch<S: KeyValueStore>(engine: &mut BadgeEngine<S>, line: &str, now: NaiveDateTime) -> String {
    let mut args = line.split_whitespace();
    let Some(command_str) = args.next() else {
        return String::new();
    };
    let command = Command::from_str(&command_str.to_lowercase()).unwrap_or(Command::Unknown);
    let args_vec: Vec<&str> = args.collect();
    debug!(target = "handler", ?command, args = args_vec.len(), "dispatch");

    let today = now.date();
    let result = match command {
        Command::Login => commands::session::run(engine, now),
        Command::Mood => commands::mood::run(engine, &args_vec, today),
        Command::Exercise => commands::exercise::run(engine, args_vec.first().copied()),
        Command::Post => commands::community::run_post(engine),
        Command::Read => commands::community::run_read(engine, args_vec.first().copied()),
        Command::Grade => commands::grades::run::run(engine, &args_vec),
        Command::Calendar => commands::calendar::run::run_calendar(engine, &args_vec, today),
        Command::Event => commands::calendar::run::run_event(engine, &args_vec),
        Command::Profile => commands::profile::run(engine, &args_vec),
        Command::Badges => Ok(commands::badges::run::run_badges(engine)),
        Command::Level => Ok(commands::badges::run::run_level(engine)),
        Command::Notifications => Ok(commands::badges::run::run_notifications(engine)),
        Command::Help => Ok(commands::help::run(&args_vec)),
        Command::Unknown => Ok(format!("Unknown command `{command_str}`. Try `help`.")),
    };
    result.unwrap_or_else(|e| {
        warn!(target = "handler", ?command, error = %e, "command failed");
        error_line(e)
    })
}
