//! Categorized help listing and per-command detail view.

#[derive(Clone, Copy, PartialEq, Eq)]
enum CommandCategory {
    Daily,
    Study,
    Progress,
}

impl CommandCategory {
    fn name(&self) -> &'static str {
        match self {
            Self::Daily => "Daily check-in",
            Self::Study => "Study planner",
            Self::Progress => "Badges & level",
        }
    }
    fn emoji(&self) -> &'static str {
        match self {
            Self::Daily => "🌤️",
            Self::Study => "🎓",
            Self::Progress => "🏆",
        }
    }
}

struct CommandInfo {
    name: &'static str,
    description: &'static str,
    usage: &'static [&'static str],
    details: &'static str,
    category: CommandCategory,
}

const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "login",
        description: "Start today's session.",
        usage: &["login"],
        details: "Counts the first visit and the daily login streak. Logging in before 7:00 earns the early bird badge.",
        category: CommandCategory::Daily,
    },
    CommandInfo {
        name: "mood",
        description: "Record how you feel today.",
        usage: &["mood <bad|unwell|neutral|good|great> [YYYY-MM-DD]", "mood month [year month]"],
        details: "One entry per day; recording again replaces the day's mood. Future days are rejected.",
        category: CommandCategory::Daily,
    },
    CommandInfo {
        name: "exercise",
        description: "Log a finished coping exercise with Hugo.",
        usage: &["exercise [einsamkeit|angst|stress|ueberforderung]"],
        details: "Counts exercises and the distinct categories you have practised.",
        category: CommandCategory::Daily,
    },
    CommandInfo {
        name: "post",
        description: "Count a forum post.",
        usage: &["post"],
        details: "Every call counts one new post.",
        category: CommandCategory::Daily,
    },
    CommandInfo {
        name: "read",
        description: "Mark an article as read.",
        usage: &["read <article-id>"],
        details: "Only distinct articles count; reading one twice changes nothing.",
        category: CommandCategory::Daily,
    },
    CommandInfo {
        name: "grade",
        description: "Manage the grade planner.",
        usage: &[
            "grade add <subject> <grade> <credits> [semester]",
            "grade edit <id> <subject> <grade> <credits> [semester]",
            "grade rm <id>",
            "grade list",
        ],
        details: "Grades range from 1.0 to 5.0; the average is weighted by ECTS credits. Subjects are single words.",
        category: CommandCategory::Study,
    },
    CommandInfo {
        name: "calendar",
        description: "Show a month with its entries.",
        usage: &["calendar [year month]"],
        details: "Monday-first grid; days with an event or mood are marked.",
        category: CommandCategory::Study,
    },
    CommandInfo {
        name: "event",
        description: "Put an event into the calendar.",
        usage: &["event <YYYY-MM-DD> <text...>"],
        details: "Stores the text as the day's event.",
        category: CommandCategory::Study,
    },
    CommandInfo {
        name: "profile",
        description: "Show or edit your profile.",
        usage: &["profile", "profile set <field> <value...>"],
        details: "Fields: username, hochschule, studiengang, interessen, gluecklich, image, bio. A complete profile earns a badge.",
        category: CommandCategory::Progress,
    },
    CommandInfo {
        name: "badges",
        description: "List all badges with progress.",
        usage: &["badges", "b"],
        details: "Unlocked badges are checked; progress badges show how far along you are.",
        category: CommandCategory::Progress,
    },
    CommandInfo {
        name: "level",
        description: "Show your level and EXP.",
        usage: &["level", "lvl"],
        details: "Level 2 needs 100 EXP; every further level needs 1.5x the previous one.",
        category: CommandCategory::Progress,
    },
    CommandInfo {
        name: "notifications",
        description: "Show unseen badge notifications.",
        usage: &["notifications", "n"],
        details: "Each notification is shown once.",
        category: CommandCategory::Progress,
    },
    CommandInfo {
        name: "help",
        description: "Shows this help menu.",
        usage: &["help", "help <command>"],
        details: "Lists all commands or shows the details of one.",
        category: CommandCategory::Progress,
    },
];

/// All primary command names; used by tests to keep help and dispatch in sync.
pub fn all_command_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|c| c.name).collect()
}

fn get_commands_in_category(category: CommandCategory) -> String {
    COMMANDS
        .iter()
        .filter(|c| c.category == category)
        .map(|c| format!("`{}`", c.name))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn run(args: &[&str]) -> String {
    match args.first() {
        Some(name) => match COMMANDS.iter().find(|c| c.name == *name) {
            Some(cmd) => {
                let usage = cmd
                    .usage
                    .iter()
                    .map(|u| format!("  {u}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!(
                    "{} {}: {}\nUsage:\n{}\n{}",
                    cmd.category.emoji(),
                    cmd.name,
                    cmd.description,
                    usage,
                    cmd.details
                )
            }
            None => format!("Sorry, I don't know a command called `{name}`."),
        },
        None => {
            let mut out = String::from("Available commands (use `help <command>` for details):");
            for category in [
                CommandCategory::Daily,
                CommandCategory::Study,
                CommandCategory::Progress,
            ] {
                let list = get_commands_in_category(category);
                if !list.is_empty() {
                    out.push_str(&format!("\n{} {}: {}", category.emoji(), category.name(), list));
                }
            }
            out
        }
    }
}
