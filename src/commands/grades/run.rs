use super::ui;
use crate::badges::BadgeEngine;
use crate::commands::unlocked_suffix;
use crate::database::store::KeyValueStore;
use crate::error::{Error, Result};
use crate::services::tracking;
use crate::wellbeing::grades::{GradeBook, NewGrade};

const USAGE: &str = "Usage: grade add <subject> <grade> <credits> [semester] | grade edit <id> ... | grade rm <id> | grade list";

fn parse_new_grade(args: &[&str]) -> Result<NewGrade> {
    let [subject, grade, credits, semester @ ..] = args else {
        return Err(Error::InvalidGrade("expected <subject> <grade> <credits> [semester]".into()));
    };
    // Accept the German decimal comma too.
    let grade: f64 = grade
        .replace(',', ".")
        .parse()
        .map_err(|_| Error::InvalidGrade(format!("`{grade}` is not a number")))?;
    let credits: u32 = credits
        .parse()
        .map_err(|_| Error::InvalidGrade(format!("`{credits}` is not a credit count")))?;
    Ok(NewGrade {
        subject: subject.to_string(),
        grade,
        credits,
        semester: (!semester.is_empty()).then(|| semester.join(" ")),
    })
}

fn parse_id(raw: &str) -> Result<u32> {
    raw.parse()
        .map_err(|_| Error::InvalidGrade(format!("`{raw}` is not a grade id")))
}

pub fn run<S: KeyValueStore>(engine: &mut BadgeEngine<S>, args: &[&str]) -> Result<String> {
    let mut book = GradeBook::load(engine.store());
    match args {
        [] | ["list"] => Ok(ui::grade_table(&book)),
        ["add", rest @ ..] => {
            let saved = ui::saved(book.add(parse_new_grade(rest)?)?);
            book.save(engine.store_mut());
            let unlocked = tracking::track_grade_entry(engine)?;
            Ok(format!("{saved}{}", unlocked_suffix(&unlocked)))
        }
        ["edit", id, rest @ ..] => {
            let id = parse_id(id)?;
            if !book.update(id, parse_new_grade(rest)?)? {
                return Ok(format!("Keine Note mit #{id}."));
            }
            book.save(engine.store_mut());
            Ok(format!("Note #{id} aktualisiert."))
        }
        ["rm", id] => {
            let id = parse_id(id)?;
            if book.remove(id) {
                book.save(engine.store_mut());
                Ok(format!("Note #{id} gelöscht."))
            } else {
                Ok(format!("Keine Note mit #{id}."))
            }
        }
        _ => Ok(USAGE.to_string()),
    }
}
