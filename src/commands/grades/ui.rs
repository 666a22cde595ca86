use crate::ui::style::EMOJI_GRAD;
use crate::wellbeing::grades::{Grade, GradeBook, weighted_average};
use crate::wellbeing::mood::Mood;

fn grade_line(g: &Grade) -> String {
    format!(
        "  #{} {} {:.1} ({} ECTS) {}",
        g.id,
        g.subject,
        g.grade,
        g.credits,
        Mood::for_grade(g.grade).emoji()
    )
}

fn average_text(avg: Option<f64>) -> String {
    avg.map_or_else(|| "-".to_string(), |a| format!("{a:.2}"))
}

pub fn grade_table(book: &GradeBook) -> String {
    if book.is_empty() {
        return "Noch keine Noten eingetragen. `grade add <subject> <grade> <credits>`".to_string();
    }
    let mut out = format!(
        "{EMOJI_GRAD} Durchschnitt: {} | {} ECTS",
        average_text(book.average()),
        book.total_credits()
    );
    for (semester, grades) in book.by_semester() {
        out.push_str(&format!("\n{semester} (Ø {})", average_text(weighted_average(&grades))));
        for g in &grades {
            out.push('\n');
            out.push_str(&grade_line(g));
        }
    }
    out
}

pub fn saved(g: &Grade) -> String {
    format!("Gespeichert: {}", grade_line(g).trim_start())
}
