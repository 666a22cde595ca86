use crate::ui::style::EMOJI_CALENDAR;
use crate::wellbeing::calendar::month_grid;

const WEEKDAYS: [&str; 7] = ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"];

/// Monday-first month grid. Days listed in `marked` get a `*`.
pub fn month_view(year: i32, month: u32, marked: &[u32]) -> Option<String> {
    let cells = month_grid(year, month)?;
    let mut out = format!("{EMOJI_CALENDAR} {month:02}/{year}\n{}", WEEKDAYS.map(|d| format!("{d:>3}")).concat());
    for week in cells.chunks(7) {
        out.push('\n');
        for cell in week {
            match cell {
                Some(day) if marked.contains(day) => out.push_str(&format!("{day:>2}*")),
                Some(day) => out.push_str(&format!("{day:>3}")),
                None => out.push_str("   "),
            }
        }
    }
    Some(out)
}
