use lifecount_core::{InvalidInput, LifeReport, LifeStats, UserSettings};
use serde_json::{json, Value};
use tabled::settings::object::{Columns, Rows};
use tabled::settings::{Alignment, Color, Modify, Style};
use tabled::{Table, Tabled};

use crate::format::{hours, rate, thousands};

pub const SETUP_HINT: &str = "No birth date configured. Run `lifecount setup <YYYY-MM-DD>` first.";

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Section")]
    section: String,
    #[tabled(rename = "")]
    label: String,
    #[tabled(rename = "Remaining")]
    value: String,
}

impl StatRow {
    fn new(section: &str, label: impl Into<String>, value: String) -> Self {
        Self {
            section: section.to_string(),
            label: label.into(),
            value,
        }
    }
}

/// One table row per figure, grouped the way the dashboard groups them.
fn rows(settings: &UserSettings, stats: &LifeStats) -> Vec<StatRow> {
    vec![
        StatRow::new("Time", "Years", thousands(stats.remaining_years)),
        StatRow::new("", "Days", thousands(stats.remaining_days)),
        StatRow::new("", "Weeks", thousands(stats.remaining_weeks)),
        StatRow::new("", "Hours", thousands(stats.remaining_hours)),
        StatRow::new("Experiences", "Springs", thousands(stats.remaining_springs)),
        StatRow::new("", "Full moons", thousands(stats.remaining_full_moons)),
        StatRow::new("", "Sunday nights", thousands(stats.remaining_sundays)),
        StatRow::new("", "Birthdays", thousands(stats.remaining_birthdays)),
        StatRow::new(
            "Breakdown",
            format!("Sleep ({}h/day)", rate(settings.daily_sleep_hours)),
            format!("{} h", hours(stats.sleep_hours)),
        ),
        StatRow::new(
            "",
            format!("Work ({}h/day)", rate(settings.daily_work_hours)),
            format!("{} h", hours(stats.work_hours)),
        ),
        StatRow::new("", "Free time", format!("{} h", hours(stats.free_hours))),
        StatRow::new("If spent on", "Movies (2h each)", thousands(stats.movies_watchable)),
        StatRow::new("", "Books (10h each)", thousands(stats.books_readable)),
    ]
}

pub fn render_table(settings: &UserSettings, stats: &LifeStats) -> String {
    let mut table = Table::new(rows(settings, stats));
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN))
        .with(Modify::new(Columns::last()).with(Alignment::right()));
    table.to_string()
}

pub fn headline(stats: &LifeStats) -> String {
    format!("Life used: {:.1}%", stats.used_percentage)
}

pub fn status_line(report: &LifeReport) -> Option<String> {
    match report {
        LifeReport::Active(_) => None,
        LifeReport::Expired => Some("The assumed lifespan has already elapsed.".to_string()),
        LifeReport::Invalid(reason) => Some(format!("Cannot compute statistics: {reason}.")),
    }
}

/// Why the live dashboard cannot be opened for `report`, if anything.
///
/// A zero lifespan is allowed through so it can be moved back up from the
/// dashboard; a birth date that will never parse is not.
pub fn dashboard_blocker(report: &LifeReport) -> Option<String> {
    match report {
        LifeReport::Invalid(InvalidInput::MissingBirthDate) => Some(SETUP_HINT.to_string()),
        LifeReport::Invalid(reason @ InvalidInput::UnparseableBirthDate { .. }) => Some(format!(
            "{reason}. Run `lifecount setup <YYYY-MM-DD>` to fix it."
        )),
        _ => None,
    }
}

pub fn print_report(settings: &UserSettings, report: &LifeReport) {
    let stats = report.stats();
    println!("\n\x1b[1;36m{}\x1b[0m  (assuming {} years)", headline(&stats), settings.lifespan_years);
    if let Some(status) = status_line(report) {
        println!("{status}");
    }
    println!("{}", render_table(settings, &stats));
    println!("This is your life.");
}

/// Machine-readable form of a report.
pub fn to_json(report: &LifeReport) -> Value {
    let (status, reason) = match report {
        LifeReport::Active(_) => ("active", None),
        LifeReport::Expired => ("expired", None),
        LifeReport::Invalid(reason) => ("invalid", Some(reason_code(reason))),
    };
    json!({
        "status": status,
        "reason": reason,
        "stats": report.stats(),
    })
}

fn reason_code(reason: &InvalidInput) -> &'static str {
    match reason {
        InvalidInput::MissingBirthDate => "missing_birth_date",
        InvalidInput::UnparseableBirthDate { .. } => "unparseable_birth_date",
        InvalidInput::NonPositiveLifespan { .. } => "non_positive_lifespan",
        InvalidInput::LifespanOutOfRange { .. } => "lifespan_out_of_range",
    }
}
