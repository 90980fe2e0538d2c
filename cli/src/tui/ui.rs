use lifecount_core::{LifeStats, SettingsRepository};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};

use crate::format::{hours, rate, thousands};
use crate::report::status_line;
use crate::tui::app::DashboardApp;

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    highlight: Color,
}

const THEME: Theme = Theme {
    primary: Color::White,
    muted: Color::DarkGray,
    text: Color::Gray,
    highlight: Color::Cyan,
};

const MAX_LIFESPAN: f64 = 110.0;

pub fn draw<R: SettingsRepository>(frame: &mut Frame, app: &DashboardApp<R>) {
    let stats = app.report.stats();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4), // Headline
            Constraint::Length(3), // Lifespan slider
            Constraint::Length(1), // Fleeting message
            Constraint::Min(12),   // Stats
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_headline(frame, app, &stats, main_layout[0]);
    draw_slider(frame, app, main_layout[1]);

    let message = app.message().unwrap_or("");
    let message_line = Paragraph::new(Span::styled(
        message,
        Style::default().fg(THEME.text).add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(message_line, main_layout[2]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(main_layout[3]);

    draw_card(
        frame,
        " Remaining ",
        &[
            ("Years", thousands(stats.remaining_years)),
            ("Days", thousands(stats.remaining_days)),
            ("Weeks", thousands(stats.remaining_weeks)),
            ("Hours", thousands(stats.remaining_hours)),
            ("Seconds", thousands(stats.remaining_seconds)),
        ],
        columns[0],
    );
    draw_card(
        frame,
        " Experiences ",
        &[
            ("Springs", thousands(stats.remaining_springs)),
            ("Full moons", thousands(stats.remaining_full_moons)),
            ("Sunday nights", thousands(stats.remaining_sundays)),
            ("Birthdays", thousands(stats.remaining_birthdays)),
        ],
        columns[1],
    );
    draw_breakdown(frame, app, &stats, columns[2]);

    let footer = Line::from(vec![
        Span::styled("LIFESPAN: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("RESET: ", Style::default().fg(THEME.muted)),
        Span::styled("r ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    frame.render_widget(
        Paragraph::new(footer).alignment(Alignment::Center),
        main_layout[4],
    );
}

fn draw_headline<R: SettingsRepository>(
    frame: &mut Frame,
    app: &DashboardApp<R>,
    stats: &LifeStats,
    area: Rect,
) {
    let mut lines = vec![
        Line::from(Span::styled("LIFE USED", Style::default().fg(THEME.muted))),
        Line::from(Span::styled(
            format!("{:.1} %", stats.used_percentage),
            Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(status) = status_line(&app.report) {
        lines.push(Line::from(Span::styled(status, Style::default().fg(Color::Red))));
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_slider<R: SettingsRepository>(frame: &mut Frame, app: &DashboardApp<R>, area: Rect) {
    let years = app.settings.lifespan_years;
    let ratio = (years as f64 / MAX_LIFESPAN).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" If I live until... ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted)),
        )
        .gauge_style(Style::default().fg(THEME.primary))
        .ratio(ratio)
        .label(format!("age {years}"));
    frame.render_widget(gauge, area);
}

fn draw_card(frame: &mut Frame, title: &str, items: &[(&str, String)], area: Rect) {
    let mut lines = Vec::with_capacity(items.len() * 2);
    for (label, value) in items {
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<14}"), Style::default().fg(THEME.muted)),
            Span::styled(
                value.clone(),
                Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));
    }
    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .title(title.to_string()),
    );
    frame.render_widget(card, area);
}

fn draw_breakdown<R: SettingsRepository>(
    frame: &mut Frame,
    app: &DashboardApp<R>,
    stats: &LifeStats,
    area: Rect,
) {
    let settings = &app.settings;
    let row = |label: String, value: String, style: Style| {
        Line::from(vec![
            Span::styled(format!("{label:<16}"), Style::default().fg(THEME.muted)),
            Span::styled(value, style),
        ])
    };
    let plain = Style::default().fg(THEME.text);
    let strong = Style::default().fg(THEME.highlight).add_modifier(Modifier::BOLD);

    let lines = vec![
        row(
            format!("Sleep ({}h/day)", rate(settings.daily_sleep_hours)),
            format!("{} h", hours(stats.sleep_hours)),
            plain,
        ),
        row(
            format!("Work ({}h/day)", rate(settings.daily_work_hours)),
            format!("{} h", hours(stats.work_hours)),
            plain,
        ),
        row("Free time".to_string(), format!("{} h", hours(stats.free_hours)), strong),
        Line::from(""),
        row("Movies (2h)".to_string(), thousands(stats.movies_watchable), strong),
        row("Books (10h)".to_string(), thousands(stats.books_readable), strong),
        Line::from(""),
        Line::from(Span::styled(
            "This is your life.",
            Style::default().fg(THEME.muted).add_modifier(Modifier::ITALIC),
        )),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .title(" Breakdown (assumed) "),
    );
    frame.render_widget(card, area);
}
