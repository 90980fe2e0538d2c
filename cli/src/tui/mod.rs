pub mod app;
pub mod ui;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use lifecount_core::{SettingsRepository, SettingsService};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::debug;

use crate::tui::app::DashboardApp;

/// The dashboard recomputes its figures on this cadence.
const TICK_RATE: Duration = Duration::from_secs(1);

/// Returns `true` when the user reset the settings from the dashboard.
pub fn run<R: SettingsRepository>(service: SettingsService<R>) -> Result<bool> {
    let mut app = DashboardApp::new(service, Local::now().naive_local())?;

    let mut terminal = enter_or_restore(
        enable_raw_mode,
        || -> Result<_> {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        },
        restore_terminal,
    )?;

    let res = run_app(&mut terminal, &mut app);

    restore_terminal();
    terminal.show_cursor()?;

    res?;
    Ok(app.was_reset)
}

/// Runs `enable` then `init`. If `init` fails, `restore` runs before the
/// error is returned so the terminal is not left in raw mode.
fn enter_or_restore<T>(
    enable: impl FnOnce() -> io::Result<()>,
    init: impl FnOnce() -> Result<T>,
    restore: impl FnOnce(),
) -> Result<T> {
    enable()?;
    init().inspect_err(|_| restore())
}

fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        debug!(%err, "failed to leave raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen) {
        debug!(%err, "failed to leave alternate screen");
    }
}

fn run_app<R: SettingsRepository>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut DashboardApp<R>,
) -> Result<()> {
    let mut last_tick = Instant::now();

    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout.min(Duration::from_millis(250)))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
                        KeyCode::Left | KeyCode::Char('h') => app.decrease_lifespan()?,
                        KeyCode::Right | KeyCode::Char('l') => app.increase_lifespan()?,
                        KeyCode::Char('r') => app.reset()?,
                        _ => {}
                    }
                }
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            app.refresh(Local::now().naive_local());
            last_tick = Instant::now();
        }
    }

    debug!("dashboard closed");
    Ok(())
}
