use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use lifecount_core::{evaluate, LifeReport, SettingsRepository, SettingsService, UserSettings};

use crate::message;

/// How long a lifespan message stays on screen.
const MESSAGE_TTL: Duration = Duration::from_secs(2);

pub struct DashboardApp<R: SettingsRepository> {
    service: SettingsService<R>,
    pub settings: UserSettings,
    pub report: LifeReport,
    message: Option<(&'static str, Instant)>,
    pub should_quit: bool,
    pub was_reset: bool,
}

impl<R: SettingsRepository> DashboardApp<R> {
    pub fn new(service: SettingsService<R>, now: NaiveDateTime) -> Result<Self> {
        let settings = service.current()?;
        let report = evaluate(now, &settings);
        Ok(Self {
            service,
            settings,
            report,
            message: None,
            should_quit: false,
            was_reset: false,
        })
    }

    /// Recomputes the report for `now`; called on every tick.
    pub fn refresh(&mut self, now: NaiveDateTime) {
        self.report = evaluate(now, &self.settings);
        if let Some((_, shown_at)) = self.message {
            if shown_at.elapsed() >= MESSAGE_TTL {
                self.message = None;
            }
        }
    }

    pub fn increase_lifespan(&mut self) -> Result<()> {
        self.adjust_lifespan(1)
    }

    pub fn decrease_lifespan(&mut self) -> Result<()> {
        self.adjust_lifespan(-1)
    }

    fn adjust_lifespan(&mut self, delta: i32) -> Result<()> {
        let before = self.settings.lifespan_years;
        self.settings = self.service.adjust_lifespan(delta)?;
        if self.settings.lifespan_years != before {
            self.message = Some((message::pick(), Instant::now()));
        }
        self.refresh(Local::now().naive_local());
        Ok(())
    }

    /// Discards the stored settings and leaves the dashboard.
    pub fn reset(&mut self) -> Result<()> {
        self.settings = self.service.reset()?;
        self.was_reset = true;
        self.should_quit = true;
        Ok(())
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn message(&self) -> Option<&'static str> {
        self.message.map(|(text, _)| text)
    }
}
