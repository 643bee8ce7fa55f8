// SPDX-License-Identifier: PMPL-1.0-or-later

//! Screen renderers.
//!
//! Each screen is rendered to a [`View`]: localized, frontend-neutral text
//! grouped into sections. The terminal printer, the TUI, the GUI and the
//! JSON/YAML export all consume the same structure.

mod dashboard;
mod market;
mod pests;
mod registration;
mod voice;
mod weather;

pub use weather::advice_tone;

use crate::app::App;
use crate::session::Screen;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::time::Instant;

/// How a line should be emphasised. Frontends map this to colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Plain,
    Muted,
    Accent,
    Good,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub text: String,
    pub tone: Tone,
}

impl Line {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Plain)
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Muted)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub heading: String,
    pub lines: Vec<Line>,
}

impl Section {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn with(mut self, line: Line) -> Self {
        self.lines.push(line);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub screen: Screen,
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<Section>,
}

impl View {
    pub fn section(&self, heading: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.heading == heading)
    }
}

/// Render the session's current screen.
pub fn render(app: &App, now: Instant) -> View {
    render_on(app, now, Local::now().date_naive())
}

/// As [`render`], with the calendar date fixed.
pub fn render_on(app: &App, now: Instant, today: NaiveDate) -> View {
    let session = app.session();
    let profile = match session.profile() {
        Some(profile) => profile,
        None => return registration::view(app),
    };
    match session.screen() {
        Screen::Registration => registration::view(app),
        Screen::Dashboard => dashboard::view(app, profile, today),
        Screen::PestDetection => pests::view(app, profile, now),
        Screen::MarketPrices => market::view(app, profile),
        Screen::Weather => weather::view(app, profile),
        Screen::VoiceAssistant => voice::view(app, now),
    }
}

/// Rupee amount with thousands separators, e.g. `₹2,150`.
pub fn rupees(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("₹{out}")
}

fn percent(progress: f32) -> u32 {
    (progress.clamp(0.0, 1.0) * 100.0).round() as u32
}
