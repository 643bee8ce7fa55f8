// SPDX-License-Identifier: PMPL-1.0-or-later

//! Colored console rendering of screen views

use crate::screens::{Line, Tone, View};
use colored::*;

pub struct ViewFormatter;

impl ViewFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, view: &View) {
        print!("{}", self.format(view));
    }

    pub fn format(&self, view: &View) -> String {
        let mut out = String::new();
        out.push_str(&format!("\n{}\n", view.title.bold().cyan()));
        if !view.subtitle.is_empty() {
            out.push_str(&format!("{}\n", view.subtitle.dimmed()));
        }
        out.push('\n');

        for section in &view.sections {
            out.push_str(&format!("{}\n", section.heading.to_uppercase().bold().yellow()));
            for line in &section.lines {
                out.push_str(&format!("  {}\n", self.line(line)));
            }
            out.push('\n');
        }
        out
    }

    pub fn line(&self, line: &Line) -> ColoredString {
        let text = line.text.as_str();
        match line.tone {
            Tone::Plain => text.normal(),
            Tone::Muted => text.dimmed(),
            Tone::Accent => text.cyan(),
            Tone::Good => text.green(),
            Tone::Warning => text.yellow(),
            Tone::Critical => text.red().bold(),
        }
    }
}

impl Default for ViewFormatter {
    fn default() -> Self {
        Self::new()
    }
}
