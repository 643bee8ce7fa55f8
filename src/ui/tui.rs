// SPDX-License-Identifier: PMPL-1.0-or-later

//! Interactive terminal frontend

use crate::app::App;
use crate::i18n::{t, Lang, Msg};
use crate::matcher::CropFilter;
use crate::registration::{Field, CROPS, STATES};
use crate::screens::{self, View};
use crate::session::Screen;
use crate::types::SoilType;
use crate::ui::formatter::ViewFormatter;
use crate::voice::sample_questions;
use anyhow::{Context, Result};
use colored::*;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, ClearType},
};
use std::fs;
use std::io::{stdout, Write};
use std::time::{Duration, Instant};

pub struct Tui {
    app: App,
    focus: usize,
    crop_cursor: usize,
    scroll: usize,
    prompt: Option<Prompt>,
    status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptKind {
    ImagePath,
    Question,
}

struct Prompt {
    kind: PromptKind,
    buffer: String,
}

enum Flow {
    Continue,
    Quit,
}

impl Tui {
    pub fn run(app: App) -> Result<()> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        let mut tui = Tui {
            app,
            focus: 0,
            crop_cursor: 0,
            scroll: 0,
            prompt: None,
            status: None,
        };
        let result = tui.run_inner(&mut out);
        execute!(out, cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        result
    }

    fn run_inner(&mut self, out: &mut impl Write) -> Result<()> {
        loop {
            let now = Instant::now();
            self.app.tick(now);
            let view = screens::render(&self.app, now);
            self.render(out, &view)?;

            if event::poll(Duration::from_millis(200))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }
                    if let Flow::Quit = self.handle_key(key) {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Flow::Quit;
        }
        if self.prompt.is_some() {
            self.handle_prompt_key(key.code);
            return Flow::Continue;
        }
        self.status = None;
        if self.app.session().screen() == Screen::Registration {
            return self.handle_registration_key(key.code);
        }
        self.handle_member_key(key.code)
    }

    fn handle_prompt_key(&mut self, code: KeyCode) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };
        match code {
            KeyCode::Esc => self.prompt = None,
            KeyCode::Backspace => {
                prompt.buffer.pop();
            }
            KeyCode::Char(c) => prompt.buffer.push(c),
            KeyCode::Enter => {
                if let Some(prompt) = self.prompt.take() {
                    self.finish_prompt(prompt);
                }
            }
            _ => {}
        }
    }

    fn finish_prompt(&mut self, prompt: Prompt) {
        let input = prompt.buffer.trim();
        if input.is_empty() {
            return;
        }
        match prompt.kind {
            PromptKind::ImagePath => match read_image(input) {
                Ok(bytes) => self.app.submit_image(input, bytes, Instant::now()),
                Err(err) => self.status = Some(format!("{err:#}")),
            },
            PromptKind::Question => {
                self.app.ask(input);
            }
        }
    }

    fn handle_registration_key(&mut self, code: KeyCode) -> Flow {
        let fields = Field::all();
        let field = fields[self.focus.min(fields.len() - 1)];
        match code {
            KeyCode::Esc => return Flow::Quit,
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % fields.len(),
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + fields.len() - 1) % fields.len()
            }
            KeyCode::F(2) => self.cycle_language(),
            KeyCode::Enter => {
                if self.app.submit_registration() {
                    self.focus = 0;
                    self.scroll = 0;
                }
            }
            KeyCode::Left | KeyCode::Right => {
                let forward = code == KeyCode::Right;
                match field {
                    Field::State => {
                        let form = self.app.form_mut();
                        form.state = cycle(STATES, &form.state, forward);
                    }
                    Field::SoilType => {
                        let labels: Vec<&str> = SoilType::all().iter().map(SoilType::label).collect();
                        let form = self.app.form_mut();
                        form.soil_type = cycle(&labels, &form.soil_type, forward);
                    }
                    Field::MainCrops => {
                        self.crop_cursor = if forward {
                            (self.crop_cursor + 1) % CROPS.len()
                        } else {
                            (self.crop_cursor + CROPS.len() - 1) % CROPS.len()
                        };
                    }
                    _ => {}
                }
            }
            KeyCode::Char(' ') if field == Field::MainCrops => {
                self.app.form_mut().toggle_crop(CROPS[self.crop_cursor]);
            }
            KeyCode::Backspace => {
                if let Some(text) = self.app.form_mut().text_mut(field) {
                    text.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(text) = self.app.form_mut().text_mut(field) {
                    text.push(c);
                }
            }
            _ => {}
        }
        Flow::Continue
    }

    fn handle_member_key(&mut self, code: KeyCode) -> Flow {
        let screen = self.app.session().screen();
        let members = Screen::member_screens();
        let idx = members.iter().position(|s| *s == screen).unwrap_or(0);
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Tab => self.go(members[(idx + 1) % members.len()]),
            KeyCode::BackTab => self.go(members[(idx + members.len() - 1) % members.len()]),
            KeyCode::Char('j') | KeyCode::Down => self.scroll += 1,
            KeyCode::Char('k') | KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Char('l') => self.cycle_language(),
            KeyCode::Char('o') => {
                self.app.logout();
                self.scroll = 0;
            }
            KeyCode::Char('u') if screen == Screen::PestDetection => self.open_prompt(PromptKind::ImagePath),
            KeyCode::Char('r') if screen == Screen::PestDetection => self.app.reset_analysis(),
            KeyCode::Char('f') if screen == Screen::MarketPrices => self.cycle_market_filter(),
            KeyCode::Char('s') if screen == Screen::VoiceAssistant => {
                if self.app.is_listening() {
                    self.app.stop_listening();
                } else {
                    self.app.start_listening(Instant::now());
                }
            }
            KeyCode::Char('a') if screen == Screen::VoiceAssistant => self.open_prompt(PromptKind::Question),
            KeyCode::Char('c') if screen == Screen::VoiceAssistant => self.app.clear_history(),
            KeyCode::Char(digit @ '1'..='9') if screen == Screen::VoiceAssistant => {
                let questions = sample_questions(self.app.lang());
                let pick = digit as usize - '1' as usize;
                if let Some(question) = questions.get(pick) {
                    self.app.ask(question);
                }
            }
            _ => {}
        }
        Flow::Continue
    }

    fn go(&mut self, screen: Screen) {
        self.app.navigate(screen);
        self.scroll = 0;
    }

    fn open_prompt(&mut self, kind: PromptKind) {
        self.prompt = Some(Prompt {
            kind,
            buffer: String::new(),
        });
    }

    fn cycle_language(&mut self) {
        let langs = Lang::all();
        let idx = langs.iter().position(|l| *l == self.app.lang()).unwrap_or(0);
        self.app.set_language(langs[(idx + 1) % langs.len()]);
    }

    fn cycle_market_filter(&mut self) {
        let crops: Vec<String> = self
            .app
            .session()
            .profile()
            .map(|p| p.main_crops.clone())
            .unwrap_or_default();
        let next = match self.app.market_filter() {
            CropFilter::All => crops.first().cloned(),
            CropFilter::Crop(current) => crops
                .iter()
                .position(|c| c.eq_ignore_ascii_case(current))
                .and_then(|i| crops.get(i + 1))
                .cloned(),
        };
        self.app
            .set_market_filter(next.map(CropFilter::Crop).unwrap_or(CropFilter::All));
    }

    fn render(&self, out: &mut impl Write, view: &View) -> Result<()> {
        execute!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        let lang = self.app.lang();
        let (_, rows) = terminal::size().unwrap_or((80, 24));

        write!(
            out,
            "{}  {} {}\r\n",
            t(lang, Msg::AppName).bold().green(),
            t(lang, Msg::AppLanguage).dimmed(),
            lang.native_name().cyan()
        )?;
        if self.app.session().is_registered() {
            let nav: Vec<String> = Screen::member_screens()
                .iter()
                .map(|screen| {
                    let label = format!("{} {}", screen.icon(), t(lang, screen.nav_label()));
                    if *screen == view.screen {
                        label.reversed().to_string()
                    } else {
                        label
                    }
                })
                .collect();
            write!(out, "{}\r\n", nav.join(" │ "))?;
        }
        write!(out, "\r\n")?;

        let body = if view.screen == Screen::Registration {
            self.registration_lines(view)
        } else {
            view_lines(view)
        };
        let height = usize::from(rows).saturating_sub(8).max(4);
        let scroll = self.scroll.min(body.len().saturating_sub(1));
        for line in body.iter().skip(scroll).take(height) {
            write!(out, "{}\r\n", line)?;
        }

        write!(out, "\r\n")?;
        if let Some(prompt) = &self.prompt {
            let label = match prompt.kind {
                PromptKind::ImagePath => t(lang, Msg::PestUploadImage),
                PromptKind::Question => t(lang, Msg::VoiceYou),
            };
            write!(out, "{} {}▏\r\n", format!("{label}:").bold(), prompt.buffer)?;
        }
        if let Some(status) = &self.status {
            write!(out, "{}\r\n", status.red())?;
        }
        write!(out, "{}\r\n", controls(view.screen).dimmed())?;
        out.flush()?;
        Ok(())
    }

    fn registration_lines(&self, view: &View) -> Vec<String> {
        let lang = self.app.lang();
        let form = self.app.form();
        let errors = self.app.session().registration_errors();
        let mut lines = vec![
            view.title.bold().cyan().to_string(),
            view.subtitle.dimmed().to_string(),
            String::new(),
        ];
        for (idx, field) in Field::all().iter().enumerate() {
            let indicator = if idx == self.focus { "➤".green() } else { " ".normal() };
            let marker = if field.is_required() { " *".red().to_string() } else { String::new() };
            let value = if *field == Field::MainCrops {
                CROPS
                    .iter()
                    .enumerate()
                    .map(|(i, crop)| {
                        let mark = if form.has_crop(crop) { "x" } else { " " };
                        let item = format!("[{mark}] {crop}");
                        if idx == self.focus && i == self.crop_cursor {
                            item.reversed().to_string()
                        } else {
                            item
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            } else {
                form.value(*field)
            };
            lines.push(format!("{} {}{}: {}", indicator, t(lang, field.label()).bold(), marker, value));
            for error in errors.iter().filter(|e| e.field == *field) {
                lines.push(format!("     {}", format!("⚠ {}", t(lang, error.problem.message())).red()));
            }
        }
        lines
    }
}

fn view_lines(view: &View) -> Vec<String> {
    let formatter = ViewFormatter::new();
    let mut lines = vec![view.title.bold().cyan().to_string()];
    if !view.subtitle.is_empty() {
        lines.push(view.subtitle.dimmed().to_string());
    }
    for section in &view.sections {
        lines.push(String::new());
        lines.push(section.heading.bold().yellow().to_string());
        for line in &section.lines {
            lines.push(format!("  {}", formatter.line(line)));
        }
    }
    lines
}

fn controls(screen: Screen) -> &'static str {
    match screen {
        Screen::Registration => {
            "[Tab/↓] Next field, [←/→] Choose, [Space] Toggle crop, [Enter] Register, [F2] Language, [Esc] Quit"
        }
        Screen::PestDetection => "[u] Upload image, [r] Reset, [Tab] Next screen, [l] Language, [o] Logout, [q] Quit",
        Screen::MarketPrices => "[f] Filter crop, [j/k] Scroll, [Tab] Next screen, [l] Language, [o] Logout, [q] Quit",
        Screen::VoiceAssistant => {
            "[s] Listen/stop, [1-5] Ask sample, [a] Ask, [c] Clear, [Tab] Next screen, [o] Logout, [q] Quit"
        }
        _ => "[Tab/Shift+Tab] Screens, [j/k] Scroll, [l] Language, [o] Logout, [q] Quit",
    }
}

/// Next (or previous) option after `current`, wrapping around. An unknown
/// current value starts from the first option.
fn cycle(options: &[&str], current: &str, forward: bool) -> String {
    let len = options.len();
    if len == 0 {
        return current.to_string();
    }
    let next = match options
        .iter()
        .position(|o| o.eq_ignore_ascii_case(current.trim()))
    {
        Some(idx) if forward => (idx + 1) % len,
        Some(idx) => (idx + len - 1) % len,
        None => 0,
    };
    options[next].to_string()
}

fn read_image(path: &str) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("reading image {}", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps_both_ways() {
        let options = ["a", "b", "c"];
        assert_eq!(cycle(&options, "c", true), "a");
        assert_eq!(cycle(&options, "a", false), "c");
        assert_eq!(cycle(&options, "", true), "a");
        assert_eq!(cycle(&options, "B", true), "c");
    }
}
