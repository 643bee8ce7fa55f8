// SPDX-License-Identifier: PMPL-1.0-or-later

//! Desktop frontend.

use crate::app::App;
use crate::i18n::{t, Lang, Msg};
use crate::matcher::CropFilter;
use crate::registration::{Field, CROPS, STATES};
use crate::schedule::TaskState;
use crate::screens::{self, Line, Tone, View};
use crate::session::Screen;
use crate::types::SoilType;
use crate::voice::sample_questions;
use anyhow::{anyhow, Result};
use eframe::egui::{self, Color32, RichText};
use eframe::{Frame, NativeOptions};
use std::fs;
use std::time::{Duration, Instant};

pub struct FarmGui {
    app: App,
    image_path: String,
    question: String,
    status: Option<String>,
}

impl FarmGui {
    pub fn run(app: App) -> Result<()> {
        let options = NativeOptions::default();
        let title = t(app.lang(), Msg::AppName).to_string();
        let gui = Self {
            app,
            image_path: String::new(),
            question: String::new(),
            status: None,
        };
        eframe::run_native(&title, options, Box::new(|_cc| Box::new(gui)))
            .map_err(|err| anyhow!("failed to launch desktop window: {err}"))?;
        Ok(())
    }
}

impl eframe::App for FarmGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let now = Instant::now();
        self.app.tick(now);
        let lang = self.app.lang();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(t(lang, Msg::AppName));
                let mut chosen = lang;
                egui::ComboBox::from_label(t(lang, Msg::AppLanguage))
                    .selected_text(lang.native_name())
                    .show_ui(ui, |ui| {
                        for option in Lang::all() {
                            ui.selectable_value(&mut chosen, *option, option.native_name());
                        }
                    });
                if chosen != lang {
                    self.app.set_language(chosen);
                }
                if self.app.session().is_registered() && ui.button(t(lang, Msg::Logout)).clicked() {
                    self.app.logout();
                }
            });
        });

        if self.app.session().is_registered() {
            egui::SidePanel::left("nav").show(ctx, |ui| {
                let current = self.app.session().screen();
                for screen in Screen::member_screens() {
                    let label = format!("{} {}", screen.icon(), t(lang, screen.nav_label()));
                    if ui.selectable_label(current == *screen, label).clicked() {
                        self.app.navigate(*screen);
                    }
                }
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                match self.app.session().screen() {
                    Screen::Registration => self.render_registration(ui),
                    screen => {
                        self.render_controls(ui, screen, now);
                        let view = screens::render(&self.app, now);
                        render_view(ui, &view);
                    }
                }
                if let Some(status) = &self.status {
                    ui.colored_label(Color32::RED, status);
                }
            });
        });

        let busy = self.app.is_listening()
            || self
                .app
                .scan()
                .is_some_and(|scan| matches!(scan.state(), TaskState::Pending));
        if busy {
            ctx.request_repaint_after(Duration::from_millis(200));
        }
    }
}

impl FarmGui {
    fn render_registration(&mut self, ui: &mut egui::Ui) {
        let lang = self.app.lang();
        ui.heading(t(lang, Msg::RegTitle));
        ui.label(t(lang, Msg::RegSubtitle));
        ui.separator();

        let errors = self.app.session().registration_errors().to_vec();
        for field in Field::all() {
            let mut label = t(lang, field.label()).to_string();
            if field.is_required() {
                label.push_str(" *");
            }
            ui.label(RichText::new(label).strong());
            let form = self.app.form_mut();
            match field {
                Field::State => choice(ui, "state", &mut form.state, STATES),
                Field::SoilType => {
                    let labels: Vec<&str> = SoilType::all().iter().map(SoilType::label).collect();
                    choice(ui, "soil", &mut form.soil_type, &labels);
                }
                Field::MainCrops => {
                    ui.horizontal_wrapped(|ui| {
                        for crop in CROPS {
                            let mut selected = form.has_crop(crop);
                            if ui.checkbox(&mut selected, *crop).changed() {
                                form.toggle_crop(crop);
                            }
                        }
                    });
                }
                _ => {
                    if let Some(text) = form.text_mut(*field) {
                        ui.text_edit_singleline(text);
                    }
                }
            }
            for error in errors.iter().filter(|e| e.field == *field) {
                ui.colored_label(Color32::RED, t(lang, error.problem.message()));
            }
        }

        ui.separator();
        if ui.button(t(lang, Msg::RegSubmit)).clicked() {
            self.app.submit_registration();
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui, screen: Screen, now: Instant) {
        let lang = self.app.lang();
        match screen {
            Screen::PestDetection => {
                ui.horizontal(|ui| {
                    ui.label("📷");
                    ui.text_edit_singleline(&mut self.image_path);
                    if ui.button(t(lang, Msg::PestUploadImage)).clicked() {
                        self.submit_image(now);
                    }
                    if self.app.scan().is_some() && ui.button(t(lang, Msg::PestTryAgain)).clicked() {
                        self.app.reset_analysis();
                    }
                });
                if let Some(scan) = self.app.scan() {
                    if matches!(scan.state(), TaskState::Pending) {
                        ui.add(egui::ProgressBar::new(scan.progress(now)).text(t(lang, Msg::PestAnalyzing)));
                    }
                }
            }
            Screen::MarketPrices => {
                let crops = self
                    .app
                    .session()
                    .profile()
                    .map(|p| p.main_crops.clone())
                    .unwrap_or_default();
                let mut filter = self.app.market_filter().clone();
                ui.horizontal_wrapped(|ui| {
                    ui.label(t(lang, Msg::MarketFilterByCrop));
                    ui.selectable_value(&mut filter, CropFilter::All, t(lang, Msg::MarketAllCrops));
                    for crop in crops {
                        ui.selectable_value(&mut filter, CropFilter::Crop(crop.clone()), crop);
                    }
                });
                if &filter != self.app.market_filter() {
                    self.app.set_market_filter(filter);
                }
            }
            Screen::VoiceAssistant => {
                ui.horizontal(|ui| {
                    if self.app.is_listening() {
                        if ui.button(format!("⏹ {}", t(lang, Msg::VoiceStopListening))).clicked() {
                            self.app.stop_listening();
                        }
                    } else if ui.button(format!("🎤 {}", t(lang, Msg::VoiceStartListening))).clicked() {
                        self.app.start_listening(now);
                    }
                    if !self.app.session().conversation().is_empty()
                        && ui.button(t(lang, Msg::VoiceClearHistory)).clicked()
                    {
                        self.app.clear_history();
                    }
                });
                ui.horizontal(|ui| {
                    ui.text_edit_singleline(&mut self.question);
                    if ui.button("➤").clicked() && !self.question.trim().is_empty() {
                        let question = std::mem::take(&mut self.question);
                        self.app.ask(question.trim());
                    }
                });
                ui.horizontal_wrapped(|ui| {
                    for question in sample_questions(lang) {
                        if ui.small_button(*question).clicked() {
                            self.app.ask(question);
                        }
                    }
                });
            }
            Screen::Dashboard => {
                ui.horizontal_wrapped(|ui| {
                    for target in &Screen::member_screens()[1..] {
                        let label = format!("{} {}", target.icon(), t(lang, target.nav_label()));
                        if ui.button(label).clicked() {
                            self.app.navigate(*target);
                        }
                    }
                });
            }
            Screen::Weather | Screen::Registration => {}
        }
        ui.separator();
    }

    fn submit_image(&mut self, now: Instant) {
        let path = self.image_path.trim().to_string();
        if path.is_empty() {
            return;
        }
        match fs::read(&path) {
            Ok(bytes) => {
                self.status = None;
                self.app.submit_image(path, bytes, now);
            }
            Err(err) => self.status = Some(format!("reading image {path}: {err}")),
        }
    }
}

fn choice(ui: &mut egui::Ui, id: &str, value: &mut String, options: &[&str]) {
    egui::ComboBox::from_id_source(id)
        .selected_text(value.as_str())
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(value, option.to_string(), *option);
            }
        });
}

fn render_view(ui: &mut egui::Ui, view: &View) {
    ui.heading(&view.title);
    if !view.subtitle.is_empty() {
        ui.label(RichText::new(&view.subtitle).weak());
    }
    for section in &view.sections {
        ui.separator();
        ui.label(RichText::new(&section.heading).strong());
        for line in &section.lines {
            tone_label(ui, line);
        }
    }
}

fn tone_label(ui: &mut egui::Ui, line: &Line) {
    let text = RichText::new(&line.text);
    let text = match line.tone {
        Tone::Plain => text,
        Tone::Muted => text.weak(),
        Tone::Accent => text.color(Color32::LIGHT_BLUE),
        Tone::Good => text.color(Color32::from_rgb(70, 170, 70)),
        Tone::Warning => text.color(Color32::from_rgb(215, 150, 20)),
        Tone::Critical => text.color(Color32::RED).strong(),
    };
    ui.label(text);
}
