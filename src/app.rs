// SPDX-License-Identifier: PMPL-1.0-or-later

//! Frontend driver shared by the terminal and desktop interfaces.
//!
//! Owns the current [`Session`], the catalog, the seeded generator and the
//! two simulated background activities. Frontends call [`App::tick`] from
//! their event loop; nothing here blocks or spawns threads.

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::diagnosis::PestScan;
use crate::i18n::Lang;
use crate::matcher::CropFilter;
use crate::random::seeded_rng;
use crate::registration::RegistrationForm;
use crate::session::{Action, Screen, Session};
use crate::voice::{ConversationTurn, Listening};
use chrono::Local;
use rand::rngs::StdRng;
use std::time::Instant;

pub struct App {
    session: Session,
    catalog: Catalog,
    config: AppConfig,
    rng: StdRng,
    seed: u64,
    scan: Option<PestScan>,
    listening: Option<Listening>,
    form: RegistrationForm,
    market_filter: CropFilter,
}

impl App {
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        let (rng, seed) = seeded_rng(config.seed);
        Self {
            session: Session::new(config.language),
            catalog,
            config,
            rng,
            seed,
            scan: None,
            listening: None,
            form: RegistrationForm::default(),
            market_filter: CropFilter::All,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn lang(&self) -> Lang {
        self.session.lang()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn scan(&self) -> Option<&PestScan> {
        self.scan.as_ref()
    }

    pub fn listening(&self) -> Option<&Listening> {
        self.listening.as_ref()
    }

    pub fn is_listening(&self) -> bool {
        self.listening.as_ref().is_some_and(Listening::is_pending)
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RegistrationForm {
        &mut self.form
    }

    pub fn market_filter(&self) -> &CropFilter {
        &self.market_filter
    }

    pub fn set_market_filter(&mut self, filter: CropFilter) {
        self.market_filter = filter;
    }

    /// Apply `action` to the session. Leaving a screen, including by
    /// logout, cancels whatever that screen had in flight.
    pub fn dispatch(&mut self, action: Action) {
        let before = self.session.screen();
        let session = std::mem::take(&mut self.session);
        self.session = session.reduce(action);
        if self.session.screen() != before {
            self.cancel_tasks();
            self.market_filter = CropFilter::All;
        }
    }

    pub fn navigate(&mut self, screen: Screen) {
        self.dispatch(Action::Navigate(screen));
    }

    pub fn set_language(&mut self, lang: Lang) {
        self.dispatch(Action::SetLanguage(lang));
    }

    /// Submit the draft form. The draft is cleared once accepted.
    pub fn submit_registration(&mut self) -> bool {
        if self.session.is_registered() {
            return false;
        }
        self.dispatch(Action::SubmitRegistration(self.form.clone()));
        if self.session.is_registered() {
            self.form = RegistrationForm::default();
            return true;
        }
        false
    }

    pub fn logout(&mut self) {
        self.dispatch(Action::Logout);
    }

    /// Start analysing a new image, replacing any earlier one.
    pub fn submit_image(&mut self, name: impl Into<String>, image: Vec<u8>, now: Instant) {
        if let Some(scan) = self.scan.as_mut() {
            scan.cancel();
        }
        self.scan = Some(PestScan::submit(name, image, now, self.config.analysis_delay()));
    }

    /// "Try another image": forget the current scan.
    pub fn reset_analysis(&mut self) {
        if let Some(mut scan) = self.scan.take() {
            scan.cancel();
        }
    }

    pub fn start_listening(&mut self, now: Instant) {
        if self.is_listening() {
            return;
        }
        self.listening = Some(Listening::start(now, self.config.listening_delay()));
    }

    /// Stop listening early; the heard question is answered right away.
    pub fn stop_listening(&mut self) -> Option<ConversationTurn> {
        let lang = self.lang();
        let heard = self.listening.as_mut()?.stop(lang, &mut self.rng)?;
        Some(self.ask(&heard))
    }

    /// Classify and answer `question`, recording the turn.
    pub fn ask(&mut self, question: &str) -> ConversationTurn {
        let turn = ConversationTurn::answer(question, self.lang(), Local::now());
        self.dispatch(Action::RecordTurn(turn.clone()));
        turn
    }

    pub fn clear_history(&mut self) {
        self.dispatch(Action::ClearConversation);
    }

    /// Advance scheduled work to `now`. Returns `true` when something
    /// resolved and the current view should be redrawn.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if let Some(scan) = self.scan.as_mut() {
            changed |= scan.poll(now, &self.catalog.pests, &mut self.rng);
        }
        let lang = self.lang();
        let heard = match self.listening.as_mut() {
            Some(listening) => listening.poll(now, lang, &mut self.rng),
            None => None,
        };
        if let Some(question) = heard {
            self.ask(&question);
            changed = true;
        }
        changed
    }

    fn cancel_tasks(&mut self) {
        if let Some(scan) = self.scan.as_mut() {
            scan.cancel();
        }
        self.scan = None;
        if let Some(listening) = self.listening.as_mut() {
            listening.cancel();
        }
        self.listening = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnosis::Diagnosis;
    use crate::schedule::TaskState;
    use crate::voice::sample_questions;
    use std::time::Duration;

    fn app() -> App {
        let config = AppConfig {
            seed: Some(7),
            analysis_delay_ms: 100,
            listening_delay_ms: 100,
            ..AppConfig::default()
        };
        let mut app = App::new(config, Catalog::sample());
        let form = app.form_mut();
        form.name = "Asha".into();
        form.phone = "9999999999".into();
        form.state = "Punjab".into();
        form.toggle_crop("Wheat");
        assert!(app.submit_registration());
        app
    }

    #[test]
    fn second_submission_is_refused() {
        let mut app = app();
        app.navigate(Screen::Weather);
        let form = app.form_mut();
        form.name = "Mallory".into();
        form.phone = "1".into();
        form.state = "Gujarat".into();
        assert!(!app.submit_registration());
        assert_eq!(app.session().screen(), Screen::Weather);
        assert_eq!(app.session().profile().map(|p| p.name.as_str()), Some("Asha"));
    }

    #[test]
    fn scan_resolves_on_tick() {
        let mut app = app();
        app.navigate(Screen::PestDetection);
        let start = Instant::now();
        app.submit_image("leaf.jpg", vec![0xFF, 0xD8, 0xFF], start);
        assert!(!app.tick(start));
        assert!(app.tick(start + Duration::from_millis(100)));
        let state = app.scan().map(|scan| scan.state().clone());
        assert!(matches!(state, Some(TaskState::Resolved(Diagnosis::Detected(_)))));
    }

    #[test]
    fn navigating_away_drops_pending_scan() {
        let mut app = app();
        app.navigate(Screen::PestDetection);
        app.submit_image("leaf.jpg", Vec::new(), Instant::now());
        app.navigate(Screen::Weather);
        assert!(app.scan().is_none());
    }

    #[test]
    fn heard_question_is_answered_and_logged() {
        let mut app = app();
        app.navigate(Screen::VoiceAssistant);
        let start = Instant::now();
        app.start_listening(start);
        assert!(app.is_listening());
        assert!(app.tick(start + Duration::from_millis(150)));
        let latest = app.session().conversation().latest().cloned();
        let latest = latest.expect("a turn was recorded");
        assert!(sample_questions(Lang::En).contains(&latest.question.as_str()));
        assert!(!app.is_listening());
    }

    #[test]
    fn logout_cancels_listening_but_keeps_history() {
        let mut app = app();
        app.navigate(Screen::VoiceAssistant);
        app.ask("price of wheat?");
        app.start_listening(Instant::now());
        app.logout();
        assert!(app.listening().is_none());
        assert_eq!(app.session().conversation().len(), 1);
    }

    #[test]
    fn stop_listening_answers_immediately() {
        let mut app = app();
        app.navigate(Screen::VoiceAssistant);
        app.start_listening(Instant::now());
        assert!(app.stop_listening().is_some());
        assert_eq!(app.session().conversation().len(), 1);
        assert!(app.stop_listening().is_none());
    }
}
