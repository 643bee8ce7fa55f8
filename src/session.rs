// SPDX-License-Identifier: PMPL-1.0-or-later

//! Session context and view router.
//!
//! A [`Session`] is an immutable value; [`Session::reduce`] consumes it with
//! an [`Action`] and returns the next one. Frontends hold the current value
//! and pass it down to the screen renderers.
//!
//! Router rules:
//! - start on [`Screen::Registration`]
//! - a valid registration moves to [`Screen::Dashboard`]
//! - navigation between member screens needs a registered profile and is
//!   ignored otherwise; registration is never a navigation target
//! - logout drops the profile and returns to registration; the
//!   conversation log survives until cleared explicitly

use crate::error::FieldError;
use crate::i18n::{Lang, Msg};
use crate::registration::RegistrationForm;
use crate::types::UserProfile;
use crate::voice::{ConversationLog, ConversationTurn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Registration,
    Dashboard,
    PestDetection,
    MarketPrices,
    Weather,
    VoiceAssistant,
}

impl Screen {
    /// Screens reachable from the navigation bar, in bar order.
    pub fn member_screens() -> &'static [Screen] {
        &[
            Screen::Dashboard,
            Screen::PestDetection,
            Screen::MarketPrices,
            Screen::Weather,
            Screen::VoiceAssistant,
        ]
    }

    pub fn requires_profile(&self) -> bool {
        !matches!(self, Screen::Registration)
    }

    pub fn nav_label(&self) -> Msg {
        match self {
            Screen::Registration => Msg::RegTitle,
            Screen::Dashboard => Msg::NavDashboard,
            Screen::PestDetection => Msg::NavPestDetection,
            Screen::MarketPrices => Msg::NavMarketPrices,
            Screen::Weather => Msg::NavWeather,
            Screen::VoiceAssistant => Msg::NavVoice,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Screen::Registration => "🌾",
            Screen::Dashboard => "🏠",
            Screen::PestDetection => "🐛",
            Screen::MarketPrices => "💰",
            Screen::Weather => "🌤️",
            Screen::VoiceAssistant => "🎤",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Screen::Registration => "registration",
            Screen::Dashboard => "dashboard",
            Screen::PestDetection => "pests",
            Screen::MarketPrices => "market",
            Screen::Weather => "weather",
            Screen::VoiceAssistant => "voice",
        }
    }

    pub fn parse(value: &str) -> Option<Screen> {
        match value.trim().to_ascii_lowercase().as_str() {
            "registration" | "register" => Some(Screen::Registration),
            "dashboard" | "home" => Some(Screen::Dashboard),
            "pests" | "pest" | "pest-detection" | "pest_detection" => Some(Screen::PestDetection),
            "market" | "prices" | "market-prices" | "market_prices" => Some(Screen::MarketPrices),
            "weather" => Some(Screen::Weather),
            "voice" | "voice-assistant" | "voice_assistant" => Some(Screen::VoiceAssistant),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    SetLanguage(Lang),
    SubmitRegistration(RegistrationForm),
    Navigate(Screen),
    Logout,
    RecordTurn(ConversationTurn),
    ClearConversation,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    lang: Lang,
    screen: Screen,
    profile: Option<UserProfile>,
    registration_errors: Vec<FieldError>,
    conversation: ConversationLog,
}

impl Session {
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            ..Self::default()
        }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn is_registered(&self) -> bool {
        self.profile.is_some()
    }

    /// Problems from the last rejected registration; empty otherwise.
    pub fn registration_errors(&self) -> &[FieldError] {
        &self.registration_errors
    }

    pub fn conversation(&self) -> &ConversationLog {
        &self.conversation
    }

    pub fn reduce(self, action: Action) -> Session {
        match action {
            Action::SetLanguage(lang) => {
                tracing::debug!(from = %self.lang, to = %lang, "language changed");
                Session { lang, ..self }
            }
            Action::SubmitRegistration(_) if self.profile.is_some() => {
                tracing::debug!("registration ignored, profile already set");
                self
            }
            Action::SubmitRegistration(form) => match form.submit() {
                Ok(profile) => {
                    tracing::debug!(state = %profile.state, "registration accepted");
                    Session {
                        screen: Screen::Dashboard,
                        profile: Some(profile),
                        registration_errors: Vec::new(),
                        ..self
                    }
                }
                Err(err) => {
                    tracing::debug!(problems = err.fields().len(), "registration rejected");
                    Session {
                        registration_errors: err.fields().to_vec(),
                        ..self
                    }
                }
            },
            Action::Navigate(target) => {
                if self.profile.is_none() {
                    tracing::debug!(target = ?target, "navigation ignored without a profile");
                    return Session {
                        screen: Screen::Registration,
                        ..self
                    };
                }
                if !target.requires_profile() {
                    tracing::debug!("registration is reached through logout only");
                    return self;
                }
                tracing::debug!(from = ?self.screen, to = ?target, "navigate");
                Session {
                    screen: target,
                    ..self
                }
            }
            Action::Logout => {
                tracing::debug!("logout");
                Session {
                    screen: Screen::Registration,
                    profile: None,
                    registration_errors: Vec::new(),
                    ..self
                }
            }
            Action::RecordTurn(turn) => Session {
                conversation: self.conversation.with_turn(turn),
                ..self
            },
            Action::ClearConversation => Session {
                conversation: ConversationLog::default(),
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registered() -> Session {
        let form = RegistrationForm {
            name: "Asha".into(),
            phone: "9999999999".into(),
            state: "Punjab".into(),
            main_crops: vec!["Wheat".into()],
            ..Default::default()
        };
        Session::new(Lang::En).reduce(Action::SubmitRegistration(form))
    }

    #[test]
    fn starts_on_registration() {
        let session = Session::default();
        assert_eq!(session.screen(), Screen::Registration);
        assert!(!session.is_registered());
        assert_eq!(session.lang(), Lang::En);
    }

    #[test]
    fn rejected_registration_keeps_errors_and_screen() {
        let session =
            Session::default().reduce(Action::SubmitRegistration(RegistrationForm::default()));
        assert_eq!(session.screen(), Screen::Registration);
        assert_eq!(session.registration_errors().len(), 3);
    }

    #[test]
    fn accepted_registration_clears_previous_errors() {
        let session = Session::default()
            .reduce(Action::SubmitRegistration(RegistrationForm::default()));
        assert!(!session.registration_errors().is_empty());
        let form = RegistrationForm {
            name: "Ravi".into(),
            phone: "1".into(),
            state: "Gujarat".into(),
            ..Default::default()
        };
        let session = session.reduce(Action::SubmitRegistration(form));
        assert_eq!(session.screen(), Screen::Dashboard);
        assert!(session.registration_errors().is_empty());
    }

    #[test]
    fn navigating_to_registration_while_registered_is_ignored() {
        let session = registered()
            .reduce(Action::Navigate(Screen::Weather))
            .reduce(Action::Navigate(Screen::Registration));
        assert_eq!(session.screen(), Screen::Weather);
    }

    #[test]
    fn language_survives_logout() {
        let session = registered()
            .reduce(Action::SetLanguage(Lang::Te))
            .reduce(Action::Logout);
        assert_eq!(session.lang(), Lang::Te);
    }

    #[test]
    fn screen_parse_accepts_slugs() {
        for screen in Screen::member_screens() {
            assert_eq!(Screen::parse(screen.slug()), Some(*screen));
        }
        assert_eq!(Screen::parse("nowhere"), None);
    }
}
