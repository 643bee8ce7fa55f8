// SPDX-License-Identifier: PMPL-1.0-or-later

use super::{percent, Line, Section, Tone, View};
use crate::app::App;
use crate::i18n::{t, Msg};
use crate::session::Screen;
use crate::voice::sample_questions;
use std::time::Instant;

pub(super) fn view(app: &App, now: Instant) -> View {
    let lang = app.lang();
    let conversation = app.session().conversation();
    let mut sections = Vec::new();

    let mic = match app.listening() {
        Some(listening) if listening.is_pending() => Section::new("🎤")
            .with(Line::new(
                format!("{} {}%", t(lang, Msg::VoiceListening), percent(listening.progress(now))),
                Tone::Accent,
            ))
            .with(Line::muted(t(lang, Msg::VoiceStopListening))),
        _ => Section::new("🎤").with(Line::muted(t(lang, Msg::VoiceStartListening))),
    };
    sections.push(mic);

    if let Some(turn) = conversation.latest() {
        sections.push(
            Section::new(t(lang, Msg::VoiceAssistant))
                .with(Line::plain(format!("{}: {}", t(lang, Msg::VoiceYou), turn.question)))
                .with(Line::new(turn.answer.clone(), Tone::Good)),
        );
    }

    let mut questions = Section::new(t(lang, Msg::VoiceCommonQuestions));
    for (idx, question) in sample_questions(lang).iter().enumerate() {
        questions.push(Line::plain(format!("{}. {}", idx + 1, question)));
    }
    sections.push(questions);

    let mut history = Section::new(t(lang, Msg::VoiceHistory));
    for turn in conversation.turns() {
        let at = turn.asked_at.format("%H:%M");
        history.push(Line::plain(format!("[{at}] {}: {}", t(lang, Msg::VoiceYou), turn.question)));
        history.push(Line::muted(format!("        {}: {}", t(lang, Msg::VoiceAssistant), turn.answer)));
    }
    if history.lines.is_empty() {
        history.push(Line::muted(t(lang, Msg::VoiceNoHistory)));
    }
    sections.push(history);

    View {
        screen: Screen::VoiceAssistant,
        title: t(lang, Msg::VoiceTitle).to_string(),
        subtitle: t(lang, Msg::VoiceSubtitle).to_string(),
        sections,
    }
}
