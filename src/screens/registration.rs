// SPDX-License-Identifier: PMPL-1.0-or-later

use super::{Line, Section, Tone, View};
use crate::app::App;
use crate::i18n::{t, Msg};
use crate::registration::{Field, CROPS, STATES};
use crate::session::Screen;
use crate::types::SoilType;

/// The registration form. Required fields carry a `*`; problems from the
/// last rejected submission appear under their field.
pub(super) fn view(app: &App) -> View {
    let lang = app.lang();
    let form = app.form();
    let errors = app.session().registration_errors();

    let mut fields = Section::new(t(lang, Msg::AppWelcome));
    for field in Field::all() {
        let marker = if field.is_required() { " *" } else { "" };
        let value = form.value(*field);
        fields.push(Line::plain(format!("{}{}: {}", t(lang, field.label()), marker, value)));
        for error in errors.iter().filter(|e| e.field == *field) {
            fields.push(Line::new(
                format!("    ⚠ {}", t(lang, error.problem.message())),
                Tone::Critical,
            ));
        }
    }

    let states = Section::new(t(lang, Msg::RegState)).with(Line::muted(STATES.join(", ")));
    let soils = Section::new(t(lang, Msg::RegSoilType)).with(Line::muted(
        SoilType::all()
            .iter()
            .map(SoilType::label)
            .collect::<Vec<_>>()
            .join(", "),
    ));
    let crops = Section::new(t(lang, Msg::RegMainCrops)).with(Line::plain(
        CROPS
            .iter()
            .map(|crop| {
                let mark = if form.has_crop(crop) { "x" } else { " " };
                format!("[{mark}] {crop}")
            })
            .collect::<Vec<_>>()
            .join("  "),
    ));

    View {
        screen: Screen::Registration,
        title: t(lang, Msg::RegTitle).to_string(),
        subtitle: t(lang, Msg::RegSubtitle).to_string(),
        sections: vec![fields, states, soils, crops],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::AppConfig;
    use crate::i18n::Lang;

    #[test]
    fn required_marker_and_errors_are_localized() {
        let mut app = App::new(
            AppConfig {
                language: Lang::Hi,
                seed: Some(1),
                ..AppConfig::default()
            },
            Catalog::sample(),
        );
        assert!(!app.submit_registration());
        let view = view(&app);
        let lines = &view.sections[0].lines;
        assert!(lines[0].text.starts_with("पूरा नाम *"));
        assert_eq!(lines[1].text.trim(), "⚠ आवश्यक फील्ड");
        assert_eq!(lines.iter().filter(|l| l.tone == Tone::Critical).count(), 3);
        assert!(lines.iter().any(|l| l.text.starts_with("जिला:")));
    }
}
