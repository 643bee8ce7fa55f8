// SPDX-License-Identifier: PMPL-1.0-or-later

use super::{percent, Line, Section, Tone, View};
use crate::app::App;
use crate::diagnosis::Diagnosis;
use crate::i18n::{t, Msg};
use crate::matcher::match_by_crops;
use crate::schedule::TaskState;
use crate::session::Screen;
use crate::types::UserProfile;
use std::time::Instant;

pub(super) fn view(app: &App, profile: &UserProfile, now: Instant) -> View {
    let lang = app.lang();
    let mut sections = Vec::new();

    let mut upload = Section::new(t(lang, Msg::PestUploadImage));
    match app.scan() {
        Some(scan) if !matches!(scan.state(), TaskState::Canceled) => {
            upload.push(Line::plain(format!(
                "📷 {} ({}, {} bytes)",
                scan.name(),
                scan.kind().label(),
                scan.image().len()
            )));
            match scan.state() {
                TaskState::Pending => upload.push(Line::new(
                    format!("⏳ {} {}%", t(lang, Msg::PestAnalyzing), percent(scan.progress(now))),
                    Tone::Accent,
                )),
                TaskState::Resolved(diagnosis) => {
                    upload.push(Line::muted(t(lang, Msg::PestTryAgain)));
                    sections.push(upload.clone());
                    sections.push(diagnosis_section(app, diagnosis));
                }
                TaskState::Canceled => {}
            }
        }
        _ => upload.push(Line::muted(format!("📷 {}", t(lang, Msg::PestUploadImage)))),
    }
    if sections.is_empty() {
        sections.push(upload);
    }

    let mut common = Section::new(t(lang, Msg::PestCommonPests));
    let threats = match_by_crops(&app.catalog().pests, &profile.main_crops);
    for pest in app.catalog().pests.iter().take(app.config().common_pest_limit) {
        let mine = threats.iter().any(|threat| std::ptr::eq(*threat, pest));
        let mut text = format!(
            "{} {} · {}: {}",
            pest.icon,
            pest.name,
            t(lang, Msg::PestAffects),
            pest.affected_crops.join(", ")
        );
        if mine {
            text.push_str(&format!(" ⚠️ {}", t(lang, Msg::PestAffectsYourCrops)));
        }
        common.push(Line::new(text, if mine { Tone::Warning } else { Tone::Plain }));
    }
    sections.push(common);

    View {
        screen: Screen::PestDetection,
        title: t(lang, Msg::PestTitle).to_string(),
        subtitle: t(lang, Msg::PestSubtitle).to_string(),
        sections,
    }
}

fn diagnosis_section(app: &App, diagnosis: &Diagnosis) -> Section {
    let lang = app.lang();
    let mut section = Section::new(t(lang, Msg::PestDiagnosis));
    match diagnosis {
        Diagnosis::Detected(pest) => {
            section.push(Line::new(format!("{} {}", pest.icon, pest.name), Tone::Critical));
            section.push(Line::plain(pest.description.clone()));
            section.push(Line::new(
                format!("{}: {}%", t(lang, Msg::PestConfidence), pest.confidence),
                Tone::Accent,
            ));
            section.push(Line::new(
                format!("💊 {}: {}", t(lang, Msg::PestTreatment), pest.treatment),
                Tone::Good,
            ));
            section.push(Line::new(
                format!("🛡️ {}: {}", t(lang, Msg::PestPrevention), pest.prevention),
                Tone::Good,
            ));
        }
        Diagnosis::NoIssues => {
            section.push(Line::new(format!("✅ {}", t(lang, Msg::PestNoDiagnosis)), Tone::Good));
        }
    }
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::AppConfig;
    use std::time::Duration;

    fn wheat_farmer() -> App {
        let mut app = App::new(
            AppConfig {
                seed: Some(3),
                analysis_delay_ms: 100,
                ..AppConfig::default()
            },
            Catalog::sample(),
        );
        let form = app.form_mut();
        form.name = "Asha".into();
        form.phone = "9999999999".into();
        form.state = "Punjab".into();
        form.toggle_crop("Wheat");
        assert!(app.submit_registration());
        app.navigate(Screen::PestDetection);
        app
    }

    #[test]
    fn pests_of_the_farmers_crops_are_flagged() {
        let app = wheat_farmer();
        let profile = app.session().profile().cloned().expect("registered");
        let view = view(&app, &profile, Instant::now());
        let common = view.section("Common Pests in Your Area").expect("common pests");
        assert_eq!(common.lines.len(), 6);

        let flagged: Vec<&str> = common
            .lines
            .iter()
            .filter(|line| line.tone == Tone::Warning)
            .map(|line| line.text.as_str())
            .collect();
        assert_eq!(flagged.len(), 3);
        assert!(flagged.iter().all(|text| text.contains("affects your crops")));
        assert!(flagged[0].contains("Brown Planthopper"));
        assert!(flagged[1].contains("Aphids"));
        assert!(flagged[2].contains("Powdery Mildew"));

        let bollworm = common
            .lines
            .iter()
            .find(|line| line.text.contains("Bollworm"))
            .expect("bollworm listed");
        assert_eq!(bollworm.tone, Tone::Plain);
        assert!(!bollworm.text.contains("affects your crops"));
    }

    #[test]
    fn pending_scan_shows_progress() {
        let mut app = wheat_farmer();
        let start = Instant::now();
        app.submit_image("leaf.png", vec![0x89, b'P', b'N', b'G'], start);
        let profile = app.session().profile().cloned().expect("registered");
        let view = view(&app, &profile, start + Duration::from_millis(50));
        let upload = &view.sections[0];
        assert_eq!(upload.lines[1].tone, Tone::Accent);
        assert!(upload.lines[1].text.ends_with("50%"));
        assert!(view.section("Diagnosis Result").is_none());
    }

    #[test]
    fn leaving_the_screen_drops_the_scan() {
        let mut app = wheat_farmer();
        let start = Instant::now();
        app.submit_image("leaf.png", vec![0x89, b'P', b'N', b'G'], start);
        app.navigate(Screen::Weather);
        app.navigate(Screen::PestDetection);
        // the canceled task never resolves, even past its due time
        assert!(!app.tick(start + Duration::from_secs(1)));

        let profile = app.session().profile().cloned().expect("registered");
        let view = view(&app, &profile, start + Duration::from_secs(1));
        assert_eq!(view.sections[0].lines.len(), 1);
        assert!(view.sections[0].lines[0].text.starts_with("📷 Upload Crop Image"));
        assert!(view.section("Diagnosis Result").is_none());
    }
}
