// SPDX-License-Identifier: PMPL-1.0-or-later

//! Home screen: farm summary, alerts, recommendations, soil, calendar.

use super::{Line, Section, Tone, View};
use crate::app::App;
use crate::i18n::{t, Msg};
use crate::matcher::{match_by_crop_or_region, match_by_region};
use crate::session::Screen;
use crate::types::{Priority, UserProfile};
use chrono::{Days, NaiveDate};

/// Days from today until the next calendar activity.
const NEXT_ACTIVITY_IN_DAYS: u64 = 3;

pub(super) fn view(app: &App, profile: &UserProfile, today: NaiveDate) -> View {
    let lang = app.lang();
    let config = app.config();
    let catalog = app.catalog();

    let mut farm = Section::new(t(lang, Msg::NavDashboard));
    if let Some(acres) = profile.land_size {
        farm.push(Line::plain(format!("🏞️ {} {}", acres, t(lang, Msg::DashAcres))));
    }
    if !profile.main_crops.is_empty() {
        farm.push(Line::plain(format!("🌾 {}", profile.main_crops.join(", "))));
    }
    if let Some(soil) = profile.soil_type {
        farm.push(Line::plain(format!("🪨 {}", soil)));
    }
    if let Some(years) = profile.experience_years {
        farm.push(Line::muted(format!("👨‍🌾 {} {}", years, t(lang, Msg::RegExperience))));
    }

    let mut actions = Section::new(t(lang, Msg::DashQuickActions));
    for screen in &Screen::member_screens()[1..] {
        actions.push(Line::new(
            format!("{} {}", screen.icon(), t(lang, screen.nav_label())),
            Tone::Accent,
        ));
    }

    let mut alerts = Section::new(t(lang, Msg::DashAlerts));
    let regional = match_by_region(&catalog.alerts, &profile.state);
    for alert in regional.iter().take(config.alert_limit) {
        alerts.push(Line::new(
            format!("{} {}: {}", alert.icon, alert.title, alert.message),
            priority_tone(alert.priority),
        ));
    }
    if alerts.lines.is_empty() {
        alerts.push(Line::muted(t(lang, Msg::DashNoAlerts)));
    }

    let mut recommendations = Section::new(t(lang, Msg::DashRecommendations));
    for rec in match_by_crop_or_region(
        &catalog.crop_recommendations,
        &profile.main_crops,
        &profile.state,
        config.recommendation_limit,
    ) {
        recommendations.push(Line::new(
            format!(
                "{} {} ({}) [{} {}] {}",
                rec.icon,
                rec.crop,
                rec.season,
                rec.priority,
                t(lang, Msg::DashPriority),
                rec.recommendation
            ),
            priority_tone(rec.priority),
        ));
    }

    let soil = Section::new(t(lang, Msg::DashSoilHealth))
        .with(Line::new(
            format!("{}: 6.8 ({})", t(lang, Msg::DashPhLevel), t(lang, Msg::DashOptimal)),
            Tone::Good,
        ))
        .with(Line::new(
            format!("{}: 65% ({})", t(lang, Msg::DashMoisture), t(lang, Msg::DashGood)),
            Tone::Good,
        ))
        .with(Line::new(
            format!("{}: NPK ({})", t(lang, Msg::DashNutrients), t(lang, Msg::DashBalanced)),
            Tone::Good,
        ));

    let mut calendar = Section::new(t(lang, Msg::DashCropCalendar));
    let next = today
        .checked_add_days(Days::new(NEXT_ACTIVITY_IN_DAYS))
        .unwrap_or(today);
    for crop in profile.main_crops.iter().take(config.crop_calendar_limit) {
        calendar.push(Line::plain(format!(
            "{}: {} {} ({})",
            crop,
            t(lang, Msg::DashNextActivity),
            t(lang, Msg::DashFertilization),
            next.format("%d %b %Y")
        )));
    }

    let mut sections = vec![farm, actions, alerts, recommendations, soil];
    if !calendar.lines.is_empty() {
        sections.push(calendar);
    }

    View {
        screen: Screen::Dashboard,
        title: format!("{}, {}!", t(lang, Msg::DashWelcome), profile.name),
        subtitle: format!("📍 {}", profile.location_line()),
        sections,
    }
}

fn priority_tone(priority: Priority) -> Tone {
    match priority {
        Priority::High => Tone::Critical,
        Priority::Medium => Tone::Warning,
        Priority::Low => Tone::Good,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::AppConfig;

    fn registered(crops: &[&str]) -> App {
        let mut app = App::new(
            AppConfig {
                seed: Some(1),
                ..AppConfig::default()
            },
            Catalog::sample(),
        );
        let form = app.form_mut();
        form.name = "Asha".into();
        form.phone = "9999999999".into();
        form.state = "Punjab".into();
        form.village = "Khanna".into();
        for crop in crops {
            form.toggle_crop(crop);
        }
        assert!(app.submit_registration());
        app
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 30).expect("valid date")
    }

    #[test]
    fn calendar_rolls_over_the_year() {
        let app = registered(&["Wheat", "Rice", "Maize", "Pulses"]);
        let profile = app.session().profile().expect("registered");
        let view = view(&app, profile, today());
        let calendar = view.section("Crop Calendar").expect("calendar");
        assert_eq!(calendar.lines.len(), 3);
        assert!(calendar.lines[0].text.contains("02 Jan 2025"));
    }

    #[test]
    fn alerts_are_capped_and_regional() {
        let app = registered(&["Wheat"]);
        let profile = app.session().profile().expect("registered");
        let view = view(&app, profile, today());
        let alerts = view.section("Important Alerts").expect("alerts");
        assert!(!alerts.lines.is_empty());
        assert!(alerts.lines.len() <= 2);
    }

    #[test]
    fn quick_actions_skip_the_dashboard() {
        let app = registered(&[]);
        let profile = app.session().profile().expect("registered");
        let view = view(&app, profile, today());
        let actions = view.section("Quick Actions").expect("actions");
        assert_eq!(actions.lines.len(), 4);
        assert!(view.section("Crop Calendar").is_none());
        assert_eq!(view.subtitle, "📍 Khanna, Punjab");
    }
}
