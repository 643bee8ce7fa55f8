// SPDX-License-Identifier: PMPL-1.0-or-later

use super::{Line, Section, Tone, View};
use crate::app::App;
use crate::i18n::{t, Msg};
use crate::matcher::find_for_region_or_first;
use crate::session::Screen;
use crate::types::UserProfile;

/// Advice and status badge for the first, second and third crop.
const CROP_ADVICE: [(&str, &str, Tone); 3] = [
    ("Good weather for growth - continue regular care", "✅ Good", Tone::Good),
    ("Monitor for pests due to humidity - spray if needed", "⚠️ Monitor", Tone::Warning),
    ("Consider harvesting before expected rain", "🌧️ Plan", Tone::Accent),
];

/// Tone of a farming-advice sentence, judged by its wording.
pub fn advice_tone(advice: &str) -> Tone {
    if advice.contains("Good") || advice.contains("अच्छी") {
        Tone::Good
    } else if advice.contains("Consider") || advice.contains("विचार") {
        Tone::Warning
    } else {
        Tone::Critical
    }
}

pub(super) fn view(app: &App, profile: &UserProfile) -> View {
    let lang = app.lang();
    let mut sections = Vec::new();

    match find_for_region_or_first(&app.catalog().weather, &profile.state) {
        Some(report) => {
            let mut alerts = Section::new(t(lang, Msg::WeatherAlerts));
            for alert in &report.alerts {
                alerts.push(Line::new(format!("⚠️ {alert}"), Tone::Warning));
            }
            if alerts.lines.is_empty() {
                alerts.push(Line::muted(t(lang, Msg::WeatherNoAlerts)));
            }
            sections.push(alerts);

            let now = &report.current;
            sections.push(
                Section::new(format!("{} · {}", t(lang, Msg::WeatherCurrent), report.location))
                    .with(Line::new(
                        format!(
                            "{} {}: {}°C",
                            now.condition.icon(),
                            t(lang, Msg::WeatherTemperature),
                            now.temperature
                        ),
                        Tone::Accent,
                    ))
                    .with(Line::plain(format!("💧 {}: {}%", t(lang, Msg::WeatherHumidity), now.humidity)))
                    .with(Line::plain(format!("🌧️ {}: {} mm", t(lang, Msg::WeatherRainfall), now.rainfall)))
                    .with(Line::plain(format!(
                        "💨 {}: {} km/h",
                        t(lang, Msg::WeatherWindSpeed),
                        now.wind_speed
                    ))),
            );

            sections.push(
                Section::new(t(lang, Msg::WeatherFarmingAdvice))
                    .with(Line::new(now.farming_advice.clone(), advice_tone(&now.farming_advice))),
            );

            let mut forecast = Section::new(t(lang, Msg::WeatherForecast));
            for day in &report.forecast {
                forecast.push(Line::plain(format!(
                    "{:<9} {} {}°/{}° · 💧 {} mm",
                    day.day,
                    day.condition.icon(),
                    day.high,
                    day.low,
                    day.rainfall
                )));
            }
            sections.push(forecast);
        }
        None => sections.push(
            Section::new(t(lang, Msg::WeatherCurrent)).with(Line::muted("-")),
        ),
    }

    let mut crop_advice = Section::new(t(lang, Msg::WeatherCropAdvice));
    for (crop, (advice, badge, tone)) in profile.main_crops.iter().zip(CROP_ADVICE) {
        crop_advice.push(Line::new(format!("{crop}: {advice} [{badge}]"), tone));
    }
    if !crop_advice.lines.is_empty() {
        sections.push(crop_advice);
    }

    View {
        screen: Screen::Weather,
        title: t(lang, Msg::WeatherTitle).to_string(),
        subtitle: t(lang, Msg::WeatherSubtitle).to_string(),
        sections,
    }
}
