// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end tests: registration through every screen

use chrono::NaiveDate;
use kisan_mitra::app::App;
use kisan_mitra::catalog::Catalog;
use kisan_mitra::config::AppConfig;
use kisan_mitra::i18n::Lang;
use kisan_mitra::screens::{render, render_on, Tone};
use kisan_mitra::session::Screen;
use kisan_mitra::ui::ViewFormat;
use std::time::{Duration, Instant};

fn asha(lang: Lang) -> App {
    let config = AppConfig {
        language: lang,
        seed: Some(2024),
        analysis_delay_ms: 50,
        ..AppConfig::default()
    };
    let mut app = App::new(config, Catalog::sample());
    let form = app.form_mut();
    form.name = "Asha".into();
    form.phone = "9999999999".into();
    form.state = "Punjab".into();
    form.toggle_crop("Wheat");
    app
}

#[test]
fn test_registration_lands_on_dashboard_with_punjab_wheat_first() {
    let mut app = asha(Lang::En);
    assert!(app.submit_registration(), "Asha's form should be accepted");
    assert_eq!(app.session().screen(), Screen::Dashboard);

    let view = render(&app, Instant::now());
    let recommendations = view
        .section("Today's Recommendations")
        .expect("dashboard should list recommendations");
    let first = &recommendations.lines[0].text;
    assert!(first.contains("Wheat"), "first recommendation was {first}");
    assert!(first.contains("Rabi"), "Punjab wheat entry is the Rabi one: {first}");
}

#[test]
fn test_hindi_dashboard_heading() {
    let mut app = asha(Lang::Hi);
    assert!(app.submit_registration());
    let view = render(&app, Instant::now());
    assert!(
        view.title.starts_with("वापसी पर स्वागत है"),
        "heading was {}",
        view.title
    );
    assert!(view.title.contains("Asha"));
}

#[test]
fn test_tamil_falls_back_to_english_screens() {
    let mut app = asha(Lang::Ta);
    assert!(app.submit_registration());
    app.navigate(Screen::Weather);
    let view = render(&app, Instant::now());
    assert_eq!(view.title, "Weather Forecast");
}

#[test]
fn test_every_member_screen_renders() {
    let mut app = asha(Lang::En);
    assert!(app.submit_registration());
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
    for screen in Screen::member_screens() {
        app.navigate(*screen);
        let view = render_on(&app, Instant::now(), today);
        assert_eq!(view.screen, *screen);
        assert!(!view.title.is_empty());
        assert!(!view.sections.is_empty(), "{:?} rendered no sections", screen);
    }
}

#[test]
fn test_pest_scan_shows_diagnosis_after_delay() {
    let mut app = asha(Lang::En);
    assert!(app.submit_registration());
    app.navigate(Screen::PestDetection);
    let start = Instant::now();
    app.submit_image("leaf.png", vec![0x89, b'P', b'N', b'G'], start);

    let pending = render(&app, start);
    assert!(pending.sections[0]
        .lines
        .iter()
        .any(|line| line.text.contains("Analyzing")));
    assert!(pending.section("Diagnosis Result").is_none());

    let later = start + Duration::from_millis(50);
    assert!(app.tick(later));
    let done = render(&app, later);
    let diagnosis = done
        .section("Diagnosis Result")
        .expect("diagnosis should be shown once due");
    assert_eq!(diagnosis.lines[0].tone, Tone::Critical);
    assert!(diagnosis.lines.iter().any(|l| l.text.contains('%')));

    app.reset_analysis();
    assert!(render(&app, later).section("Diagnosis Result").is_none());
}

#[test]
fn test_json_export_of_market_screen() {
    let mut app = asha(Lang::En);
    assert!(app.submit_registration());
    app.navigate(Screen::MarketPrices);
    let json = ViewFormat::Json
        .serialize(&render(&app, Instant::now()))
        .expect("view should serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["screen"], "market_prices");
    let nearby = value["sections"]
        .as_array()
        .expect("sections array")
        .iter()
        .find(|s| s["heading"] == "Nearby Markets")
        .expect("Punjab has a nearby market");
    assert_eq!(nearby["lines"].as_array().map(Vec::len), Some(1));
}

#[test]
fn test_market_prices_follow_the_farmers_state() {
    let mut app = asha(Lang::En);
    assert!(app.submit_registration());
    app.navigate(Screen::MarketPrices);
    let view = render(&app, Instant::now());
    let cards = view
        .section("Price per Quintal (₹)")
        .expect("market screen lists prices");
    assert_eq!(cards.lines.len(), 1);
    assert!(cards.lines[0].text.contains("Ludhiana Mandi"));
    assert!(cards.lines.iter().all(|l| !l.text.contains("Nashik")));
}
