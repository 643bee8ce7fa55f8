// SPDX-License-Identifier: PMPL-1.0-or-later

//! Configuration and catalog files on disk

use kisan_mitra::app::App;
use kisan_mitra::catalog::Catalog;
use kisan_mitra::config::{AppConfig, ConfigSource};
use kisan_mitra::i18n::Lang;
use kisan_mitra::screens::render;
use kisan_mitra::session::Screen;
use std::fs;
use std::time::Instant;

const SMALL_CATALOG: &str = r#"
crop_recommendations:
  - crop: Wheat
    icon: "🌾"
    region: Punjab
    recommendation: Irrigate before the first frost.
    priority: high
    season: Rabi
weather:
  - location: Punjab
    current:
      temperature: 12
      humidity: 70
      rainfall: 0.0
      wind_speed: 5
      condition: clear
      farming_advice: Good time for sowing.
    forecast: []
alerts:
  - title: Frost
    message: Cover seedlings overnight.
    priority: medium
    region: All India
    icon: "❄️"
"#;

#[test]
fn test_config_points_at_custom_catalog() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("catalog.yaml"), SMALL_CATALOG).expect("write catalog");
    fs::write(
        dir.path().join("kisan-mitra.yaml"),
        "language: hi\ncatalog: catalog.yaml\nrecommendation_limit: 1\n",
    )
    .expect("write config");

    let (config, source) =
        AppConfig::discover(None, None, dir.path()).expect("config should load");
    assert!(matches!(source, ConfigSource::WorkingDir(_)));
    assert_eq!(config.language, Lang::Hi);

    let catalog = Catalog::load_or_sample(config.catalog.as_deref()).expect("catalog should load");
    assert_eq!(catalog.record_count(), 3);
    assert!(catalog.pests.is_empty());

    let mut app = App::new(config, catalog);
    let form = app.form_mut();
    form.name = "Gurpreet".into();
    form.phone = "98".into();
    form.state = "punjab".into();
    assert!(app.submit_registration());

    let view = render(&app, Instant::now());
    assert_eq!(view.screen, Screen::Dashboard);
    let alerts = view.section("महत्वपूर्ण अलर्ट").expect("alerts section");
    assert!(alerts.lines[0].text.contains("Frost"));
}

#[test]
fn test_empty_pest_catalog_reports_no_issues() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.yml");
    fs::write(&path, SMALL_CATALOG).expect("write catalog");
    let catalog = Catalog::from_file(&path).expect("catalog should load");

    let config = AppConfig {
        seed: Some(3),
        analysis_delay_ms: 0,
        ..AppConfig::default()
    };
    let mut app = App::new(config, catalog);
    let form = app.form_mut();
    form.name = "Gurpreet".into();
    form.phone = "98".into();
    form.state = "Punjab".into();
    assert!(app.submit_registration());
    app.navigate(Screen::PestDetection);

    let now = Instant::now();
    app.submit_image("field.jpg", vec![0xFF, 0xD8, 0xFF], now);
    assert!(app.tick(now));
    let view = render(&app, now);
    let diagnosis = view.section("Diagnosis Result").expect("diagnosis section");
    assert!(diagnosis.lines[0].text.contains("No issues detected"));
}

#[test]
fn test_broken_config_is_reported_with_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ not json").expect("write");
    let err = AppConfig::discover(Some(&path), None, dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains("bad.json"));
}
