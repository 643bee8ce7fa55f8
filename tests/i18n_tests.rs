// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localization table behaviour through the public API

use kisan_mitra::error::I18nError;
use kisan_mitra::i18n::{language_name, resolve, t, try_resolve, Lang, Msg};

#[test]
fn test_every_key_resolves_non_empty_in_every_language() {
    for lang in Lang::all() {
        for msg in Msg::ALL {
            let text = resolve(lang.code(), msg.key());
            assert!(!text.is_empty(), "{} empty in {}", msg.key(), lang.code());
            assert_eq!(text, t(*lang, *msg));
        }
    }
}

#[test]
fn test_unknown_language_reads_as_english() {
    assert_eq!(resolve("fr", "dashboard.welcome"), "Welcome back");
    assert_eq!(resolve("", "nav.weather"), "Weather");
}

#[test]
fn test_unknown_key_is_returned_verbatim() {
    assert_eq!(resolve("hi", "dashboard.no_such_key"), "dashboard.no_such_key");
    assert_eq!(
        try_resolve("hi", "dashboard.no_such_key"),
        Err(I18nError::MissingTranslationKey {
            lang: "hi".into(),
            key: "dashboard.no_such_key".into(),
        })
    );
}

#[test]
fn test_partial_languages_translate_chrome_only() {
    assert_ne!(t(Lang::Te, Msg::NavWeather), t(Lang::En, Msg::NavWeather));
    assert_eq!(t(Lang::Te, Msg::WeatherTitle), t(Lang::En, Msg::WeatherTitle));
}

#[test]
fn test_language_codes() {
    assert!(Lang::parse("xx").is_err());
    assert_eq!(Lang::parse("HI").ok(), Some(Lang::Hi));
    for lang in Lang::all() {
        assert!(language_name(lang.code()).is_some());
    }
    assert!(matches!(
        Lang::parse("gu"),
        Err(I18nError::UntranslatedLanguage { name: "Gujarati", .. })
    ));
}
