// SPDX-License-Identifier: PMPL-1.0-or-later

//! View router state machine

use kisan_mitra::i18n::Lang;
use kisan_mitra::registration::RegistrationForm;
use kisan_mitra::session::{Action, Screen, Session};

fn form() -> RegistrationForm {
    RegistrationForm {
        name: "Asha".into(),
        phone: "9999999999".into(),
        state: "Punjab".into(),
        main_crops: vec!["Wheat".into()],
        ..Default::default()
    }
}

#[test]
fn test_navigation_without_profile_stays_on_registration() {
    for screen in Screen::member_screens() {
        let session = Session::new(Lang::En).reduce(Action::Navigate(*screen));
        assert_eq!(session.screen(), Screen::Registration);
        assert!(!session.is_registered());
    }
}

#[test]
fn test_logout_from_any_screen_blocks_navigation() {
    for screen in Screen::member_screens() {
        let session = Session::new(Lang::Hi)
            .reduce(Action::SubmitRegistration(form()))
            .reduce(Action::Navigate(*screen));
        assert_eq!(session.screen(), *screen);

        let session = session.reduce(Action::Logout);
        assert_eq!(session.screen(), Screen::Registration);
        assert!(session.profile().is_none());

        let session = session.reduce(Action::Navigate(Screen::Dashboard));
        assert_eq!(session.screen(), Screen::Registration);
    }
}

#[test]
fn test_blank_phone_is_rejected() {
    let mut incomplete = form();
    incomplete.phone = " ".into();
    let session = Session::default().reduce(Action::SubmitRegistration(incomplete));
    assert_eq!(session.screen(), Screen::Registration);
    assert_eq!(session.registration_errors().len(), 1);
}

#[test]
fn test_reducer_leaves_previous_value_untouched() {
    let before = Session::default().reduce(Action::SubmitRegistration(form()));
    let after = before.clone().reduce(Action::Navigate(Screen::MarketPrices));
    assert_eq!(before.screen(), Screen::Dashboard);
    assert_eq!(after.screen(), Screen::MarketPrices);
}

#[test]
fn test_profile_cannot_be_replaced_while_registered() {
    let mut other = form();
    other.name = "Mallory".into();
    other.state = "Gujarat".into();
    let session = Session::new(Lang::En)
        .reduce(Action::SubmitRegistration(form()))
        .reduce(Action::Navigate(Screen::Weather))
        .reduce(Action::SubmitRegistration(other));
    assert_eq!(session.screen(), Screen::Weather);
    let profile = session.profile().expect("still registered");
    assert_eq!(profile.name, "Asha");
    assert_eq!(profile.state, "Punjab");
}
