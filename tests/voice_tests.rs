// SPDX-License-Identifier: PMPL-1.0-or-later

//! Voice command classification and answers

use chrono::Local;
use kisan_mitra::i18n::Lang;
use kisan_mitra::session::{Action, Session};
use kisan_mitra::voice::{classify, respond, ConversationTurn, Intent};

#[test]
fn test_fertilizer_outranks_price() {
    for lang in Lang::all() {
        assert_eq!(
            classify("fertilizer price this week", *lang),
            Intent::Fertilizer
        );
    }
    assert_eq!(classify("उर्वरक का भाव", Lang::Hi), Intent::Fertilizer);
}

#[test]
fn test_priority_order_is_fixed() {
    assert_eq!(classify("plant before the weather turns", Lang::En), Intent::Planting);
    assert_eq!(classify("pest prices", Lang::En), Intent::Pests);
    assert_eq!(classify("price of rain cover", Lang::En), Intent::Prices);
}

#[test]
fn test_case_is_ignored() {
    assert_eq!(classify("WEATHER TOMORROW?", Lang::En), Intent::Weather);
}

#[test]
fn test_unrecognised_question_gets_clarification() {
    assert_eq!(classify("hello there", Lang::En), Intent::Unknown);
    assert!(respond(Intent::Unknown, Lang::En).contains("rephrase"));
}

#[test]
fn test_hindi_answers_in_hindi() {
    let turn = ConversationTurn::answer("कीट कैसे रोकें?", Lang::Hi, Local::now());
    assert_eq!(turn.intent, Intent::Pests);
    assert!(turn.answer.contains("नीम"));
}

#[test]
fn test_history_survives_logout_until_cleared() {
    let turn = ConversationTurn::answer("price?", Lang::En, Local::now());
    let session = Session::default()
        .reduce(Action::RecordTurn(turn))
        .reduce(Action::Logout);
    assert_eq!(session.conversation().len(), 1);
    let session = session.reduce(Action::ClearConversation);
    assert!(session.conversation().is_empty());
}

#[test]
fn test_hindi_question_is_understood_in_an_english_session() {
    assert_eq!(classify("आज मौसम कैसा है", Lang::En), Intent::Weather);
    let turn = ConversationTurn::answer("Will it rain tomorrow?", Lang::En, Local::now());
    assert_eq!(turn.intent, Intent::Unknown);
    assert!(turn.answer.starts_with("I'd be happy"));
}
