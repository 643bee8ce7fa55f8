// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for kisan-mitra.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | en   | English  | English     |
//! | hi   | Hindi    | हिंदी        |
//! | ta   | Tamil    | தமிழ்        |
//! | te   | Telugu   | తెలుగు       |
//!
//! ## Design
//!
//! Messages are a typed enum, [`Msg`]. English is an exhaustive `match`, so
//! adding a message without an English string does not compile. The other
//! languages are partial tables that fall back to English. The string API,
//! [`resolve`], returns the key itself when even English has nothing, so the
//! UI never shows an empty label.
//!
//! Application chrome is translated into all four languages; screen texts
//! exist in English and Hindi.

mod catalog;
mod iso639;

pub use catalog::{coverage, has_translation, resolve, t, try_resolve, Lang, Msg};
pub use iso639::{language_name, native_name};
