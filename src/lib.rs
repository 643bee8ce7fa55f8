// SPDX-License-Identifier: PMPL-1.0-or-later

//! Kisan Mitra: a multilingual farmer assistant.
//!
//! A farmer registers once (name, phone, state, crops) and then moves
//! between five screens: dashboard, pest detection, market prices, weather
//! and a voice assistant. All content comes from a read-only catalog that
//! is projected onto the farmer's profile; pest diagnosis and voice
//! recognition are simulated with delayed, seeded random picks.
//!
//! LAYERS:
//! 1. **Core**: [`i18n`], [`matcher`], [`session`], [`diagnosis`],
//!    [`voice`]. Pure, synchronous, driven by explicit time.
//! 2. **Driver**: [`app::App`] owns the session and the simulated tasks.
//! 3. **Views**: [`screens`] renders each screen to a localized
//!    [`screens::View`], consumed by the [`ui`] frontends.

pub mod app;
pub mod catalog;
pub mod config;
pub mod diagnosis;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod matcher;
pub mod random;
pub mod registration;
pub mod schedule;
pub mod screens;
pub mod session;
pub mod types;
pub mod ui;
pub mod voice;
