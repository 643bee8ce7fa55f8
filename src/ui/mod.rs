// SPDX-License-Identifier: PMPL-1.0-or-later

//! Frontends: console printer, export formats, terminal UI and desktop GUI

pub mod formatter;
pub mod gui;
pub mod output;
pub mod tui;

pub use formatter::ViewFormatter;
pub use gui::FarmGui;
pub use output::ViewFormat;
pub use tui::Tui;
