// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization of printed/exported views

use crate::screens::View;
use crate::ui::formatter::ViewFormatter;
use anyhow::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ViewFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl ViewFormat {
    pub fn serialize(&self, view: &View) -> Result<String> {
        match self {
            ViewFormat::Text => Ok(ViewFormatter::new().format(view)),
            ViewFormat::Json => Ok(serde_json::to_string_pretty(view)?),
            ViewFormat::Yaml => Ok(serde_yaml::to_string(view)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::{Line, Section, Tone};
    use crate::session::Screen;

    fn view() -> View {
        View {
            screen: Screen::Weather,
            title: "Weather Forecast".into(),
            subtitle: String::new(),
            sections: vec![Section::new("Weather Alerts").with(Line::new("Heavy rain", Tone::Warning))],
        }
    }

    #[test]
    fn json_export_uses_snake_case_names() {
        let json = ViewFormat::Json.serialize(&view()).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["screen"], "weather");
        assert_eq!(value["sections"][0]["lines"][0]["tone"], "warning");
    }

    #[test]
    fn yaml_export_keeps_text() {
        let yaml = ViewFormat::Yaml.serialize(&view()).expect("yaml");
        assert!(yaml.contains("Heavy rain"));
    }
}
