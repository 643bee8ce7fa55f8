// SPDX-License-Identifier: PMPL-1.0-or-later

//! `doctor`: a self-check of configuration, catalog and translations.

use crate::catalog::Catalog;
use crate::config::{AppConfig, ConfigSource};
use crate::i18n::{coverage, Lang};
use crate::matcher::CropScoped;
use crate::registration::{CROPS, STATES};
use anyhow::{anyhow, Result};
use colored::*;

pub fn run_self_diagnostics(
    config: &AppConfig,
    source: &ConfigSource,
    catalog: &Result<Catalog>,
) -> Result<()> {
    println!("{}", "kisan-mitra self-diagnostics".bold());

    let checks = collect(config, source, catalog);
    println!();
    for entry in &checks {
        entry.print();
    }

    if checks
        .iter()
        .any(|entry| matches!(entry.level, Level::Error))
    {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

fn collect(config: &AppConfig, source: &ConfigSource, catalog: &Result<Catalog>) -> Vec<Diagnostic> {
    let mut checks = vec![
        Diagnostic::ok("version", format!("kisan-mitra {}", env!("CARGO_PKG_VERSION"))),
        Diagnostic::ok("config", source.to_string()),
        Diagnostic::ok(
            "language",
            format!("{} ({})", config.language.code(), config.language.native_name()),
        ),
        match config.seed {
            Some(seed) => Diagnostic::ok("random seed", format!("fixed at {seed}")),
            None => Diagnostic::ok("random seed", "drawn per run".to_string()),
        },
    ];

    match catalog {
        Ok(catalog) => {
            let origin = match &config.catalog {
                Some(path) => path.display().to_string(),
                None => "built-in sample".to_string(),
            };
            checks.push(Diagnostic::ok(
                "catalog",
                format!("{} records from {}", catalog.record_count(), origin),
            ));
            for (label, count) in catalog.summary() {
                if count == 0 {
                    checks.push(Diagnostic::warning("catalog section", format!("no {label}")));
                }
            }
            checks.push(check_weather(catalog));
            checks.push(check_prices(catalog));
        }
        Err(err) => checks.push(Diagnostic::error("catalog", format!("{err:#}"))),
    }

    for lang in Lang::all() {
        checks.push(check_translations(*lang));
    }
    checks
}

fn check_translations(lang: Lang) -> Diagnostic {
    let (own, total) = coverage(lang);
    let detail = format!("{} ({}): {}/{} messages", lang.code(), lang.native_name(), own, total);
    if own == total {
        Diagnostic::ok("translations", detail)
    } else {
        Diagnostic::warning(
            "translations",
            format!("{detail}, {} fall back to English", total - own),
        )
    }
}

fn check_weather(catalog: &Catalog) -> Diagnostic {
    let missing: Vec<&str> = STATES
        .iter()
        .copied()
        .filter(|state| !catalog.weather.iter().any(|w| w.location.is(state)))
        .collect();
    if missing.is_empty() {
        Diagnostic::ok("weather coverage", "every state has a report".to_string())
    } else {
        Diagnostic::warning(
            "weather coverage",
            format!("first report shown for {}", missing.join(", ")),
        )
    }
}

fn check_prices(catalog: &Catalog) -> Diagnostic {
    let missing: Vec<&str> = CROPS
        .iter()
        .copied()
        .filter(|crop| !catalog.market_prices.iter().any(|p| p.concerns_crop(crop)))
        .collect();
    if missing.is_empty() {
        Diagnostic::ok("market coverage", "every crop has a price".to_string())
    } else {
        Diagnostic::warning("market coverage", format!("no price for {}", missing.join(", ")))
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Level {
    Ok,
    Warn,
    Error,
}

struct Diagnostic {
    label: &'static str,
    level: Level,
    detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        let tag = match self.level {
            Level::Ok => self.level.tag().green(),
            Level::Warn => self.level.tag().yellow(),
            Level::Error => self.level.tag().red().bold(),
        };
        println!("  [{}] {:20} {}", tag, self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels<'a>(checks: &'a [Diagnostic], label: &str) -> Vec<&'a Level> {
        checks
            .iter()
            .filter(|c| c.label == label)
            .map(|c| &c.level)
            .collect()
    }

    #[test]
    fn sample_catalog_has_gaps_but_no_errors() {
        let checks = collect(&AppConfig::default(), &ConfigSource::Defaults, &Ok(Catalog::sample()));
        assert!(checks.iter().all(|c| c.level != Level::Error));
        // only Maharashtra and Punjab carry weather in the sample
        assert_eq!(levels(&checks, "weather coverage"), vec![&Level::Warn]);
        let coverage = checks
            .iter()
            .find(|c| c.label == "market coverage")
            .expect("market coverage");
        assert!(coverage.detail.contains("Groundnut"));
    }

    #[test]
    fn partial_languages_warn() {
        let checks = collect(&AppConfig::default(), &ConfigSource::Defaults, &Ok(Catalog::sample()));
        assert_eq!(
            levels(&checks, "translations"),
            vec![&Level::Ok, &Level::Ok, &Level::Warn, &Level::Warn]
        );
    }

    #[test]
    fn unreadable_catalog_is_an_error() {
        let checks = collect(
            &AppConfig::default(),
            &ConfigSource::Defaults,
            &Err(anyhow!("reading catalog missing.yaml")),
        );
        assert_eq!(levels(&checks, "catalog"), vec![&Level::Error]);
    }
}
