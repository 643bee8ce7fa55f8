// SPDX-License-Identifier: PMPL-1.0-or-later

//! Read-only reference data shown on every screen.
//!
//! The built-in sample catalog is used unless the configuration points at a
//! JSON or YAML file with the same shape. Either way the catalog is built
//! once and only ever borrowed afterwards.

mod sample;

use crate::error::CatalogError;
use crate::types::{
    CropRecommendation, FarmAlert, MarketPrice, NearbyMarket, PestEntry, WeatherReport,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Catalog {
    #[serde(default)]
    pub crop_recommendations: Vec<CropRecommendation>,
    #[serde(default)]
    pub pests: Vec<PestEntry>,
    #[serde(default)]
    pub market_prices: Vec<MarketPrice>,
    #[serde(default)]
    pub weather: Vec<WeatherReport>,
    #[serde(default)]
    pub nearby_markets: Vec<NearbyMarket>,
    #[serde(default)]
    pub alerts: Vec<FarmAlert>,
}

impl Catalog {
    /// The sample content the application ships with.
    pub fn sample() -> Self {
        sample::build()
    }

    /// Use `path` when given, otherwise the sample catalog.
    ///
    /// A catalog file that cannot be read is an error rather than a silent
    /// fallback: the user asked for it explicitly.
    pub fn load_or_sample(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::sample()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        let catalog: Catalog = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json catalog {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml catalog {}", path.display()))?,
            _ => return Err(CatalogError::UnsupportedFormat(path.display().to_string()).into()),
        };
        catalog.check()?;
        tracing::debug!(
            path = %path.display(),
            records = catalog.record_count(),
            "loaded catalog file"
        );
        Ok(catalog)
    }

    /// The weather screen always needs something to show.
    fn check(&self) -> Result<(), CatalogError> {
        if self.weather.is_empty() {
            return Err(CatalogError::Empty("weather reports"));
        }
        Ok(())
    }

    pub fn record_count(&self) -> usize {
        self.crop_recommendations.len()
            + self.pests.len()
            + self.market_prices.len()
            + self.weather.len()
            + self.nearby_markets.len()
            + self.alerts.len()
    }

    /// (label, count) per record kind, for the self-check.
    pub fn summary(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("crop recommendations", self.crop_recommendations.len()),
            ("pests", self.pests.len()),
            ("market prices", self.market_prices.len()),
            ("weather reports", self.weather.len()),
            ("nearby markets", self.nearby_markets.len()),
            ("alerts", self.alerts.len()),
        ]
    }
}
