// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for kisan-mitra
//!
//! The farmer profile and every kind of catalog record shown on the
//! screens. Catalog records are read-only reference data; nothing in the
//! crate mutates them after the catalog is built.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Region tag carried by catalog records.
///
/// Data files spell the wildcard either `"All"` (alerts) or `"All India"`
/// (market prices); both decode to [`Region::All`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Region {
    All,
    Named(String),
}

impl Region {
    pub fn named(name: impl Into<String>) -> Self {
        Region::Named(name.into())
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Region::All)
    }

    /// Exact match on a specific region name. The wildcard never matches here.
    pub fn is(&self, name: &str) -> bool {
        match self {
            Region::All => false,
            Region::Named(own) => own == name,
        }
    }

    /// Match honouring the wildcard.
    pub fn covers(&self, name: &str) -> bool {
        self.is_wildcard() || self.is(name)
    }
}

impl From<String> for Region {
    fn from(value: String) -> Self {
        match value.trim() {
            "All" | "All India" | "*" => Region::All,
            name => Region::Named(name.to_string()),
        }
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        match region {
            Region::All => "All".to_string(),
            Region::Named(name) => name,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::All => write!(f, "All"),
            Region::Named(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn icon(&self) -> &'static str {
        match self {
            Trend::Up => "📈",
            Trend::Down => "📉",
            Trend::Stable => "➡️",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
    PartlyCloudy,
    Clear,
}

impl Condition {
    pub fn icon(&self) -> &'static str {
        match self {
            Condition::Sunny => "☀️",
            Condition::Cloudy => "☁️",
            Condition::Rainy => "🌧️",
            Condition::Stormy => "⛈️",
            Condition::PartlyCloudy => "⛅",
            Condition::Clear => "🌙",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketStatus {
    Open,
    Closed,
}

/// Soil types offered at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    #[serde(rename = "Black Soil")]
    Black,
    #[serde(rename = "Red Soil")]
    Red,
    #[serde(rename = "Alluvial Soil")]
    Alluvial,
    #[serde(rename = "Laterite Soil")]
    Laterite,
    #[serde(rename = "Desert Soil")]
    Desert,
    #[serde(rename = "Mountain Soil")]
    Mountain,
}

impl SoilType {
    pub fn all() -> &'static [SoilType] {
        &[
            SoilType::Black,
            SoilType::Red,
            SoilType::Alluvial,
            SoilType::Laterite,
            SoilType::Desert,
            SoilType::Mountain,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SoilType::Black => "Black Soil",
            SoilType::Red => "Red Soil",
            SoilType::Alluvial => "Alluvial Soil",
            SoilType::Laterite => "Laterite Soil",
            SoilType::Desert => "Desert Soil",
            SoilType::Mountain => "Mountain Soil",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let wanted = value.trim();
        Self::all().iter().copied().find(|soil| {
            soil.label().eq_ignore_ascii_case(wanted)
                || soil
                    .label()
                    .split_whitespace()
                    .next()
                    .is_some_and(|head| head.eq_ignore_ascii_case(wanted))
        })
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A registered farmer. Built only by a successful registration submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub phone: String,
    pub state: String,
    pub district: String,
    pub village: String,
    pub land_size: Option<f64>,
    pub soil_type: Option<SoilType>,
    pub main_crops: Vec<String>,
    pub experience_years: Option<u32>,
}

impl UserProfile {
    /// "village, district, state" with blank parts skipped.
    pub fn location_line(&self) -> String {
        [self.village.as_str(), self.district.as_str(), self.state.as_str()]
            .iter()
            .filter(|part| !part.trim().is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub crop: String,
    pub icon: String,
    pub region: Region,
    pub recommendation: String,
    pub priority: Priority,
    pub season: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PestEntry {
    pub name: String,
    pub icon: String,
    pub description: String,
    pub affected_crops: Vec<String>,
    pub treatment: String,
    pub prevention: String,
    /// Displayed confidence, in percent.
    pub confidence: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPrice {
    pub crop: String,
    pub icon: String,
    /// Rupees per quintal.
    pub current_price: u32,
    pub previous_price: u32,
    pub trend: Trend,
    pub market: String,
    pub region: Region,
}

impl MarketPrice {
    pub fn change(&self) -> i64 {
        i64::from(self.current_price) - i64::from(self.previous_price)
    }

    pub fn change_percent(&self) -> f64 {
        if self.previous_price == 0 {
            return 0.0;
        }
        self.change() as f64 * 100.0 / f64::from(self.previous_price)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Degrees Celsius.
    pub temperature: i32,
    /// Percent.
    pub humidity: u8,
    /// Millimetres.
    pub rainfall: f32,
    /// km/h.
    pub wind_speed: u32,
    pub condition: Condition,
    pub farming_advice: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub day: String,
    pub high: i32,
    pub low: i32,
    pub condition: Condition,
    pub rainfall: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: Region,
    pub current: CurrentWeather,
    pub forecast: Vec<DailyForecast>,
    #[serde(default)]
    pub alerts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyMarket {
    pub name: String,
    pub distance_km: u32,
    pub status: MarketStatus,
    pub timing: String,
    pub state: Region,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmAlert {
    pub title: String,
    pub message: String,
    pub priority: Priority,
    pub region: Region,
    pub icon: String,
}
