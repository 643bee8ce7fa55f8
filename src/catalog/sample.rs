// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in sample content.

use super::Catalog;
use crate::types::{
    Condition, CropRecommendation, CurrentWeather, DailyForecast, FarmAlert, MarketPrice,
    MarketStatus, NearbyMarket, PestEntry, Priority, Region, Trend, WeatherReport,
};

pub(super) fn build() -> Catalog {
    Catalog {
        crop_recommendations: crop_recommendations(),
        pests: pests(),
        market_prices: market_prices(),
        weather: weather(),
        nearby_markets: nearby_markets(),
        alerts: alerts(),
    }
}

fn crops(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn recommendation(
    crop: &str,
    icon: &str,
    region: &str,
    text: &str,
    priority: Priority,
    season: &str,
) -> CropRecommendation {
    CropRecommendation {
        crop: crop.to_string(),
        icon: icon.to_string(),
        region: Region::named(region),
        recommendation: text.to_string(),
        priority,
        season: season.to_string(),
    }
}

fn crop_recommendations() -> Vec<CropRecommendation> {
    vec![
        recommendation(
            "Rice",
            "🌾",
            "Maharashtra",
            "Apply 120 kg/ha of NPK fertilizer. Monitor water levels carefully during monsoon season.",
            Priority::High,
            "Kharif",
        ),
        recommendation(
            "Cotton",
            "🌱",
            "Gujarat",
            "Use drip irrigation system. Apply organic manure before planting for better yield.",
            Priority::Medium,
            "Kharif",
        ),
        recommendation(
            "Wheat",
            "🌾",
            "Punjab",
            "Sow seeds at 2-3 cm depth. Apply urea in split doses for optimal growth.",
            Priority::High,
            "Rabi",
        ),
        recommendation(
            "Sugarcane",
            "🎋",
            "Uttar Pradesh",
            "Maintain soil moisture at 70-80%. Apply potash fertilizer during growth phase.",
            Priority::Medium,
            "Annual",
        ),
        recommendation(
            "Maize",
            "🌽",
            "Karnataka",
            "Plant during pre-monsoon. Use hybrid seeds for better disease resistance.",
            Priority::Low,
            "Kharif",
        ),
    ]
}

fn pest(
    name: &str,
    icon: &str,
    description: &str,
    affected: &[&str],
    treatment: &str,
    prevention: &str,
    confidence: u8,
) -> PestEntry {
    PestEntry {
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        affected_crops: crops(affected),
        treatment: treatment.to_string(),
        prevention: prevention.to_string(),
        confidence,
    }
}

fn pests() -> Vec<PestEntry> {
    vec![
        pest(
            "Brown Planthopper",
            "🐛",
            "Small brown insects that suck plant juices, causing yellowing and stunted growth.",
            &["Rice", "Wheat"],
            "Spray neem oil solution or use imidacloprid-based insecticides.",
            "Maintain proper plant spacing and avoid excessive nitrogen fertilization.",
            92,
        ),
        pest(
            "Bollworm",
            "🐛",
            "Caterpillars that bore into cotton bolls, causing significant yield loss.",
            &["Cotton", "Tomato"],
            "Use Bt cotton varieties or spray with Bacillus thuringiensis.",
            "Regular monitoring and pheromone traps for early detection.",
            88,
        ),
        pest(
            "Stem Borer",
            "🐛",
            "Larvae bore into plant stems, causing dead hearts and white ears.",
            &["Rice", "Maize", "Sugarcane"],
            "Apply carbofuran granules or use biological control with Trichogramma.",
            "Remove crop residues and maintain field hygiene.",
            85,
        ),
        pest(
            "Aphids",
            "🐛",
            "Small green insects that cluster on leaves and stems, transmitting viruses.",
            &["Wheat", "Mustard", "Pea"],
            "Spray with soap solution or use systemic insecticides like dimethoate.",
            "Encourage natural predators like ladybirds and lacewings.",
            90,
        ),
        pest(
            "Leaf Spot",
            "🍃",
            "Fungal disease causing circular spots on leaves, leading to defoliation.",
            &["Rice", "Cotton", "Groundnut"],
            "Apply copper-based fungicides or mancozeb spray.",
            "Ensure proper drainage and avoid overhead irrigation.",
            87,
        ),
        pest(
            "Powdery Mildew",
            "🍃",
            "White powdery fungal growth on leaves, reducing photosynthesis.",
            &["Wheat", "Pea", "Grape"],
            "Spray with sulfur-based fungicides or potassium bicarbonate solution.",
            "Maintain proper air circulation and avoid overcrowding.",
            89,
        ),
    ]
}

fn price(
    crop: &str,
    icon: &str,
    current: u32,
    previous: u32,
    trend: Trend,
    market: &str,
    region: &str,
) -> MarketPrice {
    MarketPrice {
        crop: crop.to_string(),
        icon: icon.to_string(),
        current_price: current,
        previous_price: previous,
        trend,
        market: market.to_string(),
        region: Region::named(region),
    }
}

fn market_prices() -> Vec<MarketPrice> {
    vec![
        price("Rice", "🌾", 1850, 1820, Trend::Up, "Nashik APMC", "Maharashtra"),
        price("Wheat", "🌾", 2150, 2180, Trend::Down, "Ludhiana Mandi", "Punjab"),
        price(
            "Cotton",
            "🌱",
            5200,
            5150,
            Trend::Up,
            "Ahmedabad Cotton Market",
            "Gujarat",
        ),
        price(
            "Sugarcane",
            "🎋",
            320,
            325,
            Trend::Down,
            "Muzaffarnagar Sugar Mill",
            "Uttar Pradesh",
        ),
        price("Maize", "🌽", 1680, 1680, Trend::Stable, "Bangalore APMC", "Karnataka"),
        price("Soybean", "🫘", 4200, 4150, Trend::Up, "Indore Mandi", "Madhya Pradesh"),
    ]
}

fn day(day: &str, high: i32, low: i32, condition: Condition, rainfall: f32) -> DailyForecast {
    DailyForecast {
        day: day.to_string(),
        high,
        low,
        condition,
        rainfall,
    }
}

fn weather() -> Vec<WeatherReport> {
    vec![
        WeatherReport {
            location: Region::named("Maharashtra"),
            current: CurrentWeather {
                temperature: 28,
                humidity: 65,
                rainfall: 2.5,
                wind_speed: 12,
                condition: Condition::PartlyCloudy,
                farming_advice:
                    "Good conditions for rice transplanting. Monitor soil moisture levels."
                        .to_string(),
            },
            forecast: vec![
                day("Today", 28, 22, Condition::PartlyCloudy, 2.5),
                day("Tomorrow", 30, 23, Condition::Sunny, 0.0),
                day("Thu", 29, 24, Condition::Cloudy, 5.2),
                day("Fri", 27, 21, Condition::Rainy, 15.8),
                day("Sat", 26, 20, Condition::Rainy, 12.3),
                day("Sun", 28, 22, Condition::PartlyCloudy, 3.1),
                day("Mon", 31, 25, Condition::Sunny, 0.0),
            ],
            alerts: vec![
                "Heavy rainfall expected on Friday".to_string(),
                "Monitor for pest outbreaks due to humidity".to_string(),
            ],
        },
        WeatherReport {
            location: Region::named("Punjab"),
            current: CurrentWeather {
                temperature: 32,
                humidity: 45,
                rainfall: 0.0,
                wind_speed: 8,
                condition: Condition::Sunny,
                farming_advice:
                    "Consider irrigation for wheat crops. Good weather for harvesting."
                        .to_string(),
            },
            forecast: vec![
                day("Today", 32, 18, Condition::Sunny, 0.0),
                day("Tomorrow", 34, 19, Condition::Sunny, 0.0),
                day("Thu", 33, 20, Condition::PartlyCloudy, 0.0),
                day("Fri", 31, 17, Condition::Cloudy, 2.1),
                day("Sat", 29, 16, Condition::PartlyCloudy, 0.0),
                day("Sun", 30, 18, Condition::Sunny, 0.0),
                day("Mon", 33, 20, Condition::Sunny, 0.0),
            ],
            alerts: Vec::new(),
        },
    ]
}

fn market(name: &str, distance_km: u32, status: MarketStatus, timing: &str, state: &str) -> NearbyMarket {
    NearbyMarket {
        name: name.to_string(),
        distance_km,
        status,
        timing: timing.to_string(),
        state: Region::named(state),
    }
}

fn nearby_markets() -> Vec<NearbyMarket> {
    vec![
        market("Nashik APMC", 15, MarketStatus::Open, "6 AM - 6 PM", "Maharashtra"),
        market(
            "Pune Vegetable Market",
            45,
            MarketStatus::Open,
            "5 AM - 8 PM",
            "Maharashtra",
        ),
        market("Ludhiana Grain Mandi", 8, MarketStatus::Open, "7 AM - 5 PM", "Punjab"),
        market(
            "Ahmedabad Cotton Exchange",
            25,
            MarketStatus::Closed,
            "9 AM - 4 PM",
            "Gujarat",
        ),
    ]
}

fn alert(title: &str, message: &str, priority: Priority, region: Region, icon: &str) -> FarmAlert {
    FarmAlert {
        title: title.to_string(),
        message: message.to_string(),
        priority,
        region,
        icon: icon.to_string(),
    }
}

fn alerts() -> Vec<FarmAlert> {
    vec![
        alert(
            "Pest Alert",
            "Brown planthopper outbreak reported in nearby areas. Monitor your rice fields closely.",
            Priority::High,
            Region::named("Maharashtra"),
            "🚨",
        ),
        alert(
            "Weather Warning",
            "Heavy rainfall expected in the next 48 hours. Secure your crops and equipment.",
            Priority::High,
            Region::All,
            "⛈️",
        ),
        alert(
            "Market Update",
            "Cotton prices have increased by 5% this week. Good time to sell your produce.",
            Priority::Medium,
            Region::named("Gujarat"),
            "📈",
        ),
        alert(
            "Fertilizer Reminder",
            "Time for second dose of urea application for wheat crops.",
            Priority::Low,
            Region::named("Punjab"),
            "🧪",
        ),
    ]
}
