// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for kisan-mitra.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`] and its arms in `code()` / `from_code()`
//! 2. Create a `const XX: &[(Msg, &str)]` table below
//! 3. Add `Lang::Xx => XX` to the match in `table_for()`
//!
//! ## Adding a new message
//!
//! 1. Add the variant to [`Msg`], to `Msg::ALL` and to `Msg::key()`
//! 2. Add the English arm to `english()` (the compiler insists)
//! 3. Add translations to the tables; missing ones fall back to English

use crate::error::I18nError;
use serde::{Deserialize, Serialize};

/// Languages the interface can be shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Hi,
    Ta,
    Te,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Hi => "hi",
            Lang::Ta => "ta",
            Lang::Te => "te",
        }
    }

    /// Parse a lowercase ISO 639-1 code. `None` for anything we do not ship.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "hi" => Some(Lang::Hi),
            "ta" => Some(Lang::Ta),
            "te" => Some(Lang::Te),
            _ => None,
        }
    }

    /// Like [`Lang::from_code`], case-insensitive, reporting why a code
    /// was rejected.
    pub fn parse(code: &str) -> Result<Lang, I18nError> {
        let lower = code.trim().to_ascii_lowercase();
        if let Some(lang) = Lang::from_code(&lower) {
            return Ok(lang);
        }
        Err(match super::language_name(&lower) {
            Some(name) => I18nError::UntranslatedLanguage { code: lower, name },
            None => I18nError::UnsupportedLanguage(code.to_string()),
        })
    }

    /// All supported languages, in selector order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Hi, Lang::Ta, Lang::Te]
    }

    pub fn native_name(&self) -> &'static str {
        super::native_name(self.code()).unwrap_or("English")
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Lang {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::parse(s)
    }
}

/// Every user-facing message, grouped by screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Msg {
    // Application chrome
    AppName,
    AppWelcome,
    AppLanguage,
    Logout,
    NavDashboard,
    NavPestDetection,
    NavMarketPrices,
    NavWeather,
    NavVoice,
    // Registration
    RegTitle,
    RegSubtitle,
    RegName,
    RegPhone,
    RegState,
    RegDistrict,
    RegVillage,
    RegLandSize,
    RegSoilType,
    RegMainCrops,
    RegExperience,
    RegSubmit,
    RegRequired,
    RegNotANumber,
    RegUnknownChoice,
    // Dashboard
    DashWelcome,
    DashRecommendations,
    DashAlerts,
    DashSoilHealth,
    DashCropCalendar,
    DashQuickActions,
    DashViewDetails,
    DashNoAlerts,
    DashPriority,
    DashAcres,
    DashNextActivity,
    DashFertilization,
    DashPhLevel,
    DashMoisture,
    DashNutrients,
    DashOptimal,
    DashGood,
    DashBalanced,
    // Pest detection
    PestTitle,
    PestSubtitle,
    PestUploadImage,
    PestAnalyzing,
    PestCommonPests,
    PestDiagnosis,
    PestConfidence,
    PestTreatment,
    PestPrevention,
    PestTryAgain,
    PestNoDiagnosis,
    PestAffects,
    PestAffectsYourCrops,
    // Market prices
    MarketTitle,
    MarketSubtitle,
    MarketFilterByCrop,
    MarketAllCrops,
    MarketPricePerQuintal,
    MarketYesterday,
    MarketChange,
    MarketTrend,
    MarketBestSellingTime,
    MarketBestTimeHint,
    MarketExpectedPrice,
    MarketNearby,
    MarketNoPrices,
    MarketHigh,
    MarketLow,
    MarketStable,
    // Weather
    WeatherTitle,
    WeatherSubtitle,
    WeatherCurrent,
    WeatherForecast,
    WeatherAlerts,
    WeatherTemperature,
    WeatherHumidity,
    WeatherRainfall,
    WeatherWindSpeed,
    WeatherFarmingAdvice,
    WeatherNoAlerts,
    WeatherCropAdvice,
    // Voice assistant
    VoiceTitle,
    VoiceSubtitle,
    VoiceStartListening,
    VoiceStopListening,
    VoiceListening,
    VoiceCommonQuestions,
    VoiceClearHistory,
    VoiceNoHistory,
    VoiceHistory,
    VoiceYou,
    VoiceAssistant,
}

impl Msg {
    pub const ALL: &'static [Msg] = &[
        Msg::AppName,
        Msg::AppWelcome,
        Msg::AppLanguage,
        Msg::Logout,
        Msg::NavDashboard,
        Msg::NavPestDetection,
        Msg::NavMarketPrices,
        Msg::NavWeather,
        Msg::NavVoice,
        Msg::RegTitle,
        Msg::RegSubtitle,
        Msg::RegName,
        Msg::RegPhone,
        Msg::RegState,
        Msg::RegDistrict,
        Msg::RegVillage,
        Msg::RegLandSize,
        Msg::RegSoilType,
        Msg::RegMainCrops,
        Msg::RegExperience,
        Msg::RegSubmit,
        Msg::RegRequired,
        Msg::RegNotANumber,
        Msg::RegUnknownChoice,
        Msg::DashWelcome,
        Msg::DashRecommendations,
        Msg::DashAlerts,
        Msg::DashSoilHealth,
        Msg::DashCropCalendar,
        Msg::DashQuickActions,
        Msg::DashViewDetails,
        Msg::DashNoAlerts,
        Msg::DashPriority,
        Msg::DashAcres,
        Msg::DashNextActivity,
        Msg::DashFertilization,
        Msg::DashPhLevel,
        Msg::DashMoisture,
        Msg::DashNutrients,
        Msg::DashOptimal,
        Msg::DashGood,
        Msg::DashBalanced,
        Msg::PestTitle,
        Msg::PestSubtitle,
        Msg::PestUploadImage,
        Msg::PestAnalyzing,
        Msg::PestCommonPests,
        Msg::PestDiagnosis,
        Msg::PestConfidence,
        Msg::PestTreatment,
        Msg::PestPrevention,
        Msg::PestTryAgain,
        Msg::PestNoDiagnosis,
        Msg::PestAffects,
        Msg::PestAffectsYourCrops,
        Msg::MarketTitle,
        Msg::MarketSubtitle,
        Msg::MarketFilterByCrop,
        Msg::MarketAllCrops,
        Msg::MarketPricePerQuintal,
        Msg::MarketYesterday,
        Msg::MarketChange,
        Msg::MarketTrend,
        Msg::MarketBestSellingTime,
        Msg::MarketBestTimeHint,
        Msg::MarketExpectedPrice,
        Msg::MarketNearby,
        Msg::MarketNoPrices,
        Msg::MarketHigh,
        Msg::MarketLow,
        Msg::MarketStable,
        Msg::WeatherTitle,
        Msg::WeatherSubtitle,
        Msg::WeatherCurrent,
        Msg::WeatherForecast,
        Msg::WeatherAlerts,
        Msg::WeatherTemperature,
        Msg::WeatherHumidity,
        Msg::WeatherRainfall,
        Msg::WeatherWindSpeed,
        Msg::WeatherFarmingAdvice,
        Msg::WeatherNoAlerts,
        Msg::WeatherCropAdvice,
        Msg::VoiceTitle,
        Msg::VoiceSubtitle,
        Msg::VoiceStartListening,
        Msg::VoiceStopListening,
        Msg::VoiceListening,
        Msg::VoiceCommonQuestions,
        Msg::VoiceClearHistory,
        Msg::VoiceNoHistory,
        Msg::VoiceHistory,
        Msg::VoiceYou,
        Msg::VoiceAssistant,
    ];

    /// Dotted string key, used by [`resolve`] and in exported views.
    pub fn key(&self) -> &'static str {
        match self {
            Msg::AppName => "app.name",
            Msg::AppWelcome => "app.welcome",
            Msg::AppLanguage => "app.language",
            Msg::Logout => "app.logout",
            Msg::NavDashboard => "nav.dashboard",
            Msg::NavPestDetection => "nav.pest_detection",
            Msg::NavMarketPrices => "nav.market_prices",
            Msg::NavWeather => "nav.weather",
            Msg::NavVoice => "nav.voice",
            Msg::RegTitle => "registration.title",
            Msg::RegSubtitle => "registration.subtitle",
            Msg::RegName => "registration.name",
            Msg::RegPhone => "registration.phone",
            Msg::RegState => "registration.state",
            Msg::RegDistrict => "registration.district",
            Msg::RegVillage => "registration.village",
            Msg::RegLandSize => "registration.land_size",
            Msg::RegSoilType => "registration.soil_type",
            Msg::RegMainCrops => "registration.main_crops",
            Msg::RegExperience => "registration.experience",
            Msg::RegSubmit => "registration.submit",
            Msg::RegRequired => "registration.required",
            Msg::RegNotANumber => "registration.not_a_number",
            Msg::RegUnknownChoice => "registration.unknown_choice",
            Msg::DashWelcome => "dashboard.welcome",
            Msg::DashRecommendations => "dashboard.recommendations",
            Msg::DashAlerts => "dashboard.alerts",
            Msg::DashSoilHealth => "dashboard.soil_health",
            Msg::DashCropCalendar => "dashboard.crop_calendar",
            Msg::DashQuickActions => "dashboard.quick_actions",
            Msg::DashViewDetails => "dashboard.view_details",
            Msg::DashNoAlerts => "dashboard.no_alerts",
            Msg::DashPriority => "dashboard.priority",
            Msg::DashAcres => "dashboard.acres",
            Msg::DashNextActivity => "dashboard.next_activity",
            Msg::DashFertilization => "dashboard.fertilization",
            Msg::DashPhLevel => "dashboard.ph_level",
            Msg::DashMoisture => "dashboard.moisture",
            Msg::DashNutrients => "dashboard.nutrients",
            Msg::DashOptimal => "dashboard.optimal",
            Msg::DashGood => "dashboard.good",
            Msg::DashBalanced => "dashboard.balanced",
            Msg::PestTitle => "pest.title",
            Msg::PestSubtitle => "pest.subtitle",
            Msg::PestUploadImage => "pest.upload_image",
            Msg::PestAnalyzing => "pest.analyzing",
            Msg::PestCommonPests => "pest.common_pests",
            Msg::PestDiagnosis => "pest.diagnosis",
            Msg::PestConfidence => "pest.confidence",
            Msg::PestTreatment => "pest.treatment",
            Msg::PestPrevention => "pest.prevention",
            Msg::PestTryAgain => "pest.try_again",
            Msg::PestNoDiagnosis => "pest.no_diagnosis",
            Msg::PestAffects => "pest.affects",
            Msg::PestAffectsYourCrops => "pest.affects_your_crops",
            Msg::MarketTitle => "market.title",
            Msg::MarketSubtitle => "market.subtitle",
            Msg::MarketFilterByCrop => "market.filter_by_crop",
            Msg::MarketAllCrops => "market.all_crops",
            Msg::MarketPricePerQuintal => "market.price_per_quintal",
            Msg::MarketYesterday => "market.yesterday",
            Msg::MarketChange => "market.change",
            Msg::MarketTrend => "market.trend",
            Msg::MarketBestSellingTime => "market.best_selling_time",
            Msg::MarketBestTimeHint => "market.best_time_hint",
            Msg::MarketExpectedPrice => "market.expected_price",
            Msg::MarketNearby => "market.nearby",
            Msg::MarketNoPrices => "market.no_prices",
            Msg::MarketHigh => "market.high",
            Msg::MarketLow => "market.low",
            Msg::MarketStable => "market.stable",
            Msg::WeatherTitle => "weather.title",
            Msg::WeatherSubtitle => "weather.subtitle",
            Msg::WeatherCurrent => "weather.current",
            Msg::WeatherForecast => "weather.forecast",
            Msg::WeatherAlerts => "weather.alerts",
            Msg::WeatherTemperature => "weather.temperature",
            Msg::WeatherHumidity => "weather.humidity",
            Msg::WeatherRainfall => "weather.rainfall",
            Msg::WeatherWindSpeed => "weather.wind_speed",
            Msg::WeatherFarmingAdvice => "weather.farming_advice",
            Msg::WeatherNoAlerts => "weather.no_alerts",
            Msg::WeatherCropAdvice => "weather.crop_advice",
            Msg::VoiceTitle => "voice.title",
            Msg::VoiceSubtitle => "voice.subtitle",
            Msg::VoiceStartListening => "voice.start_listening",
            Msg::VoiceStopListening => "voice.stop_listening",
            Msg::VoiceListening => "voice.listening",
            Msg::VoiceCommonQuestions => "voice.common_questions",
            Msg::VoiceClearHistory => "voice.clear_history",
            Msg::VoiceNoHistory => "voice.no_history",
            Msg::VoiceHistory => "voice.history",
            Msg::VoiceYou => "voice.you",
            Msg::VoiceAssistant => "voice.assistant",
        }
    }

    pub fn from_key(key: &str) -> Option<Msg> {
        Msg::ALL.iter().copied().find(|msg| msg.key() == key)
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Translate a message. Falls back to English when the language has no
/// entry for it.
///
/// # Examples
///
/// ```
/// use kisan_mitra::i18n::{t, Lang, Msg};
/// assert_eq!(t(Lang::En, Msg::DashWelcome), "Welcome back");
/// assert_eq!(t(Lang::Hi, Msg::DashWelcome), "वापसी पर स्वागत है");
/// // Tamil has no dashboard strings yet
/// assert_eq!(t(Lang::Ta, Msg::DashWelcome), "Welcome back");
/// ```
pub fn t(lang: Lang, msg: Msg) -> &'static str {
    translated(lang, msg).unwrap_or_else(|| english(msg))
}

/// String-keyed lookup by language code.
///
/// Unknown language codes resolve as English. A key that is not a known
/// message is returned unchanged so the UI still shows something readable.
pub fn resolve<'a>(code: &str, key: &'a str) -> &'a str {
    try_resolve(code, key).unwrap_or(key)
}

/// Like [`resolve`] but reports a key that does not exist at all.
pub fn try_resolve(code: &str, key: &str) -> Result<&'static str, I18nError> {
    let lang = Lang::from_code(code).unwrap_or_default();
    Msg::from_key(key)
        .map(|msg| t(lang, msg))
        .ok_or_else(|| I18nError::MissingTranslationKey {
            lang: code.to_string(),
            key: key.to_string(),
        })
}

/// Whether `lang` carries its own string for `msg` (no fallback involved).
pub fn has_translation(lang: Lang, msg: Msg) -> bool {
    translated(lang, msg).is_some()
}

/// (own translations, total messages) for a language.
pub fn coverage(lang: Lang) -> (usize, usize) {
    let own = Msg::ALL
        .iter()
        .filter(|msg| has_translation(lang, **msg))
        .count();
    (own, Msg::ALL.len())
}

fn translated(lang: Lang, msg: Msg) -> Option<&'static str> {
    match table_for(lang) {
        Some(table) => lookup(table, msg),
        None => Some(english(msg)),
    }
}

fn lookup(table: &'static [(Msg, &'static str)], msg: Msg) -> Option<&'static str> {
    for &(k, v) in table {
        if k == msg {
            return Some(v);
        }
    }
    None
}

fn table_for(lang: Lang) -> Option<&'static [(Msg, &'static str)]> {
    match lang {
        Lang::En => None,
        Lang::Hi => Some(HI),
        Lang::Ta => Some(TA),
        Lang::Te => Some(TE),
    }
}

// ─── English (source language, total over Msg) ─────────────────────

fn english(msg: Msg) -> &'static str {
    match msg {
        Msg::AppName => "Kisan Mitra - Farmer Assistant",
        Msg::AppWelcome => "Welcome to Kisan Mitra",
        Msg::AppLanguage => "Language",
        Msg::Logout => "Logout",
        Msg::NavDashboard => "Dashboard",
        Msg::NavPestDetection => "Pest Detection",
        Msg::NavMarketPrices => "Market Prices",
        Msg::NavWeather => "Weather",
        Msg::NavVoice => "Voice Assistant",
        Msg::RegTitle => "Farmer Registration",
        Msg::RegSubtitle => "Join Kisan Mitra for personalized farming advice",
        Msg::RegName => "Full Name",
        Msg::RegPhone => "Mobile Number",
        Msg::RegState => "State",
        Msg::RegDistrict => "District",
        Msg::RegVillage => "Village/Town",
        Msg::RegLandSize => "Land Size (acres)",
        Msg::RegSoilType => "Soil Type",
        Msg::RegMainCrops => "Main Crops (select multiple)",
        Msg::RegExperience => "Farming Experience (years)",
        Msg::RegSubmit => "Register Now",
        Msg::RegRequired => "Required field",
        Msg::RegNotANumber => "Must be a number",
        Msg::RegUnknownChoice => "Choose one of the listed options",
        Msg::DashWelcome => "Welcome back",
        Msg::DashRecommendations => "Today's Recommendations",
        Msg::DashAlerts => "Important Alerts",
        Msg::DashSoilHealth => "Soil Health Status",
        Msg::DashCropCalendar => "Crop Calendar",
        Msg::DashQuickActions => "Quick Actions",
        Msg::DashViewDetails => "View Details",
        Msg::DashNoAlerts => "No alerts today",
        Msg::DashPriority => "priority",
        Msg::DashAcres => "acres",
        Msg::DashNextActivity => "Next activity",
        Msg::DashFertilization => "Fertilization",
        Msg::DashPhLevel => "pH Level",
        Msg::DashMoisture => "Moisture",
        Msg::DashNutrients => "Nutrients",
        Msg::DashOptimal => "Optimal",
        Msg::DashGood => "Good",
        Msg::DashBalanced => "Balanced",
        Msg::PestTitle => "AI Pest & Disease Detection",
        Msg::PestSubtitle => "Upload a photo of your crop for instant diagnosis",
        Msg::PestUploadImage => "Upload Crop Image",
        Msg::PestAnalyzing => "Analyzing image...",
        Msg::PestCommonPests => "Common Pests in Your Area",
        Msg::PestDiagnosis => "Diagnosis Result",
        Msg::PestConfidence => "Confidence",
        Msg::PestTreatment => "Recommended Treatment",
        Msg::PestPrevention => "Prevention Tips",
        Msg::PestTryAgain => "Try Another Image",
        Msg::PestNoDiagnosis => "No issues detected in this image",
        Msg::PestAffects => "Affects",
        Msg::PestAffectsYourCrops => "affects your crops",
        Msg::MarketTitle => "Market Prices",
        Msg::MarketSubtitle => "Real-time crop prices in your area",
        Msg::MarketFilterByCrop => "Filter by Crop",
        Msg::MarketAllCrops => "All Crops",
        Msg::MarketPricePerQuintal => "Price per Quintal (₹)",
        Msg::MarketYesterday => "Yesterday",
        Msg::MarketChange => "Change",
        Msg::MarketTrend => "Market Trend",
        Msg::MarketBestSellingTime => "Best Selling Time",
        Msg::MarketBestTimeHint => "Best time to sell: next week",
        Msg::MarketExpectedPrice => "Expected price",
        Msg::MarketNearby => "Nearby Markets",
        Msg::MarketNoPrices => "No prices for this selection",
        Msg::MarketHigh => "High",
        Msg::MarketLow => "Low",
        Msg::MarketStable => "Stable",
        Msg::WeatherTitle => "Weather Forecast",
        Msg::WeatherSubtitle => "Weather updates for your location",
        Msg::WeatherCurrent => "Current Weather",
        Msg::WeatherForecast => "7-Day Forecast",
        Msg::WeatherAlerts => "Weather Alerts",
        Msg::WeatherTemperature => "Temperature",
        Msg::WeatherHumidity => "Humidity",
        Msg::WeatherRainfall => "Rainfall",
        Msg::WeatherWindSpeed => "Wind Speed",
        Msg::WeatherFarmingAdvice => "Farming Advice",
        Msg::WeatherNoAlerts => "No weather alerts",
        Msg::WeatherCropAdvice => "Crop-Specific Advice",
        Msg::VoiceTitle => "Voice Assistant",
        Msg::VoiceSubtitle => "Ask questions about farming in your language",
        Msg::VoiceStartListening => "Start Speaking",
        Msg::VoiceStopListening => "Stop Speaking",
        Msg::VoiceListening => "Listening...",
        Msg::VoiceCommonQuestions => "Common Questions",
        Msg::VoiceClearHistory => "Clear History",
        Msg::VoiceNoHistory => "No conversation history yet",
        Msg::VoiceHistory => "Conversation History",
        Msg::VoiceYou => "You",
        Msg::VoiceAssistant => "Kisan Mitra",
    }
}

// ─── Hindi ──────────────────────────────────────────────────────────

const HI: &[(Msg, &str)] = &[
    (Msg::AppName, "किसान मित्र - कृषक सहायक"),
    (Msg::AppWelcome, "किसान मित्र में आपका स्वागत है"),
    (Msg::AppLanguage, "भाषा"),
    (Msg::Logout, "लॉग आउट"),
    (Msg::NavDashboard, "डैशबोर्ड"),
    (Msg::NavPestDetection, "कीट पहचान"),
    (Msg::NavMarketPrices, "बाजार भाव"),
    (Msg::NavWeather, "मौसम"),
    (Msg::NavVoice, "आवाज सहायक"),
    (Msg::RegTitle, "किसान पंजीकरण"),
    (Msg::RegSubtitle, "व्यक्तिगत कृषि सलाह के लिए किसान मित्र से जुड़ें"),
    (Msg::RegName, "पूरा नाम"),
    (Msg::RegPhone, "मोबाइल नंबर"),
    (Msg::RegState, "राज्य"),
    (Msg::RegDistrict, "जिला"),
    (Msg::RegVillage, "गांव/शहर"),
    (Msg::RegLandSize, "भूमि का आकार (एकड़)"),
    (Msg::RegSoilType, "मिट्टी का प्रकार"),
    (Msg::RegMainCrops, "मुख्य फसलें (कई चुनें)"),
    (Msg::RegExperience, "कृषि अनुभव (वर्ष)"),
    (Msg::RegSubmit, "अभी पंजीकरण करें"),
    (Msg::RegRequired, "आवश्यक फील्ड"),
    (Msg::RegNotANumber, "संख्या होनी चाहिए"),
    (Msg::RegUnknownChoice, "सूची में से कोई विकल्प चुनें"),
    (Msg::DashWelcome, "वापसी पर स्वागत है"),
    (Msg::DashRecommendations, "आज की सिफारिशें"),
    (Msg::DashAlerts, "महत्वपूर्ण अलर्ट"),
    (Msg::DashSoilHealth, "मिट्टी स्वास्थ्य स्थिति"),
    (Msg::DashCropCalendar, "फसल कैलेंडर"),
    (Msg::DashQuickActions, "त्वरित कार्य"),
    (Msg::DashViewDetails, "विवरण देखें"),
    (Msg::DashNoAlerts, "आज कोई अलर्ट नहीं"),
    (Msg::DashPriority, "प्राथमिकता"),
    (Msg::DashAcres, "एकड़"),
    (Msg::DashNextActivity, "अगला कार्य"),
    (Msg::DashFertilization, "उर्वरक डालना"),
    (Msg::DashPhLevel, "पीएच स्तर"),
    (Msg::DashMoisture, "नमी"),
    (Msg::DashNutrients, "पोषक तत्व"),
    (Msg::DashOptimal, "उत्तम"),
    (Msg::DashGood, "अच्छा"),
    (Msg::DashBalanced, "संतुलित"),
    (Msg::PestTitle, "एआई कीट और रोग पहचान"),
    (Msg::PestSubtitle, "तुरंत निदान के लिए अपनी फसल की तस्वीर अपलोड करें"),
    (Msg::PestUploadImage, "फसल की तस्वीर अपलोड करें"),
    (Msg::PestAnalyzing, "तस्वीर का विश्लेषण कर रहे हैं..."),
    (Msg::PestCommonPests, "आपके क्षेत्र में आम कीट"),
    (Msg::PestDiagnosis, "निदान परिणाम"),
    (Msg::PestConfidence, "विश्वास"),
    (Msg::PestTreatment, "अनुशंसित उपचार"),
    (Msg::PestPrevention, "रोकथाम के सुझाव"),
    (Msg::PestTryAgain, "दूसरी तस्वीर आज़माएं"),
    (Msg::PestNoDiagnosis, "इस तस्वीर में कोई समस्या नहीं मिली"),
    (Msg::PestAffects, "प्रभावित फसलें"),
    (Msg::PestAffectsYourCrops, "आपकी फसलों को प्रभावित करता है"),
    (Msg::MarketTitle, "बाजार भाव"),
    (Msg::MarketSubtitle, "आपके क्षेत्र में वास्तविक समय फसल की कीमतें"),
    (Msg::MarketFilterByCrop, "फसल के अनुसार छांटें"),
    (Msg::MarketAllCrops, "सभी फसलें"),
    (Msg::MarketPricePerQuintal, "प्रति क्विंटल मूल्य (₹)"),
    (Msg::MarketYesterday, "कल"),
    (Msg::MarketChange, "परिवर्तन"),
    (Msg::MarketTrend, "बाजार रुझान"),
    (Msg::MarketBestSellingTime, "सबसे अच्छा बेचने का समय"),
    (Msg::MarketBestTimeHint, "बेचने का सबसे अच्छा समय: अगले सप्ताह"),
    (Msg::MarketExpectedPrice, "अपेक्षित मूल्य"),
    (Msg::MarketNearby, "नजदीकी बाजार"),
    (Msg::MarketNoPrices, "इस चयन के लिए कोई भाव नहीं"),
    (Msg::MarketHigh, "उच्च"),
    (Msg::MarketLow, "निम्न"),
    (Msg::MarketStable, "स्थिर"),
    (Msg::WeatherTitle, "मौसम पूर्वानुमान"),
    (Msg::WeatherSubtitle, "आपके स्थान के लिए मौसम अपडेट"),
    (Msg::WeatherCurrent, "वर्तमान मौसम"),
    (Msg::WeatherForecast, "7-दिन का पूर्वानुमान"),
    (Msg::WeatherAlerts, "मौसम चेतावनी"),
    (Msg::WeatherTemperature, "तापमान"),
    (Msg::WeatherHumidity, "नमी"),
    (Msg::WeatherRainfall, "वर्षा"),
    (Msg::WeatherWindSpeed, "हवा की गति"),
    (Msg::WeatherFarmingAdvice, "कृषि सलाह"),
    (Msg::WeatherNoAlerts, "कोई मौसम चेतावनी नहीं"),
    (Msg::WeatherCropAdvice, "फसल अनुसार सलाह"),
    (Msg::VoiceTitle, "आवाज सहायक"),
    (Msg::VoiceSubtitle, "अपनी भाषा में खेती के बारे में सवाल पूछें"),
    (Msg::VoiceStartListening, "बोलना शुरू करें"),
    (Msg::VoiceStopListening, "बोलना बंद करें"),
    (Msg::VoiceListening, "सुन रहे हैं..."),
    (Msg::VoiceCommonQuestions, "आम सवाल"),
    (Msg::VoiceClearHistory, "इतिहास साफ़ करें"),
    (Msg::VoiceNoHistory, "अभी तक कोई बातचीत का इतिहास नहीं"),
    (Msg::VoiceHistory, "बातचीत का इतिहास"),
    (Msg::VoiceYou, "आप"),
    (Msg::VoiceAssistant, "किसान मित्र"),
];

// ─── Tamil (application chrome only) ────────────────────────────────

const TA: &[(Msg, &str)] = &[
    (Msg::AppName, "கிசான் மித்ரா - விவசாயி உதவியாளர்"),
    (Msg::AppWelcome, "கிசான் மித்ராவிற்கு வரவேற்கிறோம்"),
    (Msg::AppLanguage, "மொழி"),
    (Msg::Logout, "வெளியேறு"),
    (Msg::NavDashboard, "டாஷ்போர்டு"),
    (Msg::NavPestDetection, "பூச்சி கண்டறிதல்"),
    (Msg::NavMarketPrices, "சந்தை விலைகள்"),
    (Msg::NavWeather, "வானிலை"),
    (Msg::NavVoice, "குரல் உதவியாளர்"),
];

// ─── Telugu (application chrome only) ───────────────────────────────

const TE: &[(Msg, &str)] = &[
    (Msg::AppName, "కిసాన్ మిత్రా - రైతు సహాయకుడు"),
    (Msg::AppWelcome, "కిసాన్ మిత్రాకు స్వాగతం"),
    (Msg::AppLanguage, "భాష"),
    (Msg::Logout, "లాగ్ అవుట్"),
    (Msg::NavDashboard, "డాష్‌బోర్డ్"),
    (Msg::NavPestDetection, "కీటకాల గుర్తింపు"),
    (Msg::NavMarketPrices, "మార్కెట్ ధరలు"),
    (Msg::NavWeather, "వాతావరణం"),
    (Msg::NavVoice, "వాయిస్ అసిస్టెంట్"),
];
