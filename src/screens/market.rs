// SPDX-License-Identifier: PMPL-1.0-or-later

use super::{rupees, Line, Section, Tone, View};
use crate::app::App;
use crate::i18n::{t, Lang, Msg};
use crate::matcher::{
    filter_by_crop_name, match_by_region, match_exact_region, CropFilter, CropScoped,
};
use crate::session::Screen;
use crate::types::{MarketPrice, MarketStatus, Trend, UserProfile};

/// Crops shown under "best selling time".
const BEST_TIME_CROPS: usize = 2;

pub(super) fn view(app: &App, profile: &UserProfile) -> View {
    let lang = app.lang();
    let catalog = app.catalog();
    let filter = app.market_filter();

    let mut options = vec![marked(t(lang, Msg::MarketAllCrops), *filter == CropFilter::All)];
    for crop in &profile.main_crops {
        let selected = matches!(filter, CropFilter::Crop(name) if name.eq_ignore_ascii_case(crop));
        options.push(marked(crop, selected));
    }
    let filter_section =
        Section::new(t(lang, Msg::MarketFilterByCrop)).with(Line::plain(options.join("  ")));

    let regional = match_by_region(&catalog.market_prices, &profile.state);
    let prices = filter_by_crop_name(regional, filter);
    let mut cards = Section::new(t(lang, Msg::MarketPricePerQuintal));
    for price in &prices {
        cards.push(price_line(lang, price));
    }
    if cards.lines.is_empty() {
        cards.push(Line::muted(t(lang, Msg::MarketNoPrices)));
    }

    let count = |trend: Trend| prices.iter().filter(|p| p.trend == trend).count();
    let trends = Section::new(t(lang, Msg::MarketTrend))
        .with(Line::new(
            format!("{} {}: {}", Trend::Up.icon(), t(lang, Msg::MarketHigh), count(Trend::Up)),
            Tone::Good,
        ))
        .with(Line::new(
            format!("{} {}: {}", Trend::Down.icon(), t(lang, Msg::MarketLow), count(Trend::Down)),
            Tone::Critical,
        ))
        .with(Line::new(
            format!(
                "{} {}: {}",
                Trend::Stable.icon(),
                t(lang, Msg::MarketStable),
                count(Trend::Stable)
            ),
            Tone::Muted,
        ));

    let mut nearby = Section::new(t(lang, Msg::MarketNearby));
    for market in match_exact_region(&catalog.nearby_markets, &profile.state)
        .into_iter()
        .take(app.config().nearby_market_limit)
    {
        let (status, tone) = match market.status {
            MarketStatus::Open => ("Open", Tone::Good),
            MarketStatus::Closed => ("Closed", Tone::Muted),
        };
        nearby.push(Line::new(
            format!("🏪 {} · {} km · {} · {}", market.name, market.distance_km, status, market.timing),
            tone,
        ));
    }

    let mut best = Section::new(t(lang, Msg::MarketBestSellingTime));
    for crop in profile.main_crops.iter().take(BEST_TIME_CROPS) {
        let mut text = format!("{}: {}", crop, t(lang, Msg::MarketBestTimeHint));
        if let Some(price) = catalog.market_prices.iter().find(|p| p.concerns_crop(crop)) {
            text.push_str(&format!(
                " · {}: {}",
                t(lang, Msg::MarketExpectedPrice),
                rupees(price.current_price)
            ));
        }
        best.push(Line::new(text, Tone::Accent));
    }

    let mut sections = vec![filter_section, cards, trends];
    if !nearby.lines.is_empty() {
        sections.push(nearby);
    }
    if !best.lines.is_empty() {
        sections.push(best);
    }

    View {
        screen: Screen::MarketPrices,
        title: t(lang, Msg::MarketTitle).to_string(),
        subtitle: t(lang, Msg::MarketSubtitle).to_string(),
        sections,
    }
}

fn marked(label: &str, selected: bool) -> String {
    if selected {
        format!("[{label}]")
    } else {
        label.to_string()
    }
}

fn price_line(lang: Lang, price: &MarketPrice) -> Line {
    let tone = match price.trend {
        Trend::Up => Tone::Good,
        Trend::Down => Tone::Critical,
        Trend::Stable => Tone::Muted,
    };
    Line::new(
        format!(
            "{} {} {} · {} {} · {} {:+} ({:+.1}%) {} · {}",
            price.icon,
            price.crop,
            rupees(price.current_price),
            t(lang, Msg::MarketYesterday),
            rupees(price.previous_price),
            t(lang, Msg::MarketChange),
            price.change(),
            price.change_percent(),
            price.trend.icon(),
            price.market
        ),
        tone,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::AppConfig;

    fn farmer_app() -> App {
        let mut app = App::new(
            AppConfig {
                seed: Some(1),
                ..AppConfig::default()
            },
            Catalog::sample(),
        );
        let form = app.form_mut();
        form.name = "Ravi".into();
        form.phone = "1".into();
        form.state = "Maharashtra".into();
        form.toggle_crop("Rice");
        form.toggle_crop("Pulses");
        assert!(app.submit_registration());
        app.navigate(Screen::MarketPrices);
        app
    }

    #[test]
    fn price_cards_are_limited_to_the_farmers_state() {
        let app = farmer_app();
        let profile = app.session().profile().cloned().expect("registered");
        let view = view(&app, &profile);
        assert_eq!(view.sections[1].lines.len(), 1);
        assert!(view.sections[1].lines[0].text.contains("Nashik APMC"));
        // trend counts follow the cards: one rising Maharashtra price
        assert!(view.sections[2].lines[0].text.ends_with(": 1"));
        assert!(view.sections[2].lines[1].text.ends_with(": 0"));
    }

    #[test]
    fn filter_narrows_price_cards() {
        let mut app = farmer_app();
        let profile = app.session().profile().cloned().expect("registered");

        app.set_market_filter(CropFilter::parse("rice"));
        let view = view(&app, &profile);
        assert_eq!(view.sections[1].lines.len(), 1);
        assert!(view.sections[0].lines[0].text.contains("[Rice]"));

        app.set_market_filter(CropFilter::parse("Pulses"));
        let view = super::view(&app, &profile);
        assert_eq!(view.sections[1].lines.len(), 1);
        assert_eq!(view.sections[1].lines[0].tone, Tone::Muted);
    }

    #[test]
    fn nearby_markets_are_in_state_only() {
        let app = farmer_app();
        let profile = app.session().profile().cloned().expect("registered");
        let view = view(&app, &profile);
        let nearby = view.section("Nearby Markets").expect("nearby");
        assert_eq!(nearby.lines.len(), 2);
        assert!(nearby.lines.iter().all(|l| !l.text.contains("Ludhiana")));
    }

    #[test]
    fn best_time_uses_known_price() {
        let app = farmer_app();
        let profile = app.session().profile().cloned().expect("registered");
        let view = view(&app, &profile);
        let best = view.section("Best Selling Time").expect("best time");
        assert!(best.lines[0].text.contains("₹1,850"));
        assert!(!best.lines[1].text.contains('₹'));
    }
}
