// SPDX-License-Identifier: PMPL-1.0-or-later

//! Scripted voice assistant.
//!
//! There is no speech recognition. "Listening" waits a fixed delay and then
//! picks one of the sample questions at random; the question is classified
//! by keyword and answered from a canned table.
//!
//! Classification checks intents in a fixed order, fertilizer, planting,
//! pests, prices, weather, and the first intent with a keyword contained in
//! the utterance wins. English and Hindi keywords apply in every language;
//! Tamil and Telugu keywords only when that language is active.

use crate::i18n::Lang;
use crate::schedule::ScheduledTask;
use chrono::{DateTime, Local};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Fertilizer,
    Planting,
    Pests,
    Prices,
    Weather,
    Unknown,
}

impl Intent {
    /// Classification order. `Unknown` is the fallback, not a candidate.
    pub const PRIORITY: [Intent; 5] = [
        Intent::Fertilizer,
        Intent::Planting,
        Intent::Pests,
        Intent::Prices,
        Intent::Weather,
    ];
}

fn keywords(intent: Intent, lang: Lang) -> &'static [&'static str] {
    match (lang, intent) {
        (_, Intent::Unknown) => &[],
        (Lang::En, Intent::Fertilizer) => &["fertilizer"],
        (Lang::En, Intent::Planting) => &["plant"],
        (Lang::En, Intent::Pests) => &["pest"],
        (Lang::En, Intent::Prices) => &["price"],
        (Lang::En, Intent::Weather) => &["weather"],
        (Lang::Hi, Intent::Fertilizer) => &["उर्वरक"],
        (Lang::Hi, Intent::Planting) => &["बो"],
        (Lang::Hi, Intent::Pests) => &["कीट"],
        (Lang::Hi, Intent::Prices) => &["भाव"],
        (Lang::Hi, Intent::Weather) => &["मौसम"],
        (Lang::Ta, Intent::Fertilizer) => &["உரம்"],
        (Lang::Ta, Intent::Planting) => &["நடவு", "விதை"],
        (Lang::Ta, Intent::Pests) => &["பூச்சி"],
        (Lang::Ta, Intent::Prices) => &["விலை"],
        (Lang::Ta, Intent::Weather) => &["வானிலை", "மழை"],
        (Lang::Te, Intent::Fertilizer) => &["ఎరువు"],
        (Lang::Te, Intent::Planting) => &["నాటు", "విత్త"],
        (Lang::Te, Intent::Pests) => &["పురుగు", "కీటక"],
        (Lang::Te, Intent::Prices) => &["ధర"],
        (Lang::Te, Intent::Weather) => &["వాతావరణ", "వర్షం"],
    }
}

pub fn classify(utterance: &str, lang: Lang) -> Intent {
    let text = utterance.to_lowercase();
    let mentions = |intent: Intent, lang: Lang| {
        keywords(intent, lang)
            .iter()
            .any(|keyword| text.contains(keyword))
    };
    // English and Hindi keywords apply whatever the active language is
    Intent::PRIORITY
        .iter()
        .copied()
        .find(|intent| {
            mentions(*intent, Lang::En)
                || mentions(*intent, Lang::Hi)
                || (matches!(lang, Lang::Ta | Lang::Te) && mentions(*intent, lang))
        })
        .unwrap_or(Intent::Unknown)
}

pub fn respond(intent: Intent, lang: Lang) -> &'static str {
    match lang {
        Lang::Hi => respond_hi(intent),
        _ => respond_en(intent),
    }
}

fn respond_en(intent: Intent) -> &'static str {
    match intent {
        Intent::Fertilizer => "For rice cultivation, use NPK fertilizer (10:26:26) at planting and urea after 3-4 weeks. Apply organic compost for better soil health.",
        Intent::Planting => "Cotton should be planted between April-May in most regions. Ensure soil temperature is above 18°C for optimal germination.",
        Intent::Pests => "For wheat pest control, spray neem oil solution early morning. Monitor for aphids and use appropriate insecticides if needed.",
        Intent::Prices => "Current wheat prices in your area: ₹2,150/quintal. Rice: ₹1,850/quintal. Prices are stable this week.",
        Intent::Weather => "Tomorrow's forecast shows partly cloudy weather with 20% chance of light rain. Good for most farming activities.",
        Intent::Unknown => "I'd be happy to help you! Please rephrase your question or choose from common questions.",
    }
}

fn respond_hi(intent: Intent) -> &'static str {
    match intent {
        Intent::Fertilizer => "चावल की खेती के लिए, बुवाई के समय NPK उर्वरक (10:26:26) और 3-4 सप्ताह बाद यूरिया का उपयोग करें। मिट्टी के स्वास्थ्य के लिए जैविक खाद डालें।",
        Intent::Planting => "कपास की बुवाई अप्रैल-मई के बीच करनी चाहिए। अंकुरण के लिए मिट्टी का तापमान 18°C से ऊपर होना चाहिए।",
        Intent::Pests => "गेहूं में कीट नियंत्रण के लिए, सुबह जल्दी नीम का तेल छिड़कें। माहू के लिए निगरानी करें और जरूरत पड़ने पर उपयुक्त कीटनाशक का उपयोग करें।",
        Intent::Prices => "आपके क्षेत्र में वर्तमान गेहूं की कीमत: ₹2,150/क्विंटल। चावल: ₹1,850/क्विंटल। इस सप्ताह कीमतें स्थिर हैं।",
        Intent::Weather => "कल का मौसम आंशिक रूप से बादल छाए रहने और हल्की बारिश की 20% संभावना दिखाता है। अधिकांश कृषि गतिविधियों के लिए अच्छा है।",
        Intent::Unknown => "मुझे खुशी होगी आपकी मदद करने में। कृपया अपना सवाल फिर से पूछें या आम सवालों में से चुनें।",
    }
}

/// Questions offered as shortcuts and used by the listening simulator.
pub fn sample_questions(lang: Lang) -> &'static [&'static str] {
    match lang {
        Lang::Hi => &[
            "चावल के लिए कौन सा उर्वरक इस्तेमाल करूं?",
            "कपास बोने का सबसे अच्छा समय कब है?",
            "गेहूं की फसल में कीटों को कैसे नियंत्रित करें?",
            "आज के बाजार भाव क्या हैं?",
            "कल बारिश होगी?",
        ],
        _ => &[
            "What fertilizer should I use for rice?",
            "When is the best time to plant cotton?",
            "How to control pests in my wheat crop?",
            "What are today's market prices?",
            "Will it rain tomorrow?",
        ],
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversationTurn {
    pub question: String,
    pub answer: String,
    pub intent: Intent,
    pub asked_at: DateTime<Local>,
}

impl ConversationTurn {
    pub fn answer(question: &str, lang: Lang, asked_at: DateTime<Local>) -> Self {
        let intent = classify(question, lang);
        Self {
            question: question.to_string(),
            answer: respond(intent, lang).to_string(),
            intent,
            asked_at,
        }
    }
}

/// Conversation turns, most recent first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationLog {
    turns: Vec<ConversationTurn>,
}

impl ConversationLog {
    pub fn with_turn(mut self, turn: ConversationTurn) -> Self {
        self.turns.insert(0, turn);
        self
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn latest(&self) -> Option<&ConversationTurn> {
        self.turns.first()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }
}

/// A pending simulated listen. Resolves to the "heard" question.
#[derive(Debug, Clone)]
pub struct Listening {
    task: ScheduledTask<String>,
}

impl Listening {
    pub fn start(now: Instant, delay: Duration) -> Self {
        tracing::debug!(?delay, "listening started");
        Self {
            task: ScheduledTask::start(now, delay),
        }
    }

    /// The heard question, on the poll where the delay runs out.
    pub fn poll<R: Rng + ?Sized>(&mut self, now: Instant, lang: Lang, rng: &mut R) -> Option<String> {
        if self.task.poll(now, || pick_question(lang, rng)) {
            return self.task.result().cloned();
        }
        None
    }

    /// Stop early: the question is "heard" right away.
    pub fn stop<R: Rng + ?Sized>(&mut self, lang: Lang, rng: &mut R) -> Option<String> {
        if self.task.finish_now(|| pick_question(lang, rng)) {
            return self.task.result().cloned();
        }
        None
    }

    pub fn cancel(&mut self) {
        if self.task.cancel() {
            tracing::debug!("listening canceled");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.task.is_pending()
    }

    pub fn progress(&self, now: Instant) -> f32 {
        self.task.progress(now)
    }
}

fn pick_question<R: Rng + ?Sized>(lang: Lang, rng: &mut R) -> String {
    sample_questions(lang)
        .choose(rng)
        .map(|question| question.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sample_questions_classify_as_shipped() {
        // the rain question has no weather keyword and gets the apology
        let expected = vec![
            Intent::Fertilizer,
            Intent::Planting,
            Intent::Pests,
            Intent::Prices,
            Intent::Unknown,
        ];
        let intents: Vec<Intent> = sample_questions(Lang::En)
            .iter()
            .map(|q| classify(q, Lang::En))
            .collect();
        assert_eq!(intents, expected);

        let hindi: Vec<Intent> = sample_questions(Lang::Hi)
            .iter()
            .map(|q| classify(q, Lang::Hi))
            .collect();
        assert_eq!(hindi, expected);
    }

    #[test]
    fn rain_is_not_a_weather_keyword() {
        assert_eq!(classify("Will it rain tomorrow?", Lang::En), Intent::Unknown);
        assert_eq!(classify("Weather tomorrow?", Lang::En), Intent::Weather);
    }

    #[test]
    fn fertilizer_beats_price() {
        assert_eq!(
            classify("What is the PRICE of fertilizer?", Lang::En),
            Intent::Fertilizer
        );
    }

    #[test]
    fn english_keywords_work_in_other_languages() {
        assert_eq!(classify("wheat price?", Lang::Ta), Intent::Prices);
        assert_eq!(classify("நெல் விலை என்ன?", Lang::Ta), Intent::Prices);
    }

    #[test]
    fn hindi_keywords_apply_in_every_language() {
        assert_eq!(classify("आज मौसम कैसा है", Lang::En), Intent::Weather);
        assert_eq!(classify("आज के बाजार भाव", Lang::Te), Intent::Prices);
        assert_eq!(classify("आज के बाजार भाव", Lang::Hi), Intent::Prices);
    }

    #[test]
    fn tamil_keywords_need_tamil() {
        assert_eq!(classify("நெல் விலை என்ன?", Lang::En), Intent::Unknown);
    }

    #[test]
    fn unknown_gets_localized_apology() {
        assert!(respond(Intent::Unknown, Lang::En).starts_with("I'd be happy"));
        assert!(respond(Intent::Unknown, Lang::Hi).starts_with("मुझे"));
        assert_eq!(respond(Intent::Unknown, Lang::Te), respond(Intent::Unknown, Lang::En));
    }

    #[test]
    fn log_is_most_recent_first() {
        let now = Local::now();
        let log = ConversationLog::default()
            .with_turn(ConversationTurn::answer("first pest?", Lang::En, now))
            .with_turn(ConversationTurn::answer("then price?", Lang::En, now));
        assert_eq!(log.len(), 2);
        assert_eq!(log.latest().map(|t| t.intent), Some(Intent::Prices));
        assert_eq!(log.turns()[1].intent, Intent::Pests);
    }

    #[test]
    fn listening_hears_a_sample_question() {
        let mut rng = StdRng::seed_from_u64(5);
        let start = Instant::now();
        let mut listening = Listening::start(start, Duration::from_secs(3));
        assert_eq!(listening.poll(start, Lang::En, &mut rng), None);
        let heard = listening
            .poll(start + Duration::from_secs(3), Lang::En, &mut rng)
            .expect("heard a question");
        assert!(sample_questions(Lang::En).contains(&heard.as_str()));
        assert!(!listening.is_pending());
    }

    #[test]
    fn stopping_early_resolves_immediately() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut listening = Listening::start(Instant::now(), Duration::from_secs(60));
        assert!(listening.stop(Lang::Hi, &mut rng).is_some());
        assert!(listening.stop(Lang::Hi, &mut rng).is_none());
    }
}
