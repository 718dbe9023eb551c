//! Tone classification: formal vs casual register from fixed word lists.
//!
//! Formal connectors and casual slang score 2 points per occurrence,
//! contractions 1 casual point. Average sentence length adds 3 formal points
//! above 20 words or 3 casual points below 12. A label is only assigned when
//! one side leads by more than 3; anything closer is Balanced.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::essay::text::{average_sentence_length, char_count, sentences};

pub const MIN_TONE_CHARS: usize = 50;
const TONE_MARGIN: u32 = 3;
const SENTENCE_LENGTH_BONUS: u32 = 3;

const FORMAL_WORDS: &[&str] = &[
    "furthermore",
    "moreover",
    "consequently",
    "nevertheless",
    "therefore",
    "thus",
    "henceforth",
    "wherein",
    "thereby",
];

const CASUAL_WORDS: &[&str] = &[
    "yeah", "cool", "awesome", "gonna", "wanna", "kinda", "sorta", "hey", "wow", "super",
];

const CONTRACTIONS: &[&str] = &[
    "don't", "can't", "won't", "i'm", "you're", "it's", "we're", "they're",
];

fn any_word(words: &[&str]) -> Regex {
    let alternatives: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    Regex::new(&format!(r"\b(?:{})\b", alternatives.join("|"))).expect("tone pattern is valid")
}

static FORMAL: Lazy<Regex> = Lazy::new(|| any_word(FORMAL_WORDS));
static CASUAL: Lazy<Regex> = Lazy::new(|| any_word(CASUAL_WORDS));
static CONTRACTION: Lazy<Regex> = Lazy::new(|| any_word(CONTRACTIONS));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ToneLabel {
    Neutral,
    Formal,
    Casual,
    Balanced,
}

impl ToneLabel {
    pub fn feedback(&self) -> Option<&'static str> {
        match self {
            ToneLabel::Neutral => None,
            ToneLabel::Formal => Some(
                "Your essay has a formal academic tone. This is good for scholarship applications! \
                 Consider adding personal anecdotes to make it more engaging.",
            ),
            ToneLabel::Casual => Some(
                "Your essay sounds conversational. Try using more formal language and avoiding \
                 contractions for scholarship applications.",
            ),
            ToneLabel::Balanced => Some(
                "Perfect balance! Your tone is professional yet personal - ideal for scholarship essays.",
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToneAnalysis {
    pub label: ToneLabel,
    pub feedback: Option<&'static str>,
    pub formal_score: u32,
    pub casual_score: u32,
}

pub fn classify_tone(text: &str) -> ToneAnalysis {
    if char_count(text.trim()) < MIN_TONE_CHARS {
        return ToneAnalysis {
            label: ToneLabel::Neutral,
            feedback: None,
            formal_score: 0,
            casual_score: 0,
        };
    }

    let text = text.to_lowercase();

    let mut formal_score = 2 * FORMAL.find_iter(&text).count() as u32;
    let mut casual_score = 2 * CASUAL.find_iter(&text).count() as u32
        + CONTRACTION.find_iter(&text).count() as u32;

    match average_sentence_length(&sentences(&text, 0)) {
        Some(avg) if avg > 20.0 => formal_score += SENTENCE_LENGTH_BONUS,
        Some(avg) if avg < 12.0 => casual_score += SENTENCE_LENGTH_BONUS,
        _ => {}
    }

    let label = if formal_score > casual_score + TONE_MARGIN {
        ToneLabel::Formal
    } else if casual_score > formal_score + TONE_MARGIN {
        ToneLabel::Casual
    } else {
        ToneLabel::Balanced
    };

    ToneAnalysis {
        label,
        feedback: label.feedback(),
        formal_score,
        casual_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_neutral_without_feedback() {
        let analysis = classify_tone("   yeah this is awesome, gonna be super cool   ");
        assert_eq!(analysis.label, ToneLabel::Neutral);
        assert_eq!(analysis.feedback, None);
    }

    #[test]
    fn test_casual_text() {
        // 4 slang words (8) + 2 contractions (2) + short sentences (3)
        let text = "Yeah, I'm gonna study hard. It's awesome. Wow, engineering is so much fun for me.";
        let analysis = classify_tone(text);
        assert_eq!(analysis.casual_score, 13);
        assert_eq!(analysis.formal_score, 0);
        assert_eq!(analysis.label, ToneLabel::Casual);
        assert!(analysis.feedback.unwrap().contains("conversational"));
    }

    #[test]
    fn test_formal_text() {
        let text = "Furthermore, the longitudinal study of renewable energy adoption across rural communities \
                    demonstrates that sustained investment in infrastructure thereby improves outcomes; \
                    consequently, policy makers must therefore prioritize such programs.";
        let analysis = classify_tone(text);
        // furthermore, thereby, consequently, therefore (8) + long sentence (3)
        assert_eq!(analysis.formal_score, 11);
        assert_eq!(analysis.casual_score, 0);
        assert_eq!(analysis.label, ToneLabel::Formal);
    }

    #[test]
    fn test_margin_of_three_is_balanced() {
        // Medium-length sentences, one formal connector and nothing casual: 2 vs 0.
        let text = "Moreover, I have worked at the local library for three years helping younger students read.";
        let analysis = classify_tone(text);
        assert_eq!(analysis.formal_score, 2);
        assert_eq!(analysis.casual_score, 0);
        assert_eq!(analysis.label, ToneLabel::Balanced);
        assert!(analysis.feedback.unwrap().starts_with("Perfect balance!"));
    }

    #[test]
    fn test_casual_lead_of_three_is_balanced_and_four_is_casual() {
        // moreover (2) vs two contractions (2) + short sentences (3)
        let text = "Moreover, it's late. I'm tired now. We ran home fast. The dog slept well.";
        let analysis = classify_tone(text);
        assert_eq!((analysis.formal_score, analysis.casual_score), (2, 5));
        assert_eq!(analysis.label, ToneLabel::Balanced);

        // a third contraction tips it over
        let text = "Moreover, it's late. I'm tired now. We're home fast. The dog slept well.";
        let analysis = classify_tone(text);
        assert_eq!((analysis.formal_score, analysis.casual_score), (2, 6));
        assert_eq!(analysis.label, ToneLabel::Casual);
    }

    #[test]
    fn test_formal_lead_of_three_is_balanced_and_four_is_formal() {
        // one 25-word sentence (3) and nothing else
        let text = "I spent every summer of high school volunteering at the community garden where I \
                    taught younger children how to plant vegetables and care for them.";
        let analysis = classify_tone(text);
        assert_eq!((analysis.formal_score, analysis.casual_score), (3, 0));
        assert_eq!(analysis.label, ToneLabel::Balanced);

        // 24-word sentence (3) + therefore (2) vs one contraction (1)
        let text = "I spent every summer of high school volunteering at the community garden, and it's \
                    therefore where I taught younger children how to plant vegetables.";
        let analysis = classify_tone(text);
        assert_eq!((analysis.formal_score, analysis.casual_score), (5, 1));
        assert_eq!(analysis.label, ToneLabel::Formal);
    }

    #[test]
    fn test_words_must_be_whole() {
        // "thus" inside "enthusiastic" and "cool" inside "school" do not count.
        let text = "I was an enthusiastic member of the school science olympiad team for four long years.";
        let analysis = classify_tone(text);
        assert_eq!(analysis.formal_score, 0);
        assert_eq!(analysis.casual_score, 0);
    }

    #[test]
    fn test_matching_ignores_case() {
        let text = "MOREOVER the results were clear and THEREFORE we continued the long experiment anyway.";
        let analysis = classify_tone(text);
        assert_eq!(analysis.formal_score, 4);
    }
}
