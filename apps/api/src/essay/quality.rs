//! Essay quality rubric: six independently capped sub-scores built from
//! regex counts over the essay text.
//!
//! | criterion      | best | middle | worst |
//! |----------------|------|--------|-------|
//! | length         | 15   | 10 / 8 | -     |
//! | personal voice | 20   | 12     | 5     |
//! | specificity    | 20   | 12     | 5     |
//! | goals          | 20   | 12     | 5     |
//! | structure      | 15   | 10     | 5     |
//! | passion        | 10   | -      | 5     |
//!
//! The constants here are the contract; do not tune them.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::essay::text::{average_sentence_length, char_count, paragraphs, sentences, word_count};

pub const MIN_ESSAY_CHARS: usize = 100;
pub const MAX_SCORE: u32 = 100;

const IDEAL_WORDS_MIN: usize = 250;
const IDEAL_WORDS_MAX: usize = 650;
/// Sentences this short (trimmed chars) are ignored by the structure check.
const STRUCTURE_SENTENCE_MIN_CHARS: usize = 10;

fn word_pattern(alternatives: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b({alternatives})\b")).expect("rubric pattern is valid")
}

static PERSONAL: Lazy<Regex> = Lazy::new(|| {
    word_pattern("i|my|me|myself|when i|i was|i am|i have|my family|my experience")
});
static STORY: Lazy<Regex> =
    Lazy::new(|| word_pattern("when|during|after|before|while|once|remember"));
static SPECIFIC: Lazy<Regex> = Lazy::new(|| {
    word_pattern(r"\d+|specific|for example|such as|including|particularly|specifically|named")
});
static VAGUE: Lazy<Regex> =
    Lazy::new(|| word_pattern("good|nice|great|many|some|things|stuff|very|really"));
static GOALS: Lazy<Regex> = Lazy::new(|| {
    word_pattern(
        "goal|aspire|plan|aim|hope|dream|future|will|career|contribute|impact|change|help|serve",
    )
});
static PASSION: Lazy<Regex> = Lazy::new(|| {
    word_pattern("passionate|love|excited|dedicated|committed|driven|motivated|inspire")
});

#[derive(Debug, Error, PartialEq)]
pub enum EssayError {
    #[error("Please write at least {min} characters for a meaningful analysis.")]
    TooShort { chars: usize, min: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    Positive,
    Warning,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackItem {
    pub category: FeedbackCategory,
    pub title: &'static str,
    pub text: String,
}

impl FeedbackItem {
    fn new(category: FeedbackCategory, title: &'static str, text: impl Into<String>) -> Self {
        Self {
            category,
            title,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SubScores {
    pub length: u32,
    pub personal_voice: u32,
    pub specificity: u32,
    pub goals: u32,
    pub structure: u32,
    pub passion: u32,
}

impl SubScores {
    pub fn total(&self) -> u32 {
        self.length + self.personal_voice + self.specificity + self.goals + self.structure + self.passion
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EssayAnalysis {
    pub score: u32,
    pub sub_scores: SubScores,
    /// One item per criterion, in rubric order.
    pub feedback: Vec<FeedbackItem>,
}

impl EssayAnalysis {
    pub fn percentage(&self) -> u32 {
        ((self.score as f64 / MAX_SCORE as f64) * 100.0).round() as u32
    }

    pub fn rating(&self) -> Rating {
        Rating::for_percentage(self.percentage())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Excellent,
    Good,
    NeedsWork,
    NeedsMajorRevision,
}

impl Rating {
    /// Bands are inclusive at their lower bound.
    pub fn for_percentage(percentage: u32) -> Self {
        if percentage >= 85 {
            Rating::Excellent
        } else if percentage >= 70 {
            Rating::Good
        } else if percentage >= 50 {
            Rating::NeedsWork
        } else {
            Rating::NeedsMajorRevision
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::NeedsWork => "Needs Work",
            Rating::NeedsMajorRevision => "Needs Major Revision",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Rating::Excellent => "excellent",
            Rating::Good => "good",
            Rating::NeedsWork => "needs-work",
            Rating::NeedsMajorRevision => "poor",
        }
    }
}

/// Outcome of a single rubric criterion.
struct Criterion {
    points: u32,
    feedback: FeedbackItem,
}

/// Scores an essay. Rejects text shorter than `MIN_ESSAY_CHARS` after trimming;
/// no partial analysis is produced in that case.
pub fn score_essay(text: &str) -> Result<EssayAnalysis, EssayError> {
    let text = text.trim();
    let chars = char_count(text);
    if chars < MIN_ESSAY_CHARS {
        return Err(EssayError::TooShort {
            chars,
            min: MIN_ESSAY_CHARS,
        });
    }

    let length = score_length(word_count(text));
    let personal = score_personal_voice(PERSONAL.find_iter(text).count(), STORY.is_match(text));
    let specificity =
        score_specificity(SPECIFIC.find_iter(text).count(), VAGUE.find_iter(text).count());
    let goals = score_goals(GOALS.find_iter(text).count());
    let structure = score_structure(
        paragraphs(text).len(),
        average_sentence_length(&sentences(text, STRUCTURE_SENTENCE_MIN_CHARS)),
    );
    let passion = score_passion(PASSION.find_iter(text).count());

    let sub_scores = SubScores {
        length: length.points,
        personal_voice: personal.points,
        specificity: specificity.points,
        goals: goals.points,
        structure: structure.points,
        passion: passion.points,
    };

    Ok(EssayAnalysis {
        score: sub_scores.total(),
        sub_scores,
        feedback: vec![
            length.feedback,
            personal.feedback,
            specificity.feedback,
            goals.feedback,
            structure.feedback,
            passion.feedback,
        ],
    })
}

fn score_length(words: usize) -> Criterion {
    use FeedbackCategory::*;

    if (IDEAL_WORDS_MIN..=IDEAL_WORDS_MAX).contains(&words) {
        Criterion {
            points: 15,
            feedback: FeedbackItem::new(
                Positive,
                "Perfect Length",
                format!("Your essay has {words} words - ideal for scholarship applications (250-650 words)."),
            ),
        }
    } else if words < IDEAL_WORDS_MIN {
        Criterion {
            points: 8,
            feedback: FeedbackItem::new(
                Warning,
                "Too Short",
                format!("Your essay has {words} words. Most scholarships require 250-650 words. Add more specific examples and details."),
            ),
        }
    } else {
        Criterion {
            points: 10,
            feedback: FeedbackItem::new(
                Warning,
                "Too Long",
                format!("Your essay has {words} words. Consider cutting to 250-650 words to stay focused and respect word limits."),
            ),
        }
    }
}

fn score_personal_voice(personal_count: usize, has_story: bool) -> Criterion {
    use FeedbackCategory::*;

    if personal_count >= 5 && has_story {
        Criterion {
            points: 20,
            feedback: FeedbackItem::new(
                Positive,
                "Personal & Authentic",
                "Great use of personal experiences and stories! This makes your essay engaging and unique.",
            ),
        }
    } else if personal_count >= 3 {
        Criterion {
            points: 12,
            feedback: FeedbackItem::new(
                Warning,
                "Add More Personal Stories",
                "Include specific anecdotes from your life to make your essay more memorable and authentic.",
            ),
        }
    } else {
        Criterion {
            points: 5,
            feedback: FeedbackItem::new(
                Negative,
                "Too Generic",
                "Your essay lacks personal examples. Share specific experiences, challenges, or moments that shaped you.",
            ),
        }
    }
}

fn score_specificity(specific_count: usize, vague_count: usize) -> Criterion {
    use FeedbackCategory::*;

    if specific_count > vague_count && specific_count >= 3 {
        Criterion {
            points: 20,
            feedback: FeedbackItem::new(
                Positive,
                "Specific & Detailed",
                "Excellent use of specific examples, numbers, and concrete details. This makes your essay credible.",
            ),
        }
    } else if specific_count >= 2 {
        Criterion {
            points: 12,
            feedback: FeedbackItem::new(
                Warning,
                "Add More Specifics",
                "Replace vague words (\"good\", \"nice\", \"many\") with specific details, numbers, and examples.",
            ),
        }
    } else {
        Criterion {
            points: 5,
            feedback: FeedbackItem::new(
                Negative,
                "Too Vague",
                "Your essay uses too many general statements. Add specific names, numbers, achievements, and details.",
            ),
        }
    }
}

fn score_goals(goal_count: usize) -> Criterion {
    use FeedbackCategory::*;

    if goal_count >= 4 {
        Criterion {
            points: 20,
            feedback: FeedbackItem::new(
                Positive,
                "Clear Goals & Impact",
                "You clearly articulate your goals and how you'll make an impact. Scholarship committees love this!",
            ),
        }
    } else if goal_count >= 2 {
        Criterion {
            points: 12,
            feedback: FeedbackItem::new(
                Warning,
                "Strengthen Your Vision",
                "Expand on your future goals and how this scholarship will help you achieve them.",
            ),
        }
    } else {
        Criterion {
            points: 5,
            feedback: FeedbackItem::new(
                Negative,
                "Missing Future Vision",
                "Explain your goals and how you plan to contribute to your field or community after graduation.",
            ),
        }
    }
}

/// An undefined average (no qualifying sentences) can never reach the top tier.
fn score_structure(paragraph_count: usize, avg_sentence_len: Option<f64>) -> Criterion {
    use FeedbackCategory::*;

    let readable = avg_sentence_len.is_some_and(|avg| avg > 10.0 && avg < 25.0);

    if (3..=5).contains(&paragraph_count) && readable {
        Criterion {
            points: 15,
            feedback: FeedbackItem::new(
                Positive,
                "Well-Structured",
                format!("Great structure with {paragraph_count} paragraphs and clear, readable sentences."),
            ),
        }
    } else if paragraph_count >= 2 {
        Criterion {
            points: 10,
            feedback: FeedbackItem::new(
                Warning,
                "Improve Structure",
                "Aim for 3-5 paragraphs with varied sentence lengths. Break up long paragraphs for better readability.",
            ),
        }
    } else {
        Criterion {
            points: 5,
            feedback: FeedbackItem::new(
                Negative,
                "Poor Structure",
                "Break your essay into clear paragraphs: Introduction, Body (experiences/goals), and Conclusion.",
            ),
        }
    }
}

fn score_passion(passion_count: usize) -> Criterion {
    use FeedbackCategory::*;

    if passion_count >= 2 {
        Criterion {
            points: 10,
            feedback: FeedbackItem::new(
                Positive,
                "Passionate & Motivated",
                "Your enthusiasm shines through! This energy makes your essay compelling.",
            ),
        }
    } else {
        Criterion {
            points: 5,
            feedback: FeedbackItem::new(
                Warning,
                "Show Your Passion",
                "Let your excitement and dedication come through more clearly. Why does this matter to you?",
            ),
        }
    }
}
