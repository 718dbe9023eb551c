//! Text measurements shared by the essay scorers.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Blank line: a newline, optional horizontal/vertical whitespace, another newline.
static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("paragraph pattern is valid"));

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Live counter values for the essay box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EssayStats {
    pub word_count: usize,
    pub char_count: usize,
}

pub fn essay_stats(text: &str) -> EssayStats {
    let trimmed = text.trim();
    EssayStats {
        word_count: word_count(trimmed),
        char_count: char_count(trimmed),
    }
}

/// Whitespace-delimited tokens. Empty or blank text has zero words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Fragments between `.`, `!` and `?` whose trimmed length exceeds `min_chars`.
pub fn sentences(text: &str, min_chars: usize) -> Vec<&str> {
    text.split(&SENTENCE_TERMINATORS[..])
        .filter(|s| char_count(s.trim()) > min_chars)
        .collect()
}

/// Words per sentence. `None` when there are no sentences.
pub fn average_sentence_length(sentences: &[&str]) -> Option<f64> {
    if sentences.is_empty() {
        return None;
    }
    let words: usize = sentences.iter().map(|s| word_count(s)).sum();
    Some(words as f64 / sentences.len() as f64)
}

/// Non-blank blocks separated by blank lines.
pub fn paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_zero_words() {
        assert_eq!(word_count(""), 0);
        assert_eq!(essay_stats("   \n\t ").word_count, 0);
        assert_eq!(essay_stats("   ").char_count, 0);
    }

    #[test]
    fn test_stats_use_trimmed_text() {
        let stats = essay_stats("  Hello   brave\nnew world  ");
        assert_eq!(stats.word_count, 4);
        assert_eq!(stats.char_count, "Hello   brave\nnew world".len());
    }

    #[test]
    fn test_char_count_counts_characters_not_bytes() {
        assert_eq!(char_count("café"), 4);
    }

    #[test]
    fn test_sentences_drop_blank_fragments() {
        let s = sentences("One two. Three!  ? Four five six?", 0);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_sentences_respect_min_chars() {
        let s = sentences("Short. This sentence is long enough.", 10);
        assert_eq!(s, vec![" This sentence is long enough"]);
    }

    #[test]
    fn test_average_sentence_length() {
        let s = sentences("One two three. Four five.", 0);
        assert_eq!(average_sentence_length(&s), Some(2.5));
        assert_eq!(average_sentence_length(&[]), None);
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        let text = "First para.\n\nSecond para.\n   \nThird para.\n\n\n";
        assert_eq!(paragraphs(text).len(), 3);
        assert_eq!(paragraphs("Single line\nstill same para").len(), 1);
    }
}
