//! Heuristic humanness scoring.
//!
//! Each check is an independent pure predicate over the text and the
//! locale's lexicon, returning the issue description when it fires. The
//! scoring function only counts issues, so individual heuristics can be
//! tuned or replaced without touching orchestration: `score = max(0, 100 -
//! 20 * issues)`, pass at 60 or above (at most two issues).

use serde::Serialize;

use crate::lexicon;
use crate::locales::Lexicon;
use crate::types::Locale;

/// Word-count variance below this reads as suspiciously uniform.
const SENTENCE_VARIANCE_THRESHOLD: f64 = 10.0;

/// Texts longer than this should carry an engagement question.
const QUESTION_LENGTH_THRESHOLD: usize = 300;

/// More emoji than this flags the text.
const MAX_EMOJI: usize = 1;

/// Pass threshold on the 0–100 score.
const PASS_SCORE: u8 = 60;

/// Verdict for one validation call. Transient; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub score: u8,
    pub issues: Vec<String>,
    pub passed: bool,
}

impl ValidationResult {
    fn from_issues(issues: Vec<String>) -> Self {
        let score = 100u8.saturating_sub((issues.len() as u8).saturating_mul(20));
        Self {
            score,
            issues,
            passed: score >= PASS_SCORE,
        }
    }
}

/// Score a finished text against the locale's lexicon and the structural
/// heuristics. Pure function; no I/O, no randomness.
pub fn validate(text: &str, locale: Locale) -> ValidationResult {
    let lexicon = lexicon::get(locale);

    let mut issues = Vec::new();
    issues.extend(check_opening(text, lexicon));
    issues.extend(check_phrases(text, lexicon));
    issues.extend(check_closing(text, lexicon));
    issues.extend(check_idiom_tells(text, lexicon));
    issues.extend(check_sentence_variance(text));
    issues.extend(check_question(text));
    issues.extend(check_emoji_density(text));

    ValidationResult::from_issues(issues)
}

// ---------------------------------------------------------------------------
// Individual checks
// ---------------------------------------------------------------------------

/// Flag a text that opens with a known machine-style opener.
pub fn check_opening(text: &str, lexicon: &Lexicon) -> Option<String> {
    let lowered = text.trim_start().to_lowercase();
    lexicon
        .forbidden_openings
        .iter()
        .find(|opening| lowered.starts_with(opening.as_str()))
        .map(|opening| format!("Starts with forbidden opening '{opening}'"))
}

/// Flag every forbidden phrase occurring anywhere in the text, one issue
/// per matched table entry, in table order.
pub fn check_phrases(text: &str, lexicon: &Lexicon) -> Vec<String> {
    let lowered = text.to_lowercase();
    lexicon
        .forbidden_phrases
        .iter()
        .filter(|phrase| lowered.contains(phrase.as_str()))
        .map(|phrase| format!("Contains forbidden phrase '{phrase}'"))
        .collect()
}

/// Flag a text that ends with a known boilerplate closing, tolerating a
/// single trailing `.` or `!` after it — no more.
pub fn check_closing(text: &str, lexicon: &Lexicon) -> Option<String> {
    let lowered = text.trim_end().to_lowercase();
    let stripped = lowered
        .strip_suffix('.')
        .or_else(|| lowered.strip_suffix('!'))
        .unwrap_or(&lowered);
    lexicon
        .forbidden_closings
        .iter()
        .find(|closing| lowered.ends_with(closing.as_str()) || stripped.ends_with(closing.as_str()))
        .map(|closing| format!("Ends with forbidden closing '{closing}'"))
}

/// Flag the first locale-specific idiom tell found in the text.
pub fn check_idiom_tells(text: &str, lexicon: &Lexicon) -> Option<String> {
    let lowered = text.to_lowercase();
    lexicon
        .idiom_tells
        .iter()
        .find(|tell| lowered.contains(tell.as_str()))
        .map(|tell| format!("Contains machine-style construction '{tell}'"))
}

/// Flag texts whose sentences are all the same length. Needs at least
/// three sentences to say anything.
pub fn check_sentence_variance(text: &str) -> Option<String> {
    let word_counts: Vec<f64> = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| fragment.split_whitespace().count() as f64)
        .collect();

    if word_counts.len() < 3 {
        return None;
    }

    let mean = word_counts.iter().sum::<f64>() / word_counts.len() as f64;
    let variance = word_counts
        .iter()
        .map(|count| (count - mean).powi(2))
        .sum::<f64>()
        / word_counts.len() as f64;

    (variance < SENTENCE_VARIANCE_THRESHOLD)
        .then(|| "Sentence lengths are too uniform; vary short and long sentences".to_string())
}

/// Flag long texts with no engagement question.
pub fn check_question(text: &str) -> Option<String> {
    (text.chars().count() > QUESTION_LENGTH_THRESHOLD && !text.contains('?'))
        .then(|| "Long text with no question to the reader".to_string())
}

/// Flag texts with more than one emoji codepoint.
pub fn check_emoji_density(text: &str) -> Option<String> {
    let count = text.chars().filter(|c| is_emoji(*c)).count();
    (count > MAX_EMOJI).then(|| format!("Contains {count} emoji; at most one is allowed"))
}

fn is_emoji(c: char) -> bool {
    matches!(
        c as u32,
        0x1F300..=0x1FAFF | 0x2600..=0x27BF | 0x1F1E6..=0x1F1FF | 0xFE0F
    )
}
