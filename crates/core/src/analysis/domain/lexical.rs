use std::collections::{HashMap, HashSet};

use crate::lexicon::vocabulary::{is_advanced, is_basic, topic_keywords};
use crate::shared::band::to_band;
use crate::shared::constants::{BAND_BASE, BAND_FLOOR};

use super::transcript::TranscriptStats;

/// Lexical Resource outcome.
///
/// `*_count` fields count every occurrence; the word lists are distinct and
/// keep first-use order, except `basic_used` which keeps every occurrence.
#[derive(Clone, Debug, PartialEq)]
pub struct LexicalAssessment {
    pub score: f64,
    pub advanced_count: usize,
    pub advanced_used: Vec<String>,
    pub topic_count: usize,
    pub topic_used: Vec<String>,
    pub basic_used: Vec<String>,
    pub repeated: Vec<String>,
}

pub fn assess_lexical(stats: &TranscriptStats, topic: &str) -> LexicalAssessment {
    let keywords = topic_keywords(topic);
    if keywords.is_empty() {
        log::warn!("No topic vocabulary for '{topic}'");
    }

    let advanced: Vec<&String> = stats.words.iter().filter(|w| is_advanced(w)).collect();
    let basic: Vec<&String> = stats.words.iter().filter(|w| is_basic(w)).collect();
    let topical: Vec<&String> = stats
        .words
        .iter()
        .filter(|w| keywords.iter().any(|stem| w.contains(stem)))
        .collect();
    let repeated = repeated_words(&stats.words);

    let score = if stats.is_empty() {
        BAND_FLOOR
    } else {
        let mut score = BAND_BASE;
        score += match advanced.len() {
            n if n > 5 => 2.0,
            n if n > 2 => 1.0,
            _ => 0.0,
        };
        score += match topical.len() {
            n if n > 3 => 1.0,
            n if n > 1 => 0.5,
            _ => 0.0,
        };
        if basic.len() > 10 {
            score -= 1.0;
        }
        if repeated.len() > 2 {
            score -= 0.5;
        }
        to_band(score)
    };

    LexicalAssessment {
        score,
        advanced_count: advanced.len(),
        advanced_used: distinct(&advanced),
        topic_count: topical.len(),
        topic_used: distinct(&topical),
        basic_used: basic.into_iter().cloned().collect(),
        repeated,
    }
}

/// Words longer than four characters that occur more than twice.
fn repeated_words(words: &[String]) -> Vec<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in words.iter().filter(|w| w.chars().count() > 4) {
        let count = counts.entry(word.as_str()).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }
    order
        .into_iter()
        .filter(|w| counts[w] > 2)
        .map(str::to_string)
        .collect()
}

fn distinct(words: &[&String]) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .iter()
        .filter(|w| seen.insert(w.as_str()))
        .map(|w| w.to_string())
        .collect()
}
