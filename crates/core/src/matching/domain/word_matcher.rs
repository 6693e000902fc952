use once_cell::sync::Lazy;
use regex::Regex;
use strsim::levenshtein;

use crate::shared::constants::MATCH_HORIZON;

use super::phonetic::phonetic_code;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("literal pattern"));

/// How a target word was recognized in the spoken input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Phonetic,
    Fuzzy,
}

/// A target word located in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordMatch {
    pub input_index: usize,
    pub kind: MatchKind,
}

/// Greedy, forward-only alignment of a reference phrase against a
/// recognized utterance.
///
/// Each target word searches at most [`MATCH_HORIZON`] input words ahead of
/// the cursor. A hit moves the cursor past the matched word; a miss leaves
/// it in place so a skipped word does not derail the rest of the phrase.
/// Cost is linear in the target length, cheap enough to rerun on every
/// partial transcript.
pub fn align_words(target: &str, input: &str) -> Vec<Option<WordMatch>> {
    let target_words = normalize(target);
    let input_words = normalize(input);

    let mut alignment = vec![None; target_words.len()];
    let mut cursor = 0;

    for (slot, target_word) in alignment.iter_mut().zip(&target_words) {
        let window_end = (cursor + MATCH_HORIZON).min(input_words.len());
        let found = (cursor..window_end).find_map(|i| {
            classify(target_word, &input_words[i]).map(|kind| WordMatch {
                input_index: i,
                kind,
            })
        });
        if let Some(m) = found {
            cursor = m.input_index + 1;
            *slot = Some(m);
        }
    }
    alignment
}

/// Target words as the matcher sees them: lowercased, punctuation stripped.
///
/// Index `i` labels entry `i` of [`align_words`] and [`get_word_match_status`];
/// punctuation-only tokens such as `&` do not get an entry.
pub fn target_words(target: &str) -> Vec<String> {
    normalize(target)
}

/// Per-target-word match mask; always one entry per target word.
pub fn get_word_match_status(target: &str, input: &str) -> Vec<bool> {
    align_words(target, input)
        .iter()
        .map(Option::is_some)
        .collect()
}

/// Percentage of target words found in the input, rounded to an integer.
pub fn calculate_similarity(target: &str, input: &str) -> u8 {
    let mask = get_word_match_status(target, input);
    if mask.is_empty() {
        return 0;
    }
    let matched = mask.iter().filter(|m| **m).count();
    (100.0 * matched as f64 / mask.len() as f64).round() as u8
}

fn normalize(text: &str) -> Vec<String> {
    NON_WORD
        .replace_all(&text.to_lowercase(), "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn classify(target: &str, candidate: &str) -> Option<MatchKind> {
    if target == candidate {
        return Some(MatchKind::Exact);
    }
    if phonetic_code(target) == phonetic_code(candidate) {
        return Some(MatchKind::Phonetic);
    }
    let length = target.chars().count();
    // Short words only match exactly or phonetically.
    if length > 3 {
        let tolerance = if length > 5 { 2 } else { 1 };
        if levenshtein(target, candidate) <= tolerance {
            return Some(MatchKind::Fuzzy);
        }
    }
    None
}
