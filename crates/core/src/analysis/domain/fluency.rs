use crate::lexicon::vocabulary::FILLERS;
use crate::shared::band::to_band;
use crate::shared::constants::{BAND_BASE, BAND_FLOOR};

use super::transcript::TranscriptStats;

/// Fluency & Coherence outcome before it is turned into report text.
#[derive(Clone, Debug, PartialEq)]
pub struct FluencyAssessment {
    pub score: f64,
    pub fillers: usize,
    pub filler_ratio: f64,
}

pub fn assess_fluency(stats: &TranscriptStats) -> FluencyAssessment {
    if stats.is_empty() {
        return FluencyAssessment {
            score: BAND_FLOOR,
            fillers: 0,
            filler_ratio: 0.0,
        };
    }

    let mut score = BAND_BASE + speed_bonus(stats.wpm);

    let fillers = count_fillers(&stats.words);
    let filler_ratio = fillers as f64 / stats.word_count() as f64;
    score -= filler_penalty(filler_ratio);

    if stats.avg_sentence_length() > 15.0 {
        score += 0.5;
    }

    FluencyAssessment {
        score: to_band(score),
        fillers,
        filler_ratio,
    }
}

fn speed_bonus(wpm: u32) -> f64 {
    match wpm {
        w if w > 140 => 2.5,
        w if w > 120 => 2.0,
        w if w > 100 => 1.5,
        w if w > 80 => 0.5,
        _ => 0.0,
    }
}

fn filler_penalty(ratio: f64) -> f64 {
    if ratio > 0.15 {
        2.0
    } else if ratio > 0.10 {
        1.0
    } else if ratio > 0.05 {
        0.5
    } else {
        0.0
    }
}

/// Counts filler occurrences, treating a multi-word filler as one occurrence.
///
/// Longer fillers are tried first, so "sort of" counts once.
pub fn count_fillers(words: &[String]) -> usize {
    let max_len = FILLERS
        .iter()
        .map(|f| f.split_whitespace().count())
        .max()
        .unwrap_or(1);

    let mut count = 0;
    let mut i = 0;
    while i < words.len() {
        let matched = (1..=max_len.min(words.len() - i)).rev().find(|&len| {
            let candidate = words[i..i + len].join(" ");
            FILLERS.contains(&candidate.as_str())
        });
        match matched {
            Some(len) => {
                count += 1;
                i += len;
            }
            None => i += 1,
        }
    }
    count
}
