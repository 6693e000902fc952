use crate::shared::band::to_band;
use crate::shared::constants::{BAND_BASE, BAND_FLOOR};

use super::transcript::TranscriptStats;

/// Estimates a pronunciation band from text features alone.
///
/// No audio is inspected: speaking rate, word length and the fluency band
/// stand in for clarity. Treat the result as a proxy, not a measurement.
pub fn assess_pronunciation(stats: &TranscriptStats, fluency_score: f64) -> f64 {
    if stats.is_empty() {
        return BAND_FLOOR;
    }

    let mut score = BAND_BASE;
    if stats.wpm > 110 {
        score += 1.5;
    }
    if stats.avg_word_length() > 5.0 {
        score += 1.0;
    }
    if fluency_score > 7.0 {
        score += 1.0;
    }
    to_band(score)
}
